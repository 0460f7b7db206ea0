//! `key=value&key=value` encoding of [`ShapeParams`], the form shapes take in
//! shareable URL fragments.

use crate::{
    foundation::error::{BlobError, BlobResult},
    foundation::math::fmt_number,
    random::seeded::seed_from_string,
    shape::params::ShapeParams,
};

impl ShapeParams {
    /// Decode query state on top of the defaults.
    ///
    /// A leading `#` or `?` is ignored, as are unknown keys. Seeds that are not
    /// plain `u32` literals go through [`seed_from_string`].
    pub fn from_query(query: &str) -> BlobResult<Self> {
        let query = query.trim();
        let query = query
            .strip_prefix('#')
            .or_else(|| query.strip_prefix('?'))
            .unwrap_or(query);

        let mut params = Self::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = percent_decode(key);
            let value = percent_decode(value);
            match key.as_str() {
                "seed" => {
                    params.seed = value
                        .trim()
                        .parse::<u32>()
                        .unwrap_or_else(|_| seed_from_string(&value));
                }
                "points" | "point_count" => params.point_count = parse_count(&key, &value)?,
                "radius" => params.radius = parse_number(&key, &value)?,
                "variance" => params.variance = parse_number(&key, &value)?,
                "smooth" | "tension" => params.tension = parse_number(&key, &value)?,
                "jitter" => params.jitter = parse_number(&key, &value)?,
                _ => tracing::debug!(key = %key, "ignoring unknown query key"),
            }
        }

        params.validate()?;
        Ok(params)
    }

    /// Encode as query state. `radius` is written only when it differs from the default.
    ///
    /// Links open in the advanced editor, since every field may differ from the preset.
    pub fn to_query(&self) -> String {
        let mut out = format!(
            "mode=advanced&seed={}&points={}&variance={}&smooth={}&jitter={}",
            self.seed,
            self.point_count,
            fmt_number(self.variance),
            fmt_number(self.tension),
            fmt_number(self.jitter),
        );
        if self.radius != Self::DEFAULT_RADIUS {
            out.push_str("&radius=");
            out.push_str(&fmt_number(self.radius));
        }
        out
    }
}

fn parse_number(key: &str, value: &str) -> BlobResult<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BlobError::parse(format!("query key '{key}' has an empty value")));
    }
    value
        .parse::<f64>()
        .map_err(|_| BlobError::parse(format!("query key '{key}' is not a number: '{value}'")))
}

fn parse_count(key: &str, value: &str) -> BlobResult<usize> {
    let n = parse_number(key, value)?;
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 || n > usize::MAX as f64 {
        return Err(BlobError::parse(format!(
            "query key '{key}' must be a non-negative integer: '{value}'"
        )));
    }
    Ok(n as usize)
}

// Form-urlencoded unescaping: '+' is a space, malformed escapes stay literal.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => match bytes.get(i + 1..i + 3).and_then(|h| hex_pair(h[0], h[1])) {
                Some(b) => {
                    out.push(b);
                    i += 2;
                }
                None => out.push(b'%'),
            },
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/shape/query.rs"]
mod tests;
