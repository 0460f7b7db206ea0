use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::error::{BlobError, BlobResult},
    random::ambient::AmbientRandomSource,
    random::seeded::seed_from_string,
};

/// Everything that determines a blob.
///
/// Two blobs built from equal params are identical down to the path string.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    /// Seed of the point-field PRNG. 0 is valid.
    #[serde(deserialize_with = "deserialize_seed")]
    pub seed: u32,
    /// Number of outline points, in `3..=MAX_POINT_COUNT`.
    #[serde(alias = "points")]
    pub point_count: usize,
    /// Nominal distance of each point from the center.
    pub radius: f64,
    /// Symmetric radial perturbation as a fraction of `radius`.
    pub variance: f64,
    /// Maximum angular perturbation in radians.
    pub jitter: f64,
    /// Catmull-Rom tension; `smooth` in query state.
    #[serde(alias = "smooth")]
    pub tension: f64,
}

impl ShapeParams {
    /// Seed of the initial shape.
    pub const DEFAULT_SEED: u32 = 380_098_792;
    /// Point count of the basic preset.
    pub const DEFAULT_POINT_COUNT: usize = 5;
    /// Radius used by every preset.
    pub const DEFAULT_RADIUS: f64 = 150.0;
    /// Variance of the basic preset.
    pub const DEFAULT_VARIANCE: f64 = 0.39;
    /// Jitter of the basic preset.
    pub const DEFAULT_JITTER: f64 = 0.0;
    /// Tension of the basic preset.
    pub const DEFAULT_TENSION: f64 = 1.05;

    /// Largest accepted point count; keeps untrusted state from exhausting memory.
    pub const MAX_POINT_COUNT: usize = u16::MAX as usize;

    /// Upper bound of seeds drawn by the randomize actions.
    pub const MAX_RANDOM_SEED: i64 = 1 << 31;

    /// The basic preset with the given seed.
    pub fn basic(seed: u32) -> Self {
        Self {
            seed,
            point_count: Self::DEFAULT_POINT_COUNT,
            radius: Self::DEFAULT_RADIUS,
            variance: Self::DEFAULT_VARIANCE,
            jitter: Self::DEFAULT_JITTER,
            tension: Self::DEFAULT_TENSION,
        }
    }

    /// Copy with a different seed.
    pub fn with_seed(self, seed: u32) -> Self {
        Self { seed, ..self }
    }

    /// Copy with a fresh seed drawn from `ambient`; the shape settings are kept.
    pub fn randomize_seed<A>(self, ambient: &mut A) -> Self
    where
        A: AmbientRandomSource + ?Sized,
    {
        self.with_seed(draw_seed(ambient))
    }

    /// The basic preset with a fresh seed drawn from `ambient`.
    pub fn random_basic<A>(ambient: &mut A) -> Self
    where
        A: AmbientRandomSource + ?Sized,
    {
        Self::basic(draw_seed(ambient))
    }

    /// Check the preconditions of point sampling and curve conversion.
    pub fn validate(&self) -> BlobResult<()> {
        if self.point_count < 3 {
            return Err(BlobError::validation(format!(
                "shape point_count must be >= 3 (got {})",
                self.point_count
            )));
        }
        if self.point_count > Self::MAX_POINT_COUNT {
            return Err(BlobError::validation(format!(
                "shape point_count must be <= {} (got {})",
                Self::MAX_POINT_COUNT,
                self.point_count
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(BlobError::validation("shape radius must be finite and > 0"));
        }
        if !self.variance.is_finite() {
            return Err(BlobError::validation("shape variance must be finite"));
        }
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(BlobError::validation("shape jitter must be finite and >= 0"));
        }
        if !self.tension.is_finite() {
            return Err(BlobError::validation("shape tension must be finite"));
        }
        Ok(())
    }

    /// Parse and validate params from JSON. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> BlobResult<Self> {
        let params: Self = serde_json::from_reader(r)
            .map_err(|e| BlobError::serde(format!("parse shape params JSON: {e}")))?;
        params.validate()?;
        Ok(params)
    }

    /// Parse and validate params from a JSON string.
    pub fn from_json_str(s: &str) -> BlobResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate params from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BlobResult<Self> {
        let path = path.as_ref();
        let f =
            File::open(path).with_context(|| format!("open shape params '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self::basic(Self::DEFAULT_SEED)
    }
}

fn draw_seed<A>(ambient: &mut A) -> u32
where
    A: AmbientRandomSource + ?Sized,
{
    ambient.rand_int(1, ShapeParams::MAX_RANDOM_SEED) as u32
}

fn deserialize_seed<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Raw(u32),
        Text(String),
    }

    match <Repr as serde::Deserialize>::deserialize(deserializer)? {
        Repr::Raw(seed) => Ok(seed),
        Repr::Text(text) => Ok(seed_from_string(&text)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/params.rs"]
mod tests;
