//! Standalone SVG documents around a blob path.
//!
//! The viewBox hugs the path's exact bounding box plus padding; width and
//! height are the rounded box size plus padding on both sides.

use crate::{
    foundation::core::{BezPath, Shape as _},
    foundation::error::{BlobError, BlobResult},
    foundation::math::{fmt_fixed2, fmt_number, round_half_up},
};

/// Fill colour of exported blobs.
pub const DEFAULT_FILL: &str = "#6fe1c5";

/// Presentation settings for [`render_svg_document`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SvgOptions {
    /// Value of the path's `fill` attribute.
    pub fill: String,
    /// Space kept around the bounding box, in user units.
    pub padding: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL.to_string(),
            padding: 2.0,
        }
    }
}

impl SvgOptions {
    fn validate(&self) -> BlobResult<()> {
        if self.fill.trim().is_empty() {
            return Err(BlobError::validation("svg fill must be non-empty"));
        }
        if self.fill.contains(['"', '<', '>', '&']) {
            return Err(BlobError::validation(format!(
                "svg fill contains markup characters: '{}'",
                self.fill
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(BlobError::validation("svg padding must be finite and >= 0"));
        }
        Ok(())
    }
}

/// Wrap path data `d` in an XML-prologued `<svg>` document sized to the path.
pub fn render_svg_document(d: &str, opts: &SvgOptions) -> BlobResult<String> {
    opts.validate()?;
    let d = d.trim();
    let bbox = parse_svg_path(d)?.bounding_box();

    let pad = opts.padding;
    let x = bbox.x0 - pad;
    let y = bbox.y0 - pad;
    let w = fmt_number(round_half_up(bbox.width()) + pad * 2.0);
    let h = fmt_number(round_half_up(bbox.height()) + pad * 2.0);
    let view_box = format!("{} {} {w} {h}", fmt_fixed2(x), fmt_fixed2(y));

    Ok(format!(
        "<?xml version=\"1.0\" standalone=\"no\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{view_box}\" width=\"{w}\" height=\"{h}\">\
         <path d=\"{d}\" fill=\"{fill}\"/></svg>",
        fill = opts.fill,
    ))
}

/// File name under which the blob for `seed` is saved.
pub fn download_file_name(seed: u32) -> String {
    format!("blob-{seed}.svg")
}

fn parse_svg_path(d: &str) -> BlobResult<BezPath> {
    if d.is_empty() {
        return Err(BlobError::validation("svg path data must be non-empty"));
    }

    BezPath::from_svg(d).map_err(|e| BlobError::validation(format!("invalid svg path data: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
