use crate::{
    export::svg::{SvgOptions, download_file_name, render_svg_document},
    foundation::core::{BezPath, PointSequence},
    foundation::error::BlobResult,
    shape::curve::{closed_cr_bezpath, closed_cr_to_bezier},
    shape::params::ShapeParams,
    shape::sampler::generate_points,
};

/// A generated blob: its params, outline points and path data.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Blob {
    /// Params the blob was generated from.
    pub params: ShapeParams,
    /// Outline points in angular order.
    pub points: PointSequence,
    /// SVG path data (`M ... C ... Z`).
    pub path: String,
}

impl Blob {
    /// Run the full pipeline: validate, sample points, convert to path data.
    #[tracing::instrument(level = "debug", skip_all, fields(seed = params.seed, points = params.point_count))]
    pub fn generate(params: &ShapeParams) -> BlobResult<Self> {
        let points = generate_points(params)?;
        tracing::debug!(count = points.len(), "sampled outline");
        let path = closed_cr_to_bezier(&points, params.tension)?;
        tracing::debug!(bytes = path.len(), "built path data");
        Ok(Self {
            params: *params,
            points,
            path,
        })
    }

    /// Unrounded curve geometry of this blob.
    pub fn bez_path(&self) -> BlobResult<BezPath> {
        closed_cr_bezpath(&self.points, self.params.tension)
    }

    /// Standalone SVG document for this blob.
    pub fn to_svg(&self, opts: &SvgOptions) -> BlobResult<String> {
        render_svg_document(&self.path, opts)
    }

    /// Download file name, `blob-<seed>.svg`.
    pub fn file_name(&self) -> String {
        download_file_name(self.params.seed)
    }
}
