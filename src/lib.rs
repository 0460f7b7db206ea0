//! blobforge generates organic closed "blob" shapes as SVG path data.
//!
//! A blob is a pure function of its [`ShapeParams`]:
//!
//! 1. **Seed**: a Mulberry32 stream ([`Mulberry32`], [`create_prng`]) seeded from
//!    `ShapeParams::seed`; human-friendly text goes through [`seed_from_string`].
//! 2. **Sample**: `point_count` points evenly spaced around a circle, perturbed
//!    radially by `variance` and angularly by `jitter` ([`generate_points`]).
//! 3. **Curve**: a closed Catmull-Rom spline through the points, emitted as cubic
//!    Bezier path data with two-decimal coordinates ([`closed_cr_to_bezier`]).
//!
//! [`Blob::generate`] runs all three; [`render_svg_document`] wraps the result in
//! a standalone SVG file. Params travel as JSON or as URL-fragment query state
//! ([`ShapeParams::from_query`], [`ShapeParams::to_query`]).
//!
//! Randomize actions draw new seeds from an [`AmbientRandomSource`], which never
//! feeds shape generation itself.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod blob;
mod export;
mod foundation;
mod random;
mod shape;

pub use blob::Blob;
pub use export::svg::{DEFAULT_FILL, SvgOptions, download_file_name, render_svg_document};
pub use foundation::core::{BezPath, CubicBez, Point, PointSequence, Rect, Vec2};
pub use foundation::error::{BlobError, BlobResult};
pub use random::ambient::{AmbientRandomSource, thread_ambient};
pub use random::seeded::{Mulberry32, SeededRandomSource, create_prng, seed_from_string};
pub use shape::curve::{closed_cr_bezpath, closed_cr_cubics, closed_cr_to_bezier};
pub use shape::params::ShapeParams;
pub use shape::sampler::{generate_points, sample_points};
