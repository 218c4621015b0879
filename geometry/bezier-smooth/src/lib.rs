//! Bézier spline smoothing for line and polygon geometries.
//!
//! This crate turns sparse polylines and polygon rings into dense, visually
//! curved ones. A cubic [Bézier spline](https://en.wikipedia.org/wiki/B%C3%A9zier_curve)
//! is fitted through the vertices of each line or ring and re-sampled at a
//! fixed time resolution. The spline construction follows Leszek Rybicki's
//! bezier-spline technique: control points are derived from edge midpoints
//! and pulled toward each vertex by a sharpness factor.
//!
//! - [`smooth`] / [`smooth_geometry`] - Dispatch over geometry variants
//! - [`smooth_line`] / [`sample`] - Smooth a single coordinate sequence
//! - [`Spline`] - The immutable spline: construction and evaluation
//! - [`CubicBezier`] - A single spline segment
//! - [`is_ring`] - Closed ring detection
//!
//! # Example
//!
//! ```
//! use bezier_smooth::{smooth_geometry, Geometry, SmoothParams};
//!
//! let ring = vec![
//!     vec![0.0, 0.0],
//!     vec![10.0, 0.0],
//!     vec![10.0, 10.0],
//!     vec![0.0, 10.0],
//!     vec![0.0, 0.0],
//! ];
//! let polygon = Geometry::polygon(vec![ring]);
//!
//! let smoothed = smooth_geometry(&polygon, &SmoothParams::default()).unwrap();
//! let Geometry::Polygon { coordinates } = smoothed else {
//!     unreachable!()
//! };
//!
//! // The smoothed ring is still closed
//! assert_eq!(coordinates[0].first(), coordinates[0].last());
//! ```
//!
//! # Time and resolution
//!
//! Each spline is swept over a synthetic time span (`resolution`, default
//! 10000). Every segment between two vertices gets an equal share of that
//! span, and the curve is evaluated every 10 time units. Samples in every
//! other 100-unit window are kept, so a resolution of 5000 produces 250
//! output coordinates per line.
//!
//! # Feature Flags
//!
//! - `serde` (default): GeoJSON (de)serialization for [`Geometry`] and
//!   [`Feature`], and serialization for parameter and spline value types.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::missing_panics_doc
)]

mod bezier;
mod error;
mod geometry;
mod params;
mod ring;
mod sampler;
mod smooth;
mod spline;

pub use bezier::CubicBezier;
pub use error::{Result, SmoothError};
pub use geometry::{Feature, Geometry, Position};
pub use params::{
    DEFAULT_RESOLUTION, DEFAULT_SHARPNESS, DEFAULT_STEP_LENGTH, MAX_RESOLUTION, SmoothParams,
    SplineParams,
};
pub use ring::{MIN_RING_POINTS, is_ring};
pub use sampler::{sample, smooth_line};
pub use smooth::{smooth, smooth_geometry};
pub use spline::{ControlPair, Motion, Spline, TIME_STEP};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
