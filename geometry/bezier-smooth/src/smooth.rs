//! Smoothing dispatch over geometry variants.

use rayon::prelude::*;
use tracing::info;

use crate::{Feature, Geometry, Position, Result, SmoothError, SmoothParams, smooth_line};

/// Smooth the geometry of a feature, keeping its properties.
///
/// # Errors
///
/// See [`smooth_geometry`].
///
/// # Example
///
/// ```
/// use bezier_smooth::{smooth, Feature, Geometry, SmoothParams};
///
/// let line = Feature::new(
///     Geometry::line_string(vec![
///         vec![-76.091308, 18.427501],
///         vec![-76.695556, 18.729501],
///         vec![-76.552734, 19.40443],
///         vec![-74.61914, 19.134789],
///         vec![-73.652343, 20.07657],
///         vec![-73.157958, 20.210656],
///     ]),
///     "stroke: #f00",
/// );
///
/// let curved = smooth(&line, &SmoothParams::new(5000.0, 0.985)).unwrap();
/// let Geometry::LineString { coordinates } = &curved.geometry else {
///     panic!("expected a line string");
/// };
/// assert_eq!(coordinates.len(), 250);
/// assert_eq!(curved.properties, "stroke: #f00");
/// ```
pub fn smooth<P: Clone>(feature: &Feature<P>, params: &SmoothParams) -> Result<Feature<P>> {
    let geometry = smooth_geometry(&feature.geometry, params)?;
    Ok(Feature::new(geometry, feature.properties.clone()))
}

/// Smooth every line or ring of a geometry, keeping its variant.
///
/// Each line or ring gets its own spline built with the same parameters.
/// Output lines and rings are in input order, also when processed in
/// parallel.
///
/// # Errors
///
/// - [`SmoothError::InvalidParameter`] if `params` fails validation.
/// - [`SmoothError::UnsupportedGeometry`] for points, multi points and
///   geometry collections.
/// - Any error from [`smooth_line`] for an individual line or ring.
pub fn smooth_geometry(geometry: &Geometry, params: &SmoothParams) -> Result<Geometry> {
    params.validate()?;

    info!(
        geometry = geometry.type_name(),
        lines = geometry.num_lines(),
        resolution = params.resolution,
        sharpness = params.sharpness,
        "Smoothing geometry"
    );

    match geometry {
        Geometry::LineString { coordinates } => {
            Ok(Geometry::line_string(smooth_line(coordinates, params)?))
        }
        Geometry::MultiLineString { coordinates } => {
            Ok(Geometry::multi_line_string(smooth_lines(coordinates, params)?))
        }
        Geometry::Polygon { coordinates } => {
            Ok(Geometry::polygon(smooth_lines(coordinates, params)?))
        }
        Geometry::MultiPolygon { coordinates } => {
            let polygons = map_members(coordinates, params, |rings| smooth_lines(rings, params))?;
            Ok(Geometry::multi_polygon(polygons))
        }
        Geometry::Point { .. } | Geometry::MultiPoint { .. } | Geometry::GeometryCollection { .. } => {
            Err(SmoothError::UnsupportedGeometry(geometry.type_name()))
        }
    }
}

fn smooth_lines(lines: &[Vec<Position>], params: &SmoothParams) -> Result<Vec<Vec<Position>>> {
    map_members(lines, params, |line| smooth_line(line, params))
}

/// Apply `f` to each member, in parallel above the configured threshold.
///
/// Stops at the first error in sequential mode; in parallel mode any one of
/// the failing members' errors is returned.
fn map_members<T, U, F>(members: &[T], params: &SmoothParams, f: F) -> Result<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> Result<U> + Sync + Send,
{
    if params.use_parallel(members.len()) {
        members.par_iter().map(f).collect()
    } else {
        members.iter().map(f).collect()
    }
}
