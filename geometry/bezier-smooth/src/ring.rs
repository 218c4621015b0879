//! Closed ring detection.

use nalgebra::Point3;

/// Minimum number of vertices in a closed ring (a triangle plus the
/// repeated closing vertex).
pub const MIN_RING_POINTS: usize = 4;

/// Check whether a point sequence is a closed ring.
///
/// A ring has at least [`MIN_RING_POINTS`] points and its first and last
/// points are exactly equal in `x` and `y`. The `z` component is ignored.
///
/// # Example
///
/// ```
/// use bezier_smooth::is_ring;
/// use nalgebra::Point3;
///
/// let square = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 0.0),
/// ];
/// assert!(is_ring(&square));
/// assert!(!is_ring(&square[..3]));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_ring(points: &[Point3<f64>]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= MIN_RING_POINTS => {
            first.x == last.x && first.y == last.y
        }
        _ => false,
    }
}
