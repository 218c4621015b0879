//! Bézier spline through a sequence of vertices.
//!
//! The spline passes through every input vertex. Each pair of consecutive
//! vertices is joined by a [`CubicBezier`] whose inner control points come
//! from the [`ControlPair`]s of its two endpoints. Control pairs are derived
//! from the midpoints ("centers") of the neighboring edges, pulled toward the
//! vertex by the sharpness factor.
//!
//! The spline parameter is a synthetic time in `[0, duration)`. Every segment
//! gets the same share of time regardless of its length, so the speed along
//! the curve is not constant. [`Spline::steps`] holds time offsets that are
//! roughly evenly spaced along the curve for callers that need that.

use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::{CubicBezier, Result, SmoothError, SplineParams, is_ring};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time increment used when walking the spline parameter.
pub const TIME_STEP: f64 = 10.0;

/// Iterate over `0, TIME_STEP, 2·TIME_STEP, …` while below `duration`.
///
/// Yields `(index, time)` so callers can apply integer window rules without
/// float division.
pub(crate) fn sample_times(duration: f64) -> impl Iterator<Item = (u32, f64)> {
    (0_u32..)
        .map(|i| (i, f64::from(i) * TIME_STEP))
        .take_while(move |&(_, t)| t < duration)
}

/// The pair of control points attached to one spline vertex.
///
/// `before` shapes the curve arriving at the vertex and `after` shapes the
/// curve leaving it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControlPair {
    /// Control point on the incoming side.
    pub before: Point3<f64>,
    /// Control point on the outgoing side.
    pub after: Point3<f64>,
}

impl ControlPair {
    /// A pair with both controls on the vertex itself, which clamps the curve
    /// to that vertex with no tangent pull.
    #[must_use]
    pub const fn pinned(point: Point3<f64>) -> Self {
        Self {
            before: point,
            after: point,
        }
    }

    /// Compute the control pair for `support` from the centers of its two
    /// adjacent edges.
    ///
    /// Both centers are shifted by the offset from their mean to the support
    /// vertex, then blended with the support vertex by `sharpness`.
    #[must_use]
    pub fn from_centers(
        center1: Point3<f64>,
        center2: Point3<f64>,
        support: Point3<f64>,
        sharpness: f64,
    ) -> Self {
        let d = support - nalgebra::center(&center1, &center2);
        let keep = support.coords * (1.0 - sharpness);

        Self {
            before: Point3::from(keep + (center1.coords + d) * sharpness),
            after: Point3::from(keep + (center2.coords + d) * sharpness),
        }
    }
}

/// Direction and speed of travel at a time on the spline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Motion {
    /// Heading in the XY plane, in degrees counter-clockwise from +X.
    pub angle: f64,
    /// Distance covered across a `2 · TIME_STEP` window.
    pub speed: f64,
}

/// An immutable cubic Bézier spline through a sequence of points.
///
/// # Example
///
/// ```
/// use bezier_smooth::{Spline, SplineParams};
/// use nalgebra::Point3;
///
/// let points = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 10.0, 0.0),
///     Point3::new(20.0, 0.0, 0.0),
/// ];
/// let spline = Spline::new(&points, &SplineParams::new(1000.0, 0.85)).unwrap();
///
/// assert_eq!(spline.num_segments(), 2);
/// assert_eq!(spline.pos(0.0), points[0]);
/// assert_eq!(spline.controls().len(), spline.centers().len() + 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    points: Vec<Point3<f64>>,
    centers: Vec<Point3<f64>>,
    controls: Vec<ControlPair>,
    steps: Vec<f64>,
    duration: f64,
    sharpness: f64,
    step_length: f64,
    closed: bool,
}

impl Spline {
    /// Build a spline through `points`.
    ///
    /// The points are copied; the caller's slice is never modified. If the
    /// points form a closed ring (see [`is_ring`]) the seam vertex gets a
    /// real control pair shared by the first and last segments, so the
    /// tangent is continuous across the seam. Otherwise the ends are pinned
    /// to the first and last points.
    ///
    /// # Errors
    ///
    /// Returns [`SmoothError::InvalidParameter`] if `params` fails
    /// validation, or [`SmoothError::InsufficientPoints`] if fewer than 2
    /// points are given.
    pub fn new(points: &[Point3<f64>], params: &SplineParams) -> Result<Self> {
        params.validate()?;
        if points.len() < 2 {
            return Err(SmoothError::insufficient_points(2, points.len()));
        }

        let points = points.to_vec();
        let closed = is_ring(&points);
        let sharpness = params.sharpness;

        let centers: Vec<Point3<f64>> = points
            .windows(2)
            .map(|w| nalgebra::center(&w[0], &w[1]))
            .collect();

        let mut controls = Vec::with_capacity(centers.len() + 1);
        let (first_pair, last_pair) = if closed {
            // Seam: last center -> first center around points[0].
            let seam = ControlPair::from_centers(
                centers[centers.len() - 1],
                centers[0],
                points[0],
                sharpness,
            );
            (seam, seam)
        } else {
            (
                ControlPair::pinned(points[0]),
                ControlPair::pinned(points[points.len() - 1]),
            )
        };

        controls.push(first_pair);
        controls.extend(centers.windows(2).enumerate().map(|(i, w)| {
            ControlPair::from_centers(w[0], w[1], points[i + 1], sharpness)
        }));
        controls.push(last_pair);

        let mut spline = Self {
            points,
            centers,
            controls,
            steps: Vec::new(),
            duration: params.duration,
            sharpness,
            step_length: params.step_length,
            closed,
        };

        let mut steps = spline.cache_steps(params.step_length);
        if closed {
            let first = steps[0];
            if let Some(last) = steps.last_mut() {
                *last = first;
            }
        }
        spline.steps = steps;

        debug!(
            points = spline.points.len(),
            closed,
            steps = spline.steps.len(),
            "Built spline"
        );

        Ok(spline)
    }

    /// Position on the curve at `time`.
    ///
    /// Times at or past `duration` evaluate at `duration - 1`; negative times
    /// evaluate at 0. `pos(0.0)` is exactly the first point.
    #[must_use]
    pub fn pos(&self, time: f64) -> Point3<f64> {
        let time = if time >= self.duration {
            self.duration - 1.0
        } else {
            time
        };
        let time = time.max(0.0);

        let u = time / self.duration;
        if u >= 1.0 {
            return self.points[self.points.len() - 1];
        }

        let segments = self.num_segments();
        let scaled = segments as f64 * u;
        let n = (scaled.floor() as usize).min(segments - 1);
        let t = scaled - n as f64;

        self.segment_unchecked(n).point_at(t)
    }

    /// Direction and speed at `time`, by central difference over
    /// `time ± TIME_STEP`.
    #[must_use]
    pub fn vector(&self, time: f64) -> Motion {
        let ahead = self.pos(time + TIME_STEP);
        let behind = self.pos(time - TIME_STEP);
        let delta: Vector3<f64> = ahead - behind;

        Motion {
            angle: delta.y.atan2(delta.x).to_degrees(),
            speed: delta.norm(),
        }
    }

    /// Time offsets spaced at least `min_distance` apart along the curve.
    ///
    /// Walks the parameter in [`TIME_STEP`] increments and records a time
    /// whenever the chord from the last recorded position exceeds
    /// `min_distance`. The first entry is always 0.
    #[must_use]
    pub fn cache_steps(&self, min_distance: f64) -> Vec<f64> {
        let mut steps = vec![0.0];
        let mut last = self.pos(0.0);

        for (_, t) in sample_times(self.duration) {
            let step = self.pos(t);
            if (step - last).norm() > min_distance {
                steps.push(t);
                last = step;
            }
        }

        steps
    }

    /// The Bézier segment from `points[index]` to `points[index + 1]`.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<CubicBezier> {
        (index < self.num_segments()).then(|| self.segment_unchecked(index))
    }

    /// All Bézier segments in order.
    pub fn segments(&self) -> impl Iterator<Item = CubicBezier> + '_ {
        (0..self.num_segments()).map(|i| self.segment_unchecked(i))
    }

    fn segment_unchecked(&self, n: usize) -> CubicBezier {
        CubicBezier::new(
            self.points[n],
            self.controls[n].after,
            self.controls[n + 1].before,
            self.points[n + 1],
        )
    }

    /// The vertices the spline passes through.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Midpoints of consecutive vertex pairs.
    #[must_use]
    pub fn centers(&self) -> &[Point3<f64>] {
        &self.centers
    }

    /// One control pair per vertex, `centers().len() + 1` in total.
    #[must_use]
    pub fn controls(&self) -> &[ControlPair] {
        &self.controls
    }

    /// Cached arc-length-spaced time offsets.
    #[must_use]
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    /// Total time span of the parameter.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sharpness the controls were built with.
    #[must_use]
    pub fn sharpness(&self) -> f64 {
        self.sharpness
    }

    /// Spacing used for the step cache.
    #[must_use]
    pub fn step_length(&self) -> f64 {
        self.step_length
    }

    /// Whether the input points formed a closed ring.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of Bézier segments (`points().len() - 1`).
    #[must_use]
    pub fn num_segments(&self) -> usize {
        self.points.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point3<f64> {
        Point3::new(x, y, 0.0)
    }

    fn zigzag() -> Vec<Point3<f64>> {
        vec![p(0.0, 0.0), p(10.0, 10.0), p(20.0, 0.0), p(30.0, 10.0)]
    }

    fn square() -> Vec<Point3<f64>> {
        vec![
            p(0.0, 0.0),
            p(100.0, 0.0),
            p(100.0, 100.0),
            p(0.0, 100.0),
            p(0.0, 0.0),
        ]
    }

    fn build(points: &[Point3<f64>]) -> Spline {
        Spline::new(points, &SplineParams::new(1000.0, 0.85)).unwrap()
    }

    #[test]
    fn test_centers_are_midpoints() {
        let spline = build(&zigzag());
        assert_eq!(spline.centers().len(), 3);
        assert_eq!(spline.centers()[0], p(5.0, 5.0));
        assert_eq!(spline.centers()[1], p(15.0, 5.0));
        assert_eq!(spline.centers()[2], p(25.0, 5.0));
    }

    #[test]
    fn test_open_path_controls_are_pinned() {
        let points = zigzag();
        let spline = build(&points);

        assert!(!spline.is_closed());
        assert_eq!(spline.controls().len(), spline.centers().len() + 1);
        assert_eq!(spline.controls()[0], ControlPair::pinned(points[0]));
        assert_eq!(spline.controls()[3], ControlPair::pinned(points[3]));
    }

    #[test]
    fn test_interior_control_pair() {
        let spline = Spline::new(&zigzag(), &SplineParams::new(1000.0, 0.5)).unwrap();

        // Support (10, 10), centers (5, 5) and (15, 5): d = (0, 5, 0).
        let pair = spline.controls()[1];
        assert_relative_eq!(pair.before.coords, p(7.5, 10.0).coords, epsilon = 1e-12);
        assert_relative_eq!(pair.after.coords, p(12.5, 10.0).coords, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_sharpness_collapses_controls() {
        let points = zigzag();
        let spline = Spline::new(&points, &SplineParams::new(1000.0, 0.0)).unwrap();
        for (pair, point) in spline.controls().iter().zip(&points) {
            assert_eq!(pair.before, *point);
            assert_eq!(pair.after, *point);
        }
    }

    #[test]
    fn test_ring_shares_seam_pair() {
        let spline = build(&square());

        assert!(spline.is_closed());
        let controls = spline.controls();
        assert_eq!(controls.len(), spline.centers().len() + 1);
        assert_eq!(controls[0], controls[controls.len() - 1]);
        assert_ne!(controls[0], ControlPair::pinned(p(0.0, 0.0)));
    }

    #[test]
    fn test_ring_seam_is_tangent_continuous() {
        let spline = build(&square());
        let first = spline.segment(0).unwrap();
        let last = spline.segment(spline.num_segments() - 1).unwrap();

        let leaving = first.derivative_at(0.0).normalize();
        let arriving = last.derivative_at(1.0).normalize();
        assert_relative_eq!(leaving, arriving, epsilon = 1e-10);
    }

    #[test]
    fn test_z_control_uses_z_centers() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 10.0),
            Point3::new(20.0, 0.0, 0.0),
        ];
        let spline = Spline::new(&points, &SplineParams::new(1000.0, 1.0)).unwrap();

        // Centers z = 5 on both sides, d.z = 10 - 5 = 5.
        let pair = spline.controls()[1];
        assert_relative_eq!(pair.before.z, 10.0, epsilon = 1e-12);
        assert_relative_eq!(pair.after.z, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pos_at_zero_is_first_point() {
        let points = vec![p(-76.091308, 18.427501), p(-76.695556, 18.729501), p(-76.552734, 19.40443)];
        let spline = build(&points);
        assert_eq!(spline.pos(0.0), points[0]);
    }

    #[test]
    fn test_pos_hits_interior_vertices() {
        let points = zigzag();
        let spline = build(&points);

        // 3 segments over 1000 units: vertex i sits at time i * 1000 / 3.
        let at_second = spline.pos(1000.0 / 3.0);
        assert_relative_eq!(at_second.coords, points[1].coords, epsilon = 1e-9);
    }

    #[test]
    fn test_pos_clamps_time() {
        let spline = build(&zigzag());
        assert_eq!(spline.pos(-50.0), spline.pos(0.0));
        assert_eq!(spline.pos(1000.0), spline.pos(999.0));
        assert_eq!(spline.pos(5000.0), spline.pos(999.0));
    }

    #[test]
    fn test_pos_approaches_last_point() {
        let points = zigzag();
        let spline = build(&points);
        let end = spline.pos(999.0);
        assert!((end - points[3]).norm() < 0.5);
    }

    #[test]
    fn test_straight_line_stays_straight() {
        let spline = build(&[p(0.0, 0.0), p(10.0, 0.0), p(20.0, 0.0)]);
        for (_, t) in sample_times(spline.duration()) {
            assert_relative_eq!(spline.pos(t).y, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_vector_heading() {
        let spline = build(&[p(0.0, 0.0), p(100.0, 0.0), p(200.0, 0.0)]);
        let motion = spline.vector(500.0);
        assert_relative_eq!(motion.angle, 0.0, epsilon = 1e-9);
        assert!(motion.speed > 0.0);

        let spline = build(&[p(0.0, 0.0), p(0.0, 100.0), p(0.0, 200.0)]);
        assert_relative_eq!(spline.vector(500.0).angle, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_step_cache_spacing() {
        let spline = Spline::new(
            &[p(0.0, 0.0), p(100.0, 0.0), p(200.0, 0.0)],
            &SplineParams::new(1000.0, 0.85).with_step_length(20.0),
        )
        .unwrap();

        let steps = spline.steps();
        assert!(steps.len() > 2);
        assert!(steps[0].abs() < f64::EPSILON);
        for pair in steps.windows(2) {
            assert!(pair[1] > pair[0]);
            assert!((spline.pos(pair[1]) - spline.pos(pair[0])).norm() > 20.0);
        }
    }

    #[test]
    fn test_ring_step_cache_closes() {
        let spline = Spline::new(
            &square(),
            &SplineParams::new(1000.0, 0.85).with_step_length(10.0),
        )
        .unwrap();
        let steps = spline.steps();
        assert!(steps.len() > 1);
        assert!(steps[steps.len() - 1].abs() < f64::EPSILON);
    }

    #[test]
    fn test_caller_points_untouched() {
        let points = zigzag();
        let before = points.clone();
        let _ = build(&points);
        assert_eq!(points, before);
    }

    #[test]
    fn test_insufficient_points() {
        let err = Spline::new(&[p(0.0, 0.0)], &SplineParams::default()).unwrap_err();
        assert_eq!(err, SmoothError::insufficient_points(2, 1));

        let err = Spline::new(&[], &SplineParams::default()).unwrap_err();
        assert!(err.is_insufficient_points());
    }

    #[test]
    fn test_invalid_params() {
        let err = Spline::new(&zigzag(), &SplineParams::new(1000.0, 2.0)).unwrap_err();
        assert!(err.is_invalid_parameter());

        let err = Spline::new(&zigzag(), &SplineParams::new(0.0, 0.5)).unwrap_err();
        assert!(err.is_invalid_parameter());

        // Past the sample counter's range.
        let err = Spline::new(&zigzag(), &SplineParams::new(5.0e10, 0.5)).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_segments() {
        let points = zigzag();
        let spline = build(&points);
        let segments: Vec<_> = spline.segments().collect();

        assert_eq!(segments.len(), 3);
        assert!(spline.segment(3).is_none());
        for (segment, pair) in segments.iter().zip(points.windows(2)) {
            assert_eq!(segment.p0, pair[0]);
            assert_eq!(segment.p3, pair[1]);
        }
    }

    #[test]
    fn test_two_point_spline_is_straight() {
        let spline = build(&[p(0.0, 0.0), p(10.0, 10.0)]);
        let mid = spline.pos(500.0);
        assert_relative_eq!(mid.x, mid.y, epsilon = 1e-12);
    }
}
