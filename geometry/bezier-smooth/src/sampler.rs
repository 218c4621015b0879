//! Sampling a spline into an output coordinate sequence.

use nalgebra::Point3;
use tracing::debug;

use crate::spline::sample_times;
use crate::{Position, Result, SmoothError, SmoothParams, Spline};

/// Width of a decimation window, in time steps (100 time units).
const WINDOW_STEPS: u32 = 10;

/// Sample a spline at every time step, keeping alternating 100-unit windows.
///
/// The spline is evaluated at `0, 10, 20, …` below its duration, and a sample
/// at time `t` is kept when `floor(t / 100)` is even. A duration that is a
/// multiple of 200 therefore yields `duration / 20` samples. For closed
/// splines the first sample is repeated at the end so the output stays a
/// ring.
///
/// # Example
///
/// ```
/// use bezier_smooth::{sample, Spline, SplineParams};
/// use nalgebra::Point3;
///
/// let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(5.0, 5.0, 0.0)];
/// let spline = Spline::new(&points, &SplineParams::new(5000.0, 0.85)).unwrap();
/// assert_eq!(sample(&spline).len(), 250);
/// ```
#[must_use]
pub fn sample(spline: &Spline) -> Vec<Point3<f64>> {
    let mut samples: Vec<Point3<f64>> = sample_times(spline.duration())
        .filter(|&(i, _)| (i / WINDOW_STEPS) % 2 == 0)
        .map(|(_, t)| spline.pos(t))
        .collect();

    if spline.is_closed() {
        if let Some(&first) = samples.first() {
            samples.push(first);
        }
    }

    samples
}

/// Smooth one line or ring.
///
/// Builds a fresh [`Spline`] through `positions` and samples it. Output
/// positions are `[x, y]`, or `[x, y, z]` when any input position has a third
/// component.
///
/// # Errors
///
/// Returns [`SmoothError::InvalidPosition`] for a position with fewer than two
/// components, and otherwise any error from [`Spline::new`].
pub fn smooth_line(positions: &[Position], params: &SmoothParams) -> Result<Vec<Position>> {
    let points = to_points(positions)?;
    let spline = Spline::new(&points, &params.spline_params())?;
    let samples = sample(&spline);

    debug!(
        vertices = points.len(),
        closed = spline.is_closed(),
        samples = samples.len(),
        "Smoothed line"
    );

    let three_d = positions.iter().any(|p| p.len() > 2);
    Ok(samples
        .iter()
        .map(|p| to_position(p, three_d))
        .collect())
}

/// Lift positions into 3D, defaulting a missing `z` to 0.
fn to_points(positions: &[Position]) -> Result<Vec<Point3<f64>>> {
    positions
        .iter()
        .enumerate()
        .map(|(index, position)| match position.as_slice() {
            [x, y] => Ok(Point3::new(*x, *y, 0.0)),
            [x, y, z, ..] => Ok(Point3::new(*x, *y, *z)),
            _ => Err(SmoothError::InvalidPosition {
                index,
                len: position.len(),
            }),
        })
        .collect()
}

fn to_position(point: &Point3<f64>, three_d: bool) -> Position {
    if three_d {
        vec![point.x, point.y, point.z]
    } else {
        vec![point.x, point.y]
    }
}
