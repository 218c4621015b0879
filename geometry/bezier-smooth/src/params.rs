//! Parameters for spline construction and geometry smoothing.

use crate::{Result, SmoothError, TIME_STEP};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default time span swept by the spline parameter.
pub const DEFAULT_RESOLUTION: f64 = 10_000.0;

/// Default blend between the support vertex and the midpoint-based controls.
pub const DEFAULT_SHARPNESS: f64 = 0.85;

/// Default minimum chord distance between cached steps.
pub const DEFAULT_STEP_LENGTH: f64 = 60.0;

/// Largest accepted resolution.
///
/// Sample times are counted in `u32` steps of [`TIME_STEP`]; this keeps the
/// counter from overflowing.
pub const MAX_RESOLUTION: f64 = (u32::MAX - 1) as f64 * TIME_STEP;

/// Parameters for building a single [`Spline`](crate::Spline).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplineParams {
    /// Total time span swept by the spline parameter. Must be positive.
    pub duration: f64,

    /// How far control points are pulled from the support vertex, in [0, 1].
    pub sharpness: f64,

    /// Minimum chord distance between cached steps. Must be positive.
    pub step_length: f64,
}

impl Default for SplineParams {
    fn default() -> Self {
        Self {
            duration: DEFAULT_RESOLUTION,
            sharpness: DEFAULT_SHARPNESS,
            step_length: DEFAULT_STEP_LENGTH,
        }
    }
}

impl SplineParams {
    /// Create spline params with the default step length.
    #[must_use]
    pub fn new(duration: f64, sharpness: f64) -> Self {
        Self {
            duration,
            sharpness,
            ..Default::default()
        }
    }

    /// Set the step cache spacing.
    #[must_use]
    pub const fn with_step_length(mut self, step_length: f64) -> Self {
        self.step_length = step_length;
        self
    }

    /// Check every parameter against its domain.
    ///
    /// Values are never clamped; anything out of range is an error.
    ///
    /// # Errors
    ///
    /// Returns [`SmoothError::InvalidParameter`] naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        check_positive("resolution", self.duration)?;
        check_resolution_limit(self.duration)?;
        check_sharpness(self.sharpness)?;
        check_positive("step_length", self.step_length)
    }
}

/// Parameters for smoothing a geometry.
///
/// # Example
///
/// ```
/// use bezier_smooth::SmoothParams;
///
/// let params = SmoothParams::new(5000.0, 0.985).with_parallel(true);
/// assert!(params.validate().is_ok());
///
/// let bad = SmoothParams::default().with_sharpness(1.5);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmoothParams {
    /// Time span swept per line or ring. Higher values yield more output
    /// coordinates (about `resolution / 20` per line). Default: 10000
    pub resolution: f64,

    /// Curviness between vertices, in [0, 1]. Default: 0.85
    pub sharpness: f64,

    /// Minimum chord distance between cached steps. Default: 60
    pub step_length: f64,

    /// Whether to smooth the members of multi-part geometries in parallel
    /// (via rayon). Default: false
    pub parallel: bool,

    /// Minimum member count before parallel processing kicks in. Default: 4
    pub parallel_threshold: usize,
}

impl Default for SmoothParams {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            sharpness: DEFAULT_SHARPNESS,
            step_length: DEFAULT_STEP_LENGTH,
            parallel: false,
            parallel_threshold: 4,
        }
    }
}

impl SmoothParams {
    /// Create params with the given resolution and sharpness.
    #[must_use]
    pub fn new(resolution: f64, sharpness: f64) -> Self {
        Self {
            resolution,
            sharpness,
            ..Default::default()
        }
    }

    /// Loose curves that bulge well past the input vertices.
    #[must_use]
    pub fn gentle() -> Self {
        Self {
            sharpness: 0.95,
            ..Default::default()
        }
    }

    /// Curves that hug the input vertices closely.
    #[must_use]
    pub fn tight() -> Self {
        Self {
            sharpness: 0.5,
            ..Default::default()
        }
    }

    /// Set the resolution.
    #[must_use]
    pub const fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the sharpness.
    #[must_use]
    pub const fn with_sharpness(mut self, sharpness: f64) -> Self {
        self.sharpness = sharpness;
        self
    }

    /// Set the step cache spacing.
    #[must_use]
    pub const fn with_step_length(mut self, step_length: f64) -> Self {
        self.step_length = step_length;
        self
    }

    /// Set parallel processing option.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Spline parameters used for every line and ring.
    #[must_use]
    pub fn spline_params(&self) -> SplineParams {
        SplineParams {
            duration: self.resolution,
            sharpness: self.sharpness,
            step_length: self.step_length,
        }
    }

    /// Check every parameter against its domain.
    ///
    /// # Errors
    ///
    /// Returns [`SmoothError::InvalidParameter`] naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        self.spline_params().validate()
    }

    /// Whether a geometry with `members` lines or rings goes through rayon.
    #[must_use]
    pub(crate) fn use_parallel(&self, members: usize) -> bool {
        self.parallel && members >= self.parallel_threshold
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SmoothError::invalid_parameter(
            name,
            value,
            "a finite number greater than 0",
        ))
    }
}

fn check_resolution_limit(value: f64) -> Result<()> {
    if value <= MAX_RESOLUTION {
        Ok(())
    } else {
        Err(SmoothError::invalid_parameter(
            "resolution",
            value,
            "a value no greater than MAX_RESOLUTION",
        ))
    }
}

fn check_sharpness(value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SmoothError::invalid_parameter(
            "sharpness",
            value,
            "a value in [0, 1]",
        ))
    }
}
