use cgmath::{Deg, Matrix2, Vector2, Vector4};
use thiserror::Error;

use crate::math::{saturate, skew_from_angle, Lerpable};

/// Vertical stretch factor reached at the end of the stretch phase.
///
/// Equal to the starting factor, so the stretch phase leaves the quad untouched.
pub const MAX_STRETCH_Y: f32 = 1.0;

pub const DEFAULT_ZOOM_DURATION: f32 = 3.0;
pub const DEFAULT_STRETCH_DURATION: f32 = 1.5;
pub const DEFAULT_SKEW_ANGLE: Deg<f32> = Deg(45.0);

/// Fixed inputs of the animation, uploaded once per frame next to the time uniform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationParameters {
    zoom_duration: f32,
    stretch_duration: f32,
    start_skew: f32,
}

impl AnimationParameters {
    pub fn new(
        zoom_duration: f32,
        stretch_duration: f32,
        start_skew: f32,
    ) -> Result<Self, ParameterError> {
        if !(zoom_duration.is_finite() && zoom_duration > 0.0) {
            return Err(ParameterError::Duration("zoom", zoom_duration));
        }

        if !(stretch_duration.is_finite() && stretch_duration > 0.0) {
            return Err(ParameterError::Duration("stretch", stretch_duration));
        }

        if !start_skew.is_finite() {
            return Err(ParameterError::Skew(start_skew));
        }

        Ok(Self {
            zoom_duration,
            stretch_duration,
            start_skew,
        })
    }

    /// Builds the parameters from a slant angle instead of a raw shear coefficient.
    pub fn with_angle(
        zoom_duration: f32,
        stretch_duration: f32,
        angle: Deg<f32>,
    ) -> Result<Self, ParameterError> {
        if !angle.0.is_finite() || angle.0.abs() >= 90.0 {
            return Err(ParameterError::Angle(angle.0));
        }

        Self::new(zoom_duration, stretch_duration, skew_from_angle(angle))
    }

    pub fn zoom_duration(&self) -> f32 {
        self.zoom_duration
    }

    pub fn stretch_duration(&self) -> f32 {
        self.stretch_duration
    }

    pub fn start_skew(&self) -> f32 {
        self.start_skew
    }

    /// Time at which every phase has saturated.
    pub fn total_duration(&self) -> f32 {
        self.zoom_duration + self.stretch_duration
    }

    pub fn progress(&self, t: f32) -> Progress {
        Progress {
            scale_t: saturate(t / self.zoom_duration),
            stretch_t: saturate((t - self.zoom_duration) / self.stretch_duration),
        }
    }

    pub fn sample(&self, t: f32) -> AnimationSample {
        let progress = self.progress(t);

        AnimationSample {
            scale: 0.0_f32.lerp(&1.0, progress.scale_t),
            skew: self.start_skew.lerp(&0.0, progress.scale_t),
            stretch_y: 1.0_f32.lerp(&MAX_STRETCH_Y, progress.stretch_t),
        }
    }

    /// Clip space position of a quad vertex at time `t`.
    pub fn transform(&self, t: f32, position: Vector2<f32>) -> Vector4<f32> {
        self.sample(t).apply(position)
    }

    pub fn phase(&self, t: f32) -> Phase {
        if t < self.zoom_duration {
            Phase::Zoom
        } else if t < self.total_duration() {
            Phase::Stretch
        } else {
            Phase::Done
        }
    }
}

impl Default for AnimationParameters {
    fn default() -> Self {
        Self {
            zoom_duration: DEFAULT_ZOOM_DURATION,
            stretch_duration: DEFAULT_STRETCH_DURATION,
            start_skew: skew_from_angle(DEFAULT_SKEW_ANGLE),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("{0} duration must be a positive number of seconds, got {1}")]
    Duration(&'static str, f32),
    #[error("start skew must be finite, got {0}")]
    Skew(f32),
    #[error("skew angle must lie strictly between -90 and 90 degrees, got {0}")]
    Angle(f32),
}

/// Normalized progress of both phases, each in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Progress {
    pub scale_t: f32,
    pub stretch_t: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationSample {
    pub scale: f32,
    pub skew: f32,
    pub stretch_y: f32,
}

impl AnimationSample {
    pub fn shear(&self) -> Matrix2<f32> {
        // column major: x' = x + skew * y
        Matrix2::new(1.0, 0.0, self.skew, 1.0)
    }

    pub fn apply(&self, position: Vector2<f32>) -> Vector4<f32> {
        let mut transformed = self.shear() * position * self.scale;

        transformed.y *= self.stretch_y;
        transformed.x = -transformed.x;

        transformed.extend(0.0).extend(1.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Zoom,
    Stretch,
    Done,
}
