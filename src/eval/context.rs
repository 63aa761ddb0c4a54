use crate::animation::interpolate::interpolate;
use crate::animation::spring::{SpringConfig, spring};
use crate::config::props::LaunchProps;
use crate::foundation::core::Fps;

/// Inputs of one scene evaluation.
///
/// `frame` is scene-local: 0 at the first frame of the owning sequence. It may be negative or
/// past the sequence end when a host samples outside the active range; every curve stays
/// defined there.
#[derive(Clone, Copy, Debug)]
pub struct SceneCtx<'a> {
    /// Scene-local frame.
    pub frame: i64,
    /// Composition frame rate.
    pub fps: Fps,
    /// Composition props.
    pub props: &'a LaunchProps,
}

impl<'a> SceneCtx<'a> {
    /// Build a context.
    pub fn new(frame: i64, fps: Fps, props: &'a LaunchProps) -> Self {
        Self { frame, fps, props }
    }

    /// Scene-local frame as `f64`.
    pub fn t(&self) -> f64 {
        self.frame as f64
    }

    /// 0 -> 1 spring released `delay` frames into the scene.
    pub fn spring(&self, delay: f64, config: SpringConfig) -> f64 {
        spring(self.t() - delay, self.fps, config)
    }

    /// Clamped linear ramp from `from` to `to` over frames `[start, end]`.
    pub fn ramp(&self, start: f64, end: f64, from: f64, to: f64) -> f64 {
        interpolate(self.t(), [start, end], [from, to])
    }

    /// Clamped 0 -> 1 fade over frames `[start, end]`.
    pub fn fade_in(&self, start: f64, end: f64) -> f64 {
        self.ramp(start, end, 0.0, 1.0)
    }
}
