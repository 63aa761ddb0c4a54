use crate::foundation::core::Fps;

const MIN_PARAM: f64 = 1e-6;

/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Mass `m`.
    pub mass: f64,
    /// Never let the value pass the target.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(10.0, 100.0)
    }
}

impl SpringConfig {
    /// Spring with unit mass and no overshoot clamping.
    pub const fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }

    /// Same spring with a different mass.
    pub const fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Same spring with overshoot clamping toggled.
    pub const fn clamped(mut self, on: bool) -> Self {
        self.overshoot_clamping = on;
        self
    }

    fn sanitized(self) -> (f64, f64, f64) {
        fn positive(v: f64, fallback: f64) -> f64 {
            if v.is_finite() { v.max(MIN_PARAM) } else { fallback }
        }
        let damping = if self.damping.is_finite() {
            self.damping.max(0.0)
        } else {
            0.0
        };
        (damping, positive(self.stiffness, 100.0), positive(self.mass, 1.0))
    }

    /// Damping ratio `zeta = c / (2 sqrt(k m))`; `< 1` oscillates, `>= 1` does not.
    pub fn damping_ratio(&self) -> f64 {
        let (c, k, m) = self.sanitized();
        c / (2.0 * (k * m).sqrt())
    }
}

/// Progress of a spring released from rest at 0 toward 1, `frame` frames after release.
///
/// Negative frames mean "not started yet" and yield exactly 0. The curve is evaluated in closed
/// form at `t = frame / fps`, so any frame can be sampled independently of the others.
pub fn spring(frame: f64, fps: Fps, config: SpringConfig) -> f64 {
    Spring::new(config).sample(frame, fps)
}

/// A spring animation between two values with an optional start delay.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    /// Value at rest before release.
    pub from: f64,
    /// Target value.
    pub to: f64,
    /// Frames to wait before release.
    #[serde(default)]
    pub delay: f64,
    /// Physical parameters.
    pub config: SpringConfig,
}

impl Spring {
    /// A 0 -> 1 spring released at frame 0.
    pub fn new(config: SpringConfig) -> Self {
        Self {
            from: 0.0,
            to: 1.0,
            delay: 0.0,
            config,
        }
    }

    /// Same spring with a different range.
    pub fn range(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Same spring released `frames` later.
    pub fn delayed(mut self, frames: f64) -> Self {
        self.delay = frames;
        self
    }

    /// Sample at `frame` (in frames since the owning scene started).
    pub fn sample(&self, frame: f64, fps: Fps) -> f64 {
        let delay = if self.delay.is_finite() {
            self.delay
        } else {
            0.0
        };
        let elapsed = frame - delay;
        if elapsed.is_nan() || elapsed <= 0.0 {
            return self.from;
        }
        if elapsed == f64::INFINITY {
            return self.to;
        }

        let (_, k, m) = self.config.sanitized();
        let x0 = self.to - self.from;
        let t = fps.frames_to_secs(elapsed);
        let zeta = self.config.damping_ratio();
        let omega0 = (k / m).sqrt();

        let value = if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            self.to
                - envelope
                    * (x0 * (omega1 * t).cos() + (zeta * omega0 * x0 / omega1) * (omega1 * t).sin())
        } else {
            let envelope = (-omega0 * t).exp();
            self.to - envelope * x0 * (1.0 + omega0 * t)
        };

        if self.config.overshoot_clamping {
            if self.to >= self.from {
                value.min(self.to)
            } else {
                value.max(self.to)
            }
        } else {
            value
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
