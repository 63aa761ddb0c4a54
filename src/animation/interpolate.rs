use crate::foundation::error::{LaunchError, LaunchResult};

/// Behavior of [`interpolate_with`] outside the breakpoint range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the edge output value.
    #[default]
    Clamp,
    /// Continue the slope of the edge segment.
    Extend,
    /// Return the input unchanged.
    Identity,
}

/// Options for [`interpolate_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Extrapolation before the first breakpoint.
    #[serde(default)]
    pub left: Extrapolate,
    /// Extrapolation after the last breakpoint.
    #[serde(default)]
    pub right: Extrapolate,
}

impl InterpolateOpts {
    /// Clamp on both sides.
    pub const CLAMP: Self = Self {
        left: Extrapolate::Clamp,
        right: Extrapolate::Clamp,
    };

    /// Extend on both sides.
    pub const EXTEND: Self = Self {
        left: Extrapolate::Extend,
        right: Extrapolate::Extend,
    };
}

/// Piecewise-linear interpolation of `x` over `input -> output`, clamped at both ends.
///
/// The breakpoint and output tables have the same length by construction. The function is total:
/// out-of-range input holds the edge values and an exact breakpoint returns its output exactly.
pub fn interpolate<const N: usize>(x: f64, input: [f64; N], output: [f64; N]) -> f64 {
    sample_table(x, &input, &output, InterpolateOpts::CLAMP)
}

/// [`interpolate`] with explicit extrapolation and easing.
pub fn interpolate_with<const N: usize>(
    x: f64,
    input: [f64; N],
    output: [f64; N],
    opts: InterpolateOpts,
) -> f64 {
    sample_table(x, &input, &output, opts)
}

/// Owned, validated breakpoint table for interpolation curves supplied at runtime.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interpolation {
    input: Vec<f64>,
    output: Vec<f64>,
    #[serde(default)]
    opts: InterpolateOpts,
}

impl Interpolation {
    /// Validate and build an interpolation table.
    ///
    /// Requires at least two finite, strictly increasing breakpoints and a matching number of
    /// finite outputs.
    pub fn new(input: Vec<f64>, output: Vec<f64>, opts: InterpolateOpts) -> LaunchResult<Self> {
        let out = Self {
            input,
            output,
            opts,
        };
        out.validate()?;
        Ok(out)
    }

    /// Re-check table invariants (useful after deserialization).
    pub fn validate(&self) -> LaunchResult<()> {
        if self.input.len() != self.output.len() {
            return Err(LaunchError::animation(format!(
                "interpolation input has {} breakpoints but output has {} values",
                self.input.len(),
                self.output.len()
            )));
        }
        if self.input.len() < 2 {
            return Err(LaunchError::animation(
                "interpolation needs at least two breakpoints",
            ));
        }
        if self
            .input
            .iter()
            .chain(self.output.iter())
            .any(|v| !v.is_finite())
        {
            return Err(LaunchError::animation(
                "interpolation breakpoints and outputs must be finite",
            ));
        }
        if !self.input.windows(2).all(|w| w[0] < w[1]) {
            return Err(LaunchError::animation(
                "interpolation breakpoints must be strictly increasing",
            ));
        }
        Ok(())
    }

    /// Breakpoint table.
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    /// Output table.
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    /// Sample the curve at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        sample_table(x, &self.input, &self.output, self.opts)
    }
}

pub(crate) fn sample_table(x: f64, input: &[f64], output: &[f64], opts: InterpolateOpts) -> f64 {
    let n = input.len().min(output.len());
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return output[0];
    }
    let input = &input[..n];
    let output = &output[..n];

    let first = input[0];
    let last = input[n - 1];

    if x.is_nan() || x == f64::NEG_INFINITY {
        return output[0];
    }
    if x == f64::INFINITY {
        return output[n - 1];
    }

    let seg = if x < first {
        match opts.left {
            Extrapolate::Clamp => return output[0],
            Extrapolate::Identity => return x,
            Extrapolate::Extend => 0,
        }
    } else if x > last {
        match opts.right {
            Extrapolate::Clamp => return output[n - 1],
            Extrapolate::Identity => return x,
            Extrapolate::Extend => n - 2,
        }
    } else {
        let idx = input.partition_point(|&k| k <= x);
        idx.clamp(1, n - 1) - 1
    };

    let (a, b) = (input[seg], input[seg + 1]);
    let span = b - a;
    if span.is_nan() || span <= 0.0 {
        return output[seg + 1];
    }

    let t = (x - a) / span;
    output[seg] * (1.0 - t) + output[seg + 1] * t
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
