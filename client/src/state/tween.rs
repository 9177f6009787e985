//! Eased numeric interpolation for counters and skill percentages.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

/// A count from `start` to `end` over `duration_ms`, rendered with `suffix`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
    pub suffix: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TweenFrame {
    pub text: String,
    pub done: bool,
}

/// Cubic ease-out: fast at first, settling into the target.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

impl Tween {
    #[must_use]
    pub fn new(start: f64, end: f64, duration_ms: f64, suffix: impl Into<String>) -> Self {
        Self { start, end, duration_ms, suffix: suffix.into() }
    }

    /// Fraction complete at `elapsed_ms`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Text to display `elapsed_ms` after the tween started.
    ///
    /// The final frame always shows `end` exactly; intermediate frames show
    /// one decimal for fractional targets and a floored integer otherwise.
    #[must_use]
    pub fn sample(&self, elapsed_ms: f64) -> TweenFrame {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return TweenFrame {
                text: format!("{}{}", self.end, self.suffix),
                done: true,
            };
        }

        let value = self.start + (self.end - self.start) * ease_out_cubic(progress);
        let text = if self.end.fract() == 0.0 {
            format!("{}{}", value.floor(), self.suffix)
        } else {
            format!("{value:.1}{}", self.suffix)
        };
        TweenFrame { text, done: false }
    }
}
