//! Scroll-reveal visibility gate.
//!
//! Fade-in sections stay hidden until they first intersect the viewport and
//! stay visible afterwards. The gate only latches a boolean; it knows nothing
//! about layout.

/// Latching visibility gate driven by intersection ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealGate {
    threshold: f64,
    revealed: bool,
}

impl RevealGate {
    /// Default intersection ratio that reveals content.
    pub const DEFAULT_THRESHOLD: f64 = 0.1;

    /// Creates a hidden gate. `threshold` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            Self::DEFAULT_THRESHOLD
        };
        Self {
            threshold,
            revealed: false,
        }
    }

    /// Creates a gate that is already revealed (for non-interactive renders).
    #[must_use]
    pub fn revealed() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            revealed: true,
        }
    }

    /// Feeds an intersection ratio and returns whether content is visible.
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        if !self.revealed && intersection_ratio >= self.threshold && intersection_ratio > 0.0 {
            self.revealed = true;
        }
        self.revealed
    }

    /// Whether the gate has opened.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

impl Default for RevealGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}
