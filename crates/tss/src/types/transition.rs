//! Animated property transitions.

/// How a property animates when its value changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Animation duration in seconds.
    pub duration: f64,
    /// Name of the easing function, validated against the easing registry.
    pub easing: String,
    /// Delay before the animation starts, in seconds. Zero if omitted.
    pub delay: f64,
}

impl Transition {
    pub fn new(duration: f64, easing: impl Into<String>, delay: f64) -> Self {
        Self {
            duration,
            easing: easing.into(),
            delay,
        }
    }
}
