//! Confidence helpers.
//!
//! Every confidence the engine emits lies in `[0.0, 1.0]`.

/// Lowest representable confidence.
pub const MIN_CONFIDENCE: f64 = 0.0;

/// Highest representable confidence (certainty).
pub const MAX_CONFIDENCE: f64 = 1.0;

/// Clamp a raw score into `[0.0, 1.0]`. `NaN` maps to `0.0`.
#[must_use]
pub fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_CONFIDENCE;
    }
    value.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// Whether `value` already lies in `[0.0, 1.0]`.
#[must_use]
pub fn is_valid_confidence(value: f64) -> bool {
    (MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&value)
}
