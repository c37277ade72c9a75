//! Indicator trait definitions.

/// Indicator computed from full OHLCV data (not just close).
///
/// Output is index-aligned with the input: implementations return one value
/// per input row and mark positions where a window is not yet full, or a
/// shift runs out of range, as undefined rather than zero.
pub trait OhlcvIndicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values from OHLCV data.
    fn calculate(
        &self,
        open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
        volume: &[f64],
    ) -> Vec<Self::Output>;

    /// Number of rows needed before every series is defined.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}
