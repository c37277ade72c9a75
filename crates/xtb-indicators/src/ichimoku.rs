//! Ichimoku Kinko Hyo.

use serde::{Deserialize, Serialize};
use xtb_core::traits::OhlcvIndicator;

use crate::rolling::{rolling_max, rolling_min, shift_backward, shift_forward};

/// Indicator values at one index. NaN marks an undefined position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IchimokuPoint {
    /// Conversion line (tenkan-sen)
    pub conversion: f64,
    /// Base line (kijun-sen)
    pub base: f64,
    /// Leading span A (senkou span A), projected forward
    pub leading_a: f64,
    /// Leading span B (senkou span B), projected forward
    pub leading_b: f64,
    /// Lagging span (chikou span), close shifted back
    pub lagging: f64,
}

/// The five derived series, index-aligned with the input candles.
#[derive(Debug, Clone, PartialEq)]
pub struct IchimokuSeries {
    pub conversion: Vec<f64>,
    pub base: Vec<f64>,
    pub leading_a: Vec<f64>,
    pub leading_b: Vec<f64>,
    pub lagging: Vec<f64>,
}

impl IchimokuSeries {
    /// Number of rows (equal to the input length).
    pub fn len(&self) -> usize {
        self.conversion.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.conversion.is_empty()
    }

    /// All five values at one index.
    pub fn point(&self, index: usize) -> Option<IchimokuPoint> {
        if index >= self.len() {
            return None;
        }
        Some(IchimokuPoint {
            conversion: self.conversion[index],
            base: self.base[index],
            leading_a: self.leading_a[index],
            leading_b: self.leading_b[index],
            lagging: self.lagging[index],
        })
    }

    /// The values at the most recent index.
    pub fn last(&self) -> Option<IchimokuPoint> {
        self.len().checked_sub(1).and_then(|index| self.point(index))
    }
}

/// Ichimoku Kinko Hyo indicator.
///
/// Pure function of an OHLC table, no hidden state. With the canonical
/// 9/26/52 windows and a 26-bar displacement:
///
/// - conversion: (max(high, 9) + min(low, 9)) / 2
/// - base: (max(high, 26) + min(low, 26)) / 2
/// - leading span A: (conversion + base) / 2, shifted +26
/// - leading span B: (max(high, 52) + min(low, 52)) / 2, shifted +26
/// - lagging span: close, shifted -26
#[derive(Debug, Clone)]
pub struct Ichimoku {
    conversion_period: usize,
    base_period: usize,
    leading_b_period: usize,
    displacement: usize,
}

impl Ichimoku {
    /// Create an Ichimoku with the canonical 9/26/52/26 parameters.
    pub fn new() -> Self {
        Self::with_periods(9, 26, 52, 26)
    }

    /// Create an Ichimoku with custom windows and displacement.
    pub fn with_periods(
        conversion: usize,
        base: usize,
        leading_b: usize,
        displacement: usize,
    ) -> Self {
        assert!(
            conversion > 0 && base > 0 && leading_b > 0,
            "Periods must be greater than 0"
        );
        Self {
            conversion_period: conversion,
            base_period: base,
            leading_b_period: leading_b,
            displacement,
        }
    }

    /// Midline of the rolling high/low extremes over one window.
    fn midline(high: &[f64], low: &[f64], window: usize) -> Vec<f64> {
        rolling_max(high, window)
            .iter()
            .zip(rolling_min(low, window))
            .map(|(max, min)| (max + min) / 2.0)
            .collect()
    }

    /// Compute all five series for the given OHLC columns.
    pub fn calculate(&self, high: &[f64], low: &[f64], close: &[f64]) -> IchimokuSeries {
        assert_eq!(high.len(), low.len(), "High/low length mismatch");
        assert_eq!(high.len(), close.len(), "High/close length mismatch");

        let conversion = Self::midline(high, low, self.conversion_period);
        let base = Self::midline(high, low, self.base_period);

        let span_a: Vec<f64> = conversion
            .iter()
            .zip(&base)
            .map(|(conversion, base)| (conversion + base) / 2.0)
            .collect();
        let leading_a = shift_forward(&span_a, self.displacement);

        let span_b = Self::midline(high, low, self.leading_b_period);
        let leading_b = shift_forward(&span_b, self.displacement);

        let lagging = shift_backward(close, self.displacement);

        IchimokuSeries {
            conversion,
            base,
            leading_a,
            leading_b,
            lagging,
        }
    }
}

impl Default for Ichimoku {
    fn default() -> Self {
        Self::new()
    }
}

impl OhlcvIndicator for Ichimoku {
    type Output = IchimokuPoint;

    fn calculate(
        &self,
        _open: &[f64],
        high: &[f64],
        low: &[f64],
        close: &[f64],
        _volume: &[f64],
    ) -> Vec<IchimokuPoint> {
        let series = Ichimoku::calculate(self, high, low, close);
        (0..series.len())
            .map(|index| series.point(index).unwrap())
            .collect()
    }

    fn period(&self) -> usize {
        // Rows until the forward-shifted spans are defined
        self.leading_b_period + self.displacement
    }

    fn name(&self) -> &str {
        "Ichimoku"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_series(len: usize, price: f64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (vec![price; len], vec![price; len], vec![price; len])
    }

    #[test]
    fn test_conversion_window_boundary() {
        let (high, low, close) = flat_series(20, 100.0);
        let series = Ichimoku::new().calculate(&high, &low, &close);

        // Window of 9: first 8 undefined, 9th defined
        for index in 0..8 {
            assert!(series.conversion[index].is_nan(), "index {index}");
        }
        assert_eq!(series.conversion[8], 100.0);
    }

    #[test]
    fn test_flat_series_values() {
        let (high, low, close) = flat_series(120, 100.0);
        let series = Ichimoku::new().calculate(&high, &low, &close);

        assert_eq!(series.len(), 120);
        for index in 0..120 {
            if !series.conversion[index].is_nan() {
                assert_eq!(series.conversion[index], 100.0);
            }
            if !series.base[index].is_nan() {
                assert_eq!(series.base[index], 100.0);
            }
            if !series.leading_a[index].is_nan() {
                assert_eq!(series.leading_a[index], 100.0);
            }
            if !series.leading_b[index].is_nan() {
                assert_eq!(series.leading_b[index], 100.0);
            }
        }

        // Lagging span is the close shifted back 26
        for index in 0..(120 - 26) {
            assert_eq!(series.lagging[index], close[index + 26]);
        }
        for index in (120 - 26)..120 {
            assert!(series.lagging[index].is_nan());
        }
    }

    #[test]
    fn test_span_definition_boundaries() {
        let (high, low, close) = flat_series(120, 100.0);
        let series = Ichimoku::new().calculate(&high, &low, &close);

        // Base defined from index 25; span A needs base plus the shift
        assert!(series.base[24].is_nan());
        assert!(!series.base[25].is_nan());
        assert!(series.leading_a[50].is_nan());
        assert!(!series.leading_a[51].is_nan());

        // Span B: 52-window plus the shift
        assert!(series.leading_b[76].is_nan());
        assert!(!series.leading_b[77].is_nan());
    }

    #[test]
    fn test_midlines_track_extremes() {
        let high: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let low: Vec<f64> = (0..60).map(|i| 90.0 + i as f64).collect();
        let close: Vec<f64> = (0..60).map(|i| 95.0 + i as f64).collect();
        let series = Ichimoku::new().calculate(&high, &low, &close);

        // At index 8: highest high = 108, lowest low = 90
        assert_eq!(series.conversion[8], (108.0 + 90.0) / 2.0);
        // At index 25: highest high = 125, lowest low = 90
        assert_eq!(series.base[25], (125.0 + 90.0) / 2.0);
    }

    #[test]
    fn test_trait_output_is_index_aligned() {
        let (high, low, close) = flat_series(90, 100.0);
        let open = vec![100.0; 90];
        let volume = vec![1.0; 90];

        let indicator = Ichimoku::new();
        let points = OhlcvIndicator::calculate(&indicator, &open, &high, &low, &close, &volume);

        assert_eq!(points.len(), 90);
        assert!(points[0].conversion.is_nan());
        assert_eq!(points[77].leading_b, 100.0);
        assert_eq!(indicator.period(), 78);
    }
}
