//! Candle (OHLCV) data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::Resolution;

/// A single translated candle.
///
/// Timestamps are Unix epoch seconds. Prices are absolute: the vendor's
/// open-relative high/low/close deltas are resolved during history
/// translation, so `high >= max(open, close)` and `low <= min(open, close)`
/// hold here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Unix timestamp in seconds
    pub time: i64,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: f64,
}

impl Candle {
    /// Create a new candle.
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Get the timestamp as a DateTime.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.time, 0)
            .unwrap_or_else(|| DateTime::from_timestamp(0, 0).unwrap())
    }
}

/// Bounded time-series container for candles.
///
/// When a capacity is set, pushing past it drops the oldest candle, which
/// keeps per-symbol history memory bounded regardless of how long the bar
/// stream runs.
#[derive(Debug, Clone)]
pub struct CandleSeries {
    /// Symbol identifier
    pub symbol: String,
    /// Resolution of the candles
    pub resolution: Resolution,
    candles: VecDeque<Candle>,
    /// Maximum capacity (0 = unlimited)
    capacity: usize,
}

impl CandleSeries {
    /// Create a new empty series with no capacity bound.
    pub fn new(symbol: String, resolution: Resolution) -> Self {
        Self {
            symbol,
            resolution,
            candles: VecDeque::new(),
            capacity: 0,
        }
    }

    /// Create a series that retains at most `capacity` candles.
    pub fn with_capacity(symbol: String, resolution: Resolution, capacity: usize) -> Self {
        Self {
            symbol,
            resolution,
            candles: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new candle, removing the oldest if at capacity.
    pub fn push(&mut self, candle: Candle) {
        if self.capacity > 0 && self.candles.len() >= self.capacity {
            self.candles.pop_front();
        }
        self.candles.push_back(candle);
    }

    /// Push multiple candles.
    pub fn extend(&mut self, candles: impl IntoIterator<Item = Candle>) {
        for candle in candles {
            self.push(candle);
        }
    }

    /// Get the number of candles.
    #[inline]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Get the last candle.
    pub fn last(&self) -> Option<&Candle> {
        self.candles.back()
    }

    /// Get a candle by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.candles.get(index)
    }

    /// Extract high prices as a vector.
    pub fn highs(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.high).collect()
    }

    /// Extract low prices as a vector.
    pub fn lows(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.low).collect()
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }

    /// Get an iterator over the candles.
    pub fn iter(&self) -> impl Iterator<Item = &Candle> {
        self.candles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candle_datetime() {
        let candle = Candle::new(1_389_362_640, 1.0, 2.0, 0.5, 1.5, 10.0);
        assert_eq!(candle.datetime().timestamp(), 1_389_362_640);
    }

    #[test]
    fn test_series_capacity() {
        let mut series =
            CandleSeries::with_capacity("EURUSD".to_string(), Resolution::Hour1, 3);

        series.push(Candle::new(1, 1.0, 1.1, 0.9, 1.0, 10.0));
        series.push(Candle::new(2, 1.0, 1.2, 0.9, 1.1, 10.0));
        series.push(Candle::new(3, 1.1, 1.3, 1.0, 1.2, 10.0));
        assert_eq!(series.len(), 3);

        // Oldest drops once full
        series.push(Candle::new(4, 1.2, 1.4, 1.1, 1.3, 10.0));
        assert_eq!(series.len(), 3);
        assert_eq!(series.get(0).unwrap().time, 2);
        assert_eq!(series.last().unwrap().time, 4);
    }

    #[test]
    fn test_series_extractions() {
        let mut series = CandleSeries::new("EURUSD".to_string(), Resolution::Hour1);
        series.push(Candle::new(1, 1.0, 1.5, 0.5, 1.2, 10.0));
        series.push(Candle::new(2, 1.2, 1.6, 0.6, 1.3, 20.0));

        assert_eq!(series.highs(), vec![1.5, 1.6]);
        assert_eq!(series.lows(), vec![0.5, 0.6]);
        assert_eq!(series.closes(), vec![1.2, 1.3]);
    }
}
