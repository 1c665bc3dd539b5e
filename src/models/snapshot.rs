use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// MACD value triple as supplied by the indicator service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdValue {
    pub dif: f64,
    pub dea: f64,
    pub histogram: f64,
}

/// A single point-in-time bundle of pre-computed indicator values for one
/// instrument. Absent fields are `None`, never zero: a histogram of 0.0 is a
/// real reading, a missing MACD is not.
///
/// Constructed either through [`IndicatorSnapshot::from_raw`] (validating) or
/// the `with_*` builders for trusted in-process callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub symbol: String,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi14: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma20: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema5: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl IndicatorSnapshot {
    pub fn new(symbol: impl Into<String>, close: f64) -> Self {
        Self {
            symbol: symbol.into(),
            close,
            rsi14: None,
            macd: None,
            ma20: None,
            ema5: None,
            volume: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_rsi14(mut self, rsi14: f64) -> Self {
        self.rsi14 = Some(rsi14);
        self
    }

    pub fn with_macd(mut self, dif: f64, dea: f64, histogram: f64) -> Self {
        self.macd = Some(MacdValue { dif, dea, histogram });
        self
    }

    pub fn with_ma20(mut self, ma20: f64) -> Self {
        self.ma20 = Some(ma20);
        self
    }

    pub fn with_ema5(mut self, ema5: f64) -> Self {
        self.ema5 = Some(ema5);
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Validate a loosely-shaped payload into a snapshot. This is the only
    /// fallible boundary in the crate; a rejected payload never reaches the
    /// scorers.
    pub fn from_raw(raw: RawSnapshot) -> Result<Self, SnapshotError> {
        let close = raw.close.ok_or(SnapshotError::MissingField("close"))?;
        check_finite("close", close)?;
        if close <= 0.0 {
            return Err(SnapshotError::OutOfRange {
                field: "close",
                value: close,
            });
        }

        if let Some(rsi) = raw.rsi14 {
            check_finite("rsi14", rsi)?;
            if !(0.0..=100.0).contains(&rsi) {
                return Err(SnapshotError::OutOfRange {
                    field: "rsi14",
                    value: rsi,
                });
            }
        }
        if let Some(ref macd) = raw.macd {
            check_finite("macd.dif", macd.dif)?;
            check_finite("macd.dea", macd.dea)?;
            check_finite("macd.histogram", macd.histogram)?;
        }
        if let Some(ma20) = raw.ma20 {
            check_finite("ma20", ma20)?;
            if ma20 <= 0.0 {
                return Err(SnapshotError::OutOfRange {
                    field: "ma20",
                    value: ma20,
                });
            }
        }
        if let Some(ema5) = raw.ema5 {
            check_finite("ema5", ema5)?;
        }
        if let Some(volume) = raw.volume {
            check_finite("volume", volume)?;
            if volume < 0.0 {
                return Err(SnapshotError::OutOfRange {
                    field: "volume",
                    value: volume,
                });
            }
        }

        Ok(Self {
            symbol: raw.symbol.unwrap_or_default(),
            close,
            rsi14: raw.rsi14,
            macd: raw.macd.map(|m| MacdValue {
                dif: m.dif,
                dea: m.dea,
                histogram: m.histogram,
            }),
            ma20: raw.ma20,
            ema5: raw.ema5,
            volume: raw.volume,
            timestamp: raw.timestamp.unwrap_or_else(Utc::now),
        })
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), SnapshotError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SnapshotError::NotFinite { field, value })
    }
}

/// Indicator payload as it arrives from the computation service: every field
/// optional, nothing trusted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSnapshot {
    pub symbol: Option<String>,
    pub close: Option<f64>,
    pub rsi14: Option<f64>,
    pub macd: Option<RawMacd>,
    pub ma20: Option<f64>,
    pub ema5: Option<f64>,
    pub volume: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawMacd {
    pub dif: f64,
    pub dea: f64,
    pub histogram: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("{field} is not a finite number: {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}
