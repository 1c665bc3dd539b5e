//! Shared data models spanning the engine layers.

pub mod advice;
pub mod risk;
pub mod signal;
pub mod snapshot;

pub use advice::{AdviceReport, AggregateResult, MarketCondition, Scenario};
pub use risk::{PositionPolicy, RiskAssessment, RiskStatistics, RiskWarning, WarningKind};
pub use signal::{Confidence, RiskLevel, SignalAction, SignalReason, StrategyKind, StrategySignal};
pub use snapshot::{IndicatorSnapshot, MacdValue, RawMacd, RawSnapshot, SnapshotError};
