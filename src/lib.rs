//! Strategy signal & advice engine.
//!
//! Turns a snapshot of pre-computed technical indicators into three
//! independent strategy signals, an aggregated market read, a risk
//! assessment, and a final advice report. Every stage is a pure function
//! over the immutable snapshot; the only fallible operation is snapshot
//! validation at the adapter boundary.

pub mod logging;
pub mod models;
pub mod rules;
pub mod signals;
pub mod strategies;

pub use models::advice::{AdviceReport, AggregateResult, MarketCondition, Scenario};
pub use models::risk::{PositionPolicy, RiskAssessment, RiskStatistics, RiskWarning, WarningKind};
pub use models::signal::{Confidence, RiskLevel, SignalAction, SignalReason, StrategyKind, StrategySignal};
pub use models::snapshot::{IndicatorSnapshot, MacdValue, RawSnapshot, SnapshotError};
pub use signals::engine::{AdviceEngine, AnalysisReport};
