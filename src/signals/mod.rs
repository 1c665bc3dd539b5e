//! Signal aggregation, risk assessment, advice generation, and the engine
//! tying them together.

pub mod advice;
pub mod aggregation;
pub mod engine;
pub mod risk;

pub use advice::AdviceGenerator;
pub use aggregation::Aggregator;
pub use engine::{AdviceEngine, AnalysisReport};
pub use risk::RiskAssessor;
