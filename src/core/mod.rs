pub mod batch;
pub mod calculator;
pub mod form;
pub mod report;

pub use crate::domain::model::{CalculationInput, CalculationResult, CancellationTimeline};
pub use crate::utils::error::Result;
