pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::CalculatorConfig;
pub use crate::core::calculator::calculate;
pub use crate::core::form::CancellationForm;
pub use crate::domain::model::{CalculationInput, CalculationResult};
pub use crate::utils::error::{RefundError, Result};
