pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::toml_config::BatchConfig;
pub use core::arithmetic::{add, subtract};
pub use core::engine::CalcEngine;
pub use domain::model::{Calculation, CalculationOutcome, Operation};
pub use domain::ports::CalculationSource;
pub use utils::error::{MathError, Result};
