pub mod arithmetic;
pub mod engine;

pub use crate::domain::model::{Calculation, CalculationOutcome, Operation};
pub use crate::domain::ports::CalculationSource;
pub use crate::utils::error::Result;
