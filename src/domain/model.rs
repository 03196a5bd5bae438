use crate::core::arithmetic::{add, subtract};
use crate::utils::error::{MathError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
        }
    }

    /// Evaluates on `i64` operands. Results outside the `i64` range are reported
    /// as [`MathError::Overflow`] rather than wrapping.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64> {
        let in_range = match self {
            Operation::Add => lhs.checked_add(rhs).is_some(),
            Operation::Subtract => lhs.checked_sub(rhs).is_some(),
        };
        if !in_range {
            return Err(MathError::Overflow {
                op: self.symbol().to_string(),
                lhs,
                rhs,
            });
        }

        Ok(match self {
            Operation::Add => add(lhs, rhs),
            Operation::Subtract => subtract(lhs, rhs),
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "plus" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "minus" | "-" => Ok(Operation::Subtract),
            _ => Err(MathError::UnknownOperation {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub op: Operation,
    pub lhs: i64,
    pub rhs: i64,
}

impl Calculation {
    pub fn new(op: Operation, lhs: i64, rhs: i64) -> Self {
        Self { op, lhs, rhs }
    }

    pub fn evaluate(&self) -> Result<CalculationOutcome> {
        let value = self.op.apply(self.lhs, self.rhs)?;
        Ok(CalculationOutcome {
            calculation: *self,
            value,
        })
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationOutcome {
    #[serde(flatten)]
    pub calculation: Calculation,
    pub value: i64,
}

impl fmt::Display for CalculationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.calculation, self.value)
    }
}
