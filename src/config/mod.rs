#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{Calculation, CalculationSource, Operation};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{parse_operand, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "math-ops")]
#[command(about = "Add and subtract integers from the command line")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for results
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print LHS + RHS
    Add(OperandArgs),

    /// Print LHS - RHS
    #[command(alias = "sub")]
    Subtract(OperandArgs),

    /// Evaluate every calculation in a TOML batch file
    Batch {
        /// Path to the batch file
        #[arg(short, long, default_value = "calculations.toml")]
        config: PathBuf,
    },
}

/// Operands stay as text here so that non-numeric input is reported through
/// `MathError` rather than clap's own usage error.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Args)]
pub struct OperandArgs {
    #[arg(allow_negative_numbers = true)]
    pub lhs: String,

    #[arg(allow_negative_numbers = true)]
    pub rhs: String,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// The single calculation named on the command line, if any.
    pub fn direct_calculation(&self) -> Option<Result<Calculation>> {
        let (op, args) = match &self.command {
            Command::Add(args) => (Operation::Add, args),
            Command::Subtract(args) => (Operation::Subtract, args),
            Command::Batch { .. } => return None,
        };
        Some(args.to_calculation(op))
    }
}

#[cfg(feature = "cli")]
impl OperandArgs {
    pub fn to_calculation(&self, op: Operation) -> Result<Calculation> {
        let lhs = parse_operand("lhs", &self.lhs)?;
        let rhs = parse_operand("rhs", &self.rhs)?;
        Ok(Calculation::new(op, lhs, rhs))
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match self.direct_calculation() {
            Some(calculation) => calculation.map(|_| ()),
            None => Ok(()),
        }
    }
}

#[cfg(feature = "cli")]
impl CalculationSource for CliConfig {
    fn calculations(&self) -> Result<Vec<Calculation>> {
        match self.direct_calculation() {
            Some(calculation) => Ok(vec![calculation?]),
            None => Ok(Vec::new()),
        }
    }

    fn name(&self) -> &str {
        "command line"
    }
}
