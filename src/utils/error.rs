use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathError {
    #[error("Invalid operand for {field}: '{value}' ({reason})")]
    InvalidOperand {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown operation: '{value}'")]
    UnknownOperation { value: String },

    #[error("Arithmetic overflow: {lhs} {op} {rhs} does not fit in a 64-bit integer")]
    Overflow { op: String, lhs: i64, rhs: i64 },

    #[error("Batch contains no calculations")]
    EmptyBatch,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MathError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MathError::InvalidOperand { .. } | MathError::UnknownOperation { .. } => {
                ErrorCategory::Input
            }
            MathError::Overflow { .. } => ErrorCategory::Arithmetic,
            MathError::EmptyBatch | MathError::ConfigError { .. } => ErrorCategory::Configuration,
            MathError::IoError(_) | MathError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Arithmetic => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MathError::InvalidOperand { .. } => {
                "Operands must be whole numbers, optionally signed (e.g. 42 or -7)"
            }
            MathError::UnknownOperation { .. } => "Use one of: add, subtract",
            MathError::Overflow { .. } => "Use smaller operands",
            MathError::EmptyBatch => "Add at least one [[calculation]] table to the batch file",
            MathError::ConfigError { .. } => "Check the batch file is valid TOML",
            MathError::IoError(_) => "Check the file path exists and is readable",
            MathError::SerializationError(_) => "Retry with --format text",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MathError::InvalidOperand { field, value, .. } => {
                format!("'{}' is not a valid {}", value, field)
            }
            MathError::Overflow { .. } => "The result is too large to represent".to_string(),
            MathError::IoError(e) => format!("Could not read input: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MathError>;
