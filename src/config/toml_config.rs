use crate::core::{Calculation, CalculationSource, Operation};
use crate::utils::error::{MathError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default)]
    pub batch: BatchMeta,
    #[serde(default, rename = "calculation")]
    pub calculations: Vec<CalculationEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchMeta {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationEntry {
    pub op: String,
    pub lhs: OperandValue,
    pub rhs: OperandValue,
}

/// Operands may be written as TOML integers or as strings, e.g. `"${OFFSET}"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperandValue {
    Integer(i64),
    Text(String),
}

impl OperandValue {
    fn resolve(&self, field_name: &str) -> Result<i64> {
        match self {
            OperandValue::Integer(n) => Ok(*n),
            OperandValue::Text(s) => validation::parse_operand(field_name, s),
        }
    }
}

impl CalculationEntry {
    pub fn to_calculation(&self, index: usize) -> Result<Calculation> {
        let op: Operation = self.op.parse()?;
        let lhs = self.lhs.resolve(&format!("calculation[{}].lhs", index))?;
        let rhs = self.rhs.resolve(&format!("calculation[{}].rhs", index))?;
        Ok(Calculation::new(op, lhs, rhs))
    }
}

impl BatchConfig {
    /// 從 TOML 檔案載入批次
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MathError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MathError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OFFSET})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn batch_name(&self) -> &str {
        self.batch.name.as_deref().unwrap_or("batch")
    }
}

impl CalculationSource for BatchConfig {
    fn calculations(&self) -> Result<Vec<Calculation>> {
        self.calculations
            .iter()
            .enumerate()
            .map(|(index, entry)| entry.to_calculation(index))
            .collect()
    }

    fn name(&self) -> &str {
        self.batch_name()
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.batch.name {
            validation::validate_non_empty_string("batch.name", name)?;
        }
        if self.calculations.is_empty() {
            return Err(MathError::EmptyBatch);
        }
        // Surfaces bad operands and operation names before anything is evaluated.
        self.calculations().map(|_| ())
    }
}
