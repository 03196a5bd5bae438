use crate::core::{CalculationOutcome, CalculationSource};
use crate::utils::error::{MathError, Result};

pub struct CalcEngine<S: CalculationSource> {
    source: S,
}

impl<S: CalculationSource> CalcEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Evaluates every calculation from the source in order, stopping at the
    /// first failure.
    pub fn run(&self) -> Result<Vec<CalculationOutcome>> {
        let calculations = self.source.calculations()?;
        if calculations.is_empty() {
            return Err(MathError::EmptyBatch);
        }

        tracing::info!(
            "Evaluating {} calculation(s) from '{}'",
            calculations.len(),
            self.source.name()
        );

        let mut outcomes = Vec::with_capacity(calculations.len());
        for (index, calculation) in calculations.iter().enumerate() {
            match calculation.evaluate() {
                Ok(outcome) => {
                    tracing::debug!("#{}: {}", index, outcome);
                    outcomes.push(outcome);
                }
                Err(e) => {
                    tracing::error!("#{}: {} failed: {}", index, calculation, e);
                    return Err(e);
                }
            }
        }

        Ok(outcomes)
    }
}
