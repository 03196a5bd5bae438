use crate::domain::model::Calculation;
use crate::utils::error::Result;

/// Anything that can hand the engine an ordered batch of calculations.
pub trait CalculationSource {
    fn calculations(&self) -> Result<Vec<Calculation>>;

    fn name(&self) -> &str {
        "unnamed"
    }
}

impl CalculationSource for Calculation {
    fn calculations(&self) -> Result<Vec<Calculation>> {
        Ok(vec![*self])
    }

    fn name(&self) -> &str {
        "single"
    }
}

impl CalculationSource for Vec<Calculation> {
    fn calculations(&self) -> Result<Vec<Calculation>> {
        Ok(self.clone())
    }
}
