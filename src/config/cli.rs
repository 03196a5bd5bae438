use crate::config::OutputFormat;
use crate::core::CalculationOutcome;
use crate::utils::error::Result;
use std::io::Write;

pub fn render(outcomes: &[CalculationOutcome], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(outcomes
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string(outcomes)?),
    }
}

pub fn write_outcomes<W: Write>(
    out: &mut W,
    outcomes: &[CalculationOutcome],
    format: OutputFormat,
) -> Result<()> {
    let rendered = render(outcomes, format)?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Calculation, Operation};

    fn outcomes() -> Vec<CalculationOutcome> {
        vec![
            Calculation::new(Operation::Add, 1, 2).evaluate().unwrap(),
            Calculation::new(Operation::Subtract, 1, 1).evaluate().unwrap(),
        ]
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render(&outcomes(), OutputFormat::Text).unwrap(),
            "1 + 2 = 3\n1 - 1 = 0"
        );
    }

    #[test]
    fn test_render_json() {
        let rendered = render(&outcomes(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                {"op": "add", "lhs": 1, "rhs": 2, "value": 3},
                {"op": "subtract", "lhs": 1, "rhs": 1, "value": 0}
            ])
        );
    }

    #[test]
    fn test_write_outcomes() {
        let mut buf = Vec::new();
        write_outcomes(&mut buf, &outcomes()[..1], OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 + 2 = 3\n");
    }
}
