use crate::utils::error::{MathError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a signed whole-number operand. Surrounding whitespace is ignored.
pub fn parse_operand(field_name: &str, text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(MathError::InvalidOperand {
            field: field_name.to_string(),
            value: text.to_string(),
            reason: "Operand cannot be empty".to_string(),
        });
    }

    trimmed.parse::<i64>().map_err(|e| {
        let reason = match e.kind() {
            std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
                "Operand does not fit in a 64-bit integer".to_string()
            }
            _ => "Operand must be a whole number".to_string(),
        };
        MathError::InvalidOperand {
            field: field_name.to_string(),
            value: text.to_string(),
            reason,
        }
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MathError::ConfigError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("lhs", "42").unwrap(), 42);
        assert_eq!(parse_operand("lhs", "-7").unwrap(), -7);
        assert_eq!(parse_operand("lhs", "+3").unwrap(), 3);
        assert_eq!(parse_operand("lhs", "  0 ").unwrap(), 0);
    }

    #[test]
    fn test_parse_operand_rejects_non_integers() {
        for bad in ["", "   ", "abc", "1.5", "1e3", "--1", "0x10"] {
            let err = parse_operand("rhs", bad).unwrap_err();
            assert!(
                matches!(err, MathError::InvalidOperand { ref field, .. } if field == "rhs"),
                "expected InvalidOperand for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_parse_operand_out_of_range() {
        let err = parse_operand("lhs", "9223372036854775808").unwrap_err();
        assert!(err.to_string().contains("64-bit"));
        assert_eq!(parse_operand("lhs", "-9223372036854775808").unwrap(), i64::MIN);
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("batch.name", "demo").is_ok());
        assert!(validate_non_empty_string("batch.name", "  ").is_err());
    }
}
