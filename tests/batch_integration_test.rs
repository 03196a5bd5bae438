use math_ops::utils::validation::Validate;
use math_ops::{BatchConfig, CalcEngine, MathError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_batch(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_end_to_end_batch() {
    let file = write_batch(
        r#"
[batch]
name = "scenarios"
description = "Reference cases"

[[calculation]]
op = "add"
lhs = 1
rhs = 2

[[calculation]]
op = "add"
lhs = 1
rhs = -2

[[calculation]]
op = "subtract"
lhs = 1
rhs = 2

[[calculation]]
op = "subtract"
lhs = 1
rhs = -2

[[calculation]]
op = "subtract"
lhs = 1
rhs = 1

[[calculation]]
op = "subtract"
lhs = 1
rhs = 0

[[calculation]]
op = "subtract"
lhs = 0
rhs = 0
"#,
    );

    let batch = BatchConfig::from_file(file.path()).unwrap();
    batch.validate().unwrap();

    let values: Vec<i64> = CalcEngine::new(batch)
        .run()
        .unwrap()
        .into_iter()
        .map(|o| o.value)
        .collect();
    assert_eq!(values, vec![3, -1, -1, 3, 0, 1, 0]);
}

#[test]
fn test_batch_with_bad_operand_fails_before_evaluation() {
    let file = write_batch(
        r#"
[[calculation]]
op = "add"
lhs = 1
rhs = 2

[[calculation]]
op = "add"
lhs = "two"
rhs = 2
"#,
    );

    let batch = BatchConfig::from_file(file.path()).unwrap();
    let err = batch.validate().unwrap_err();
    assert!(matches!(
        err,
        MathError::InvalidOperand { ref field, ref value, .. }
            if field == "calculation[1].lhs" && value == "two"
    ));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_invalid_toml() {
    let file = write_batch("[[calculation]\nop = ");
    assert!(matches!(
        BatchConfig::from_file(file.path()),
        Err(MathError::ConfigError { .. })
    ));
}
