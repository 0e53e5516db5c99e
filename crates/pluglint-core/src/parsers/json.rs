//! JSON entry point for manifest validators

use crate::diagnostics::ValidationResult;

/// Parse a JSON document leniently: on failure, record a single error on
/// `result` and return `None` so the caller stops validating that file.
pub fn parse_json_safe(
    content: &str,
    file_name: &str,
    result: &mut ValidationResult,
) -> Option<serde_json::Value> {
    match serde_json::from_str(content) {
        Ok(value) => Some(value),
        Err(e) => {
            result.add_error(format!("{}: JSON parse error: {}", file_name, e));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_json() {
        let mut result = ValidationResult::new();
        let value = parse_json_safe(r#"{"hooks": {}}"#, "hooks.json", &mut result);
        assert!(value.is_some());
        assert!(result.is_clean());
    }

    #[test]
    fn test_invalid_json_records_single_error() {
        let mut result = ValidationResult::new();
        let value = parse_json_safe("{not json", "hooks.json", &mut result);
        assert!(value.is_none());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("JSON"));
        assert!(result.errors[0].starts_with("hooks.json:"));
    }
}
