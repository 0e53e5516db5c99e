//! Output style validation (`output-styles/**/*.md`)

use crate::diagnostics::ValidationResult;
use crate::parsers::frontmatter::{self, Value};
use crate::rules::{file_name, Validator};
use std::path::Path;

pub struct OutputStyleValidator;

impl Validator for OutputStyleValidator {
    fn validate(&self, path: &Path, content: &str) -> ValidationResult {
        let mut result = ValidationResult::new();
        let name = file_name(path);
        let fm = frontmatter::parse(content);

        for w in &fm.warnings {
            result.add_warning(format!("{}: {}", name, w));
        }

        // name is optional, but when present it must be a string and should
        // match the file stem
        let mut style_name = String::new();
        if let Some(value) = fm.get("name").filter(|v| !v.is_empty_like()) {
            match value {
                Value::Str(s) => style_name = s.clone(),
                _ => result.add_error(format!("{}: name must be a string", name)),
            }
        }
        if !style_name.is_empty() {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            if style_name != stem {
                result.add_warning(format!(
                    "{}: name differs from the file name (name: {}, file: {})",
                    name, style_name, stem
                ));
            }
        }

        let mut description = String::new();
        if let Some(value) = fm.get("description").filter(|v| !v.is_empty_like()) {
            match value {
                Value::Str(s) => description = s.clone(),
                _ => result.add_error(format!("{}: description must be a string", name)),
            }
        }
        if description.is_empty() {
            result.add_warning(format!(
                "{}: description is recommended (it is shown in the UI)",
                name
            ));
        }

        if let Some(value) = fm.get("keep-coding-instructions") {
            if value.as_bool().is_none() {
                result.add_error(format!(
                    "{}: keep-coding-instructions must be true or false",
                    name
                ));
            }
        }

        if fm.body.trim().is_empty() {
            result.add_error(format!("{}: style instructions (body) are required", name));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(content: &str) -> ValidationResult {
        OutputStyleValidator.validate(Path::new("output-styles/concise.md"), content)
    }

    #[test]
    fn test_valid_output_style() {
        let content = "---\nname: concise\ndescription: Short answers\n---\nKeep replies brief";
        let result = validate(content);
        assert!(result.is_clean(), "{:?}", result);
    }

    #[test]
    fn test_name_mismatch_is_warning() {
        let content = "---\nname: verbose\ndescription: Short answers\n---\nBody";
        let result = validate(content);
        assert!(!result.has_errors());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("differs from the file name")));
    }

    #[test]
    fn test_non_string_name_is_error() {
        let content = "---\nname: 42\ndescription: Short answers\n---\nBody";
        let result = validate(content);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("name must be a string")));
    }

    #[test]
    fn test_missing_description_is_warning() {
        let content = "---\nname: concise\n---\nBody";
        let result = validate(content);
        assert!(!result.has_errors());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("description is recommended")));
    }

    #[test]
    fn test_non_string_description_is_error() {
        let content = "---\ndescription: true\n---\nBody";
        let result = validate(content);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("description must be a string")));
    }

    #[test]
    fn test_keep_coding_instructions_must_be_boolean() {
        let bad = "---\ndescription: Short answers\nkeep-coding-instructions: always\n---\nBody";
        let result = validate(bad);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("keep-coding-instructions")));

        let ok = "---\ndescription: Short answers\nkeep-coding-instructions: true\n---\nBody";
        assert!(validate(ok).is_clean());
    }

    #[test]
    fn test_empty_body_is_error() {
        let content = "---\nname: concise\ndescription: Short answers\n---\n";
        let result = validate(content);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("style instructions")));
    }
}
