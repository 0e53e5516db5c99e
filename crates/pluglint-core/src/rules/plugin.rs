//! plugin.json manifest validation (`.claude-plugin/plugin.json`)

use crate::diagnostics::ValidationResult;
use crate::parsers::json::parse_json_safe;
use crate::regex_util::static_regex;
use crate::rules::{file_name, validate_kebab_case, Validator};
use regex::Regex;
use std::path::Path;

static_regex!(fn semver, r"^\d+\.\d+\.\d+");

/// Manifest keys that point at plugin-relative paths.
const PATH_FIELDS: &[&str] = &[
    "commands",
    "agents",
    "skills",
    "hooks",
    "mcpServers",
    "lspServers",
    "outputStyles",
];

pub struct PluginValidator;

impl Validator for PluginValidator {
    fn validate(&self, path: &Path, content: &str) -> ValidationResult {
        let mut result = ValidationResult::new();
        let name = file_name(path);

        let Some(data) = parse_json_safe(content, &name, &mut result) else {
            return result;
        };

        let plugin_name = data.get("name").and_then(|n| n.as_str()).unwrap_or("");
        if plugin_name.is_empty() {
            result.add_error(format!("{}: name is required", name));
        } else {
            if let Some(kebab_error) = validate_kebab_case(plugin_name) {
                result.add_error(format!("{}: {}", name, kebab_error));
            }
            if plugin_name.contains(' ') {
                result.add_error(format!("{}: name must not contain spaces", name));
            }
        }

        if let Some(version) = data.get("version").and_then(|v| v.as_str()) {
            if !version.is_empty() && !semver().is_match(version) {
                result.add_warning(format!(
                    "{}: version should follow semantic versioning (x.y.z): {}",
                    name, version
                ));
            }
        }

        for field in PATH_FIELDS {
            if let Some(value) = data.get(*field).and_then(|v| v.as_str()) {
                if !value.is_empty() && !value.starts_with("./") {
                    result.add_warning(format!(
                        "{}: {} paths should start with ./: {}",
                        name, field, value
                    ));
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(content: &str) -> ValidationResult {
        PluginValidator.validate(Path::new(".claude-plugin/plugin.json"), content)
    }

    #[test]
    fn test_valid_manifest() {
        let content = r#"{"name": "my-plugin", "version": "1.2.3", "commands": "./commands"}"#;
        let result = validate(content);
        assert!(result.is_clean(), "{:?}", result);
    }

    #[test]
    fn test_missing_name_is_error() {
        let result = validate(r#"{"version": "1.0.0"}"#);
        assert!(result.errors.iter().any(|e| e.contains("name is required")));
    }

    #[test]
    fn test_non_kebab_name_is_error() {
        let result = validate(r#"{"name": "My Plugin"}"#);
        assert!(result.errors.iter().any(|e| e.contains("kebab-case")));
        assert!(result.errors.iter().any(|e| e.contains("spaces")));
    }

    #[test]
    fn test_non_semver_version_is_warning() {
        let result = validate(r#"{"name": "my-plugin", "version": "v2"}"#);
        assert!(!result.has_errors());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("semantic versioning")));
    }

    #[test]
    fn test_semver_with_prerelease_suffix_passes() {
        // The pattern is anchored at the start only, as the original was
        let result = validate(r#"{"name": "my-plugin", "version": "1.0.0-beta.1"}"#);
        assert!(result.is_clean(), "{:?}", result);
    }

    #[test]
    fn test_path_fields_without_dot_slash_warn() {
        let content = r#"{"name": "my-plugin", "skills": "skills", "agents": "./agents"}"#;
        let result = validate(content);
        assert!(!result.has_errors());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("skills"));
    }

    #[test]
    fn test_json_parse_error() {
        let result = validate("{");
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("JSON"));
    }
}
