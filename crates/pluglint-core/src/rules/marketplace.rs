//! marketplace.json validation

use crate::diagnostics::ValidationResult;
use crate::parsers::json::parse_json_safe;
use crate::rules::{file_name, validate_kebab_case, Validator};
use serde_json::Value;
use std::path::Path;

/// Marketplace names reserved for official catalogs.
const RESERVED_NAMES: &[&str] = &[
    "claude-code-marketplace",
    "claude-code-plugins",
    "claude-plugins-official",
    "anthropic-marketplace",
    "anthropic-plugins",
    "agent-skills",
    "life-sciences",
];

pub struct MarketplaceValidator;

impl Validator for MarketplaceValidator {
    fn validate(&self, path: &Path, content: &str) -> ValidationResult {
        let mut result = ValidationResult::new();
        let name = file_name(path);

        let Some(data) = parse_json_safe(content, &name, &mut result) else {
            return result;
        };

        if !data.is_object() {
            result.add_error(format!("{}: the root must be an object", name));
            return result;
        }

        match data.get("name") {
            None | Some(Value::Null) => result.add_error(format!("{}: name is required", name)),
            Some(Value::String(s)) if s.is_empty() => {
                result.add_error(format!("{}: name is required", name))
            }
            Some(Value::String(s)) => {
                if let Some(kebab_error) = validate_kebab_case(s) {
                    result.add_error(format!("{}: {}", name, kebab_error));
                }
                if RESERVED_NAMES.contains(&s.as_str()) {
                    result.add_error(format!("{}: name is reserved: {}", name, s));
                }
            }
            Some(_) => result.add_error(format!("{}: name must be a string", name)),
        }

        match data.get("owner") {
            None | Some(Value::Null) => result.add_error(format!("{}: owner is required", name)),
            Some(Value::Object(owner)) => match owner.get("name") {
                None | Some(Value::Null) => {
                    result.add_error(format!("{}: owner.name is required", name))
                }
                Some(Value::String(s)) if s.is_empty() => {
                    result.add_error(format!("{}: owner.name is required", name))
                }
                Some(Value::String(_)) => {}
                Some(_) => result.add_error(format!("{}: owner.name must be a string", name)),
            },
            Some(_) => result.add_error(format!("{}: owner must be an object", name)),
        }

        match data.get("plugins") {
            None | Some(Value::Null) => {
                result.add_error(format!("{}: plugins is required", name))
            }
            Some(Value::Array(plugins)) => {
                for (i, plugin) in plugins.iter().enumerate() {
                    let Some(plugin) = plugin.as_object() else {
                        result.add_error(format!(
                            "{}: plugins[{}] must be an object",
                            name, i
                        ));
                        continue;
                    };

                    match plugin.get("name") {
                        None | Some(Value::Null) => result
                            .add_error(format!("{}: plugins[{}].name is required", name, i)),
                        Some(Value::String(s)) if s.is_empty() => result
                            .add_error(format!("{}: plugins[{}].name is required", name, i)),
                        Some(Value::String(s)) => {
                            if let Some(kebab_error) = validate_kebab_case(s) {
                                result.add_error(format!(
                                    "{}: plugins[{}]: {}",
                                    name, i, kebab_error
                                ));
                            }
                        }
                        Some(_) => result.add_error(format!(
                            "{}: plugins[{}].name must be a string",
                            name, i
                        )),
                    }

                    match plugin.get("source") {
                        None | Some(Value::Null) => result
                            .add_error(format!("{}: plugins[{}].source is required", name, i)),
                        Some(Value::String(s)) if s.is_empty() => result
                            .add_error(format!("{}: plugins[{}].source is required", name, i)),
                        Some(Value::String(_)) | Some(Value::Object(_)) => {}
                        Some(_) => result.add_error(format!(
                            "{}: plugins[{}].source must be a string or an object",
                            name, i
                        )),
                    }
                }
            }
            Some(_) => result.add_error(format!("{}: plugins must be an array", name)),
        }

        result
    }
}
