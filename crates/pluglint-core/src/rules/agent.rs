//! Subagent definition validation (`agents/**/*.md`)

use crate::diagnostics::ValidationResult;
use crate::parsers::frontmatter::{self, Value};
use crate::rules::{file_name, validate_kebab_case, Validator};
use std::path::Path;

const VALID_MODELS: &[&str] = &["sonnet", "opus", "haiku", "inherit"];
const VALID_PERMISSION_MODES: &[&str] = &[
    "default",
    "acceptEdits",
    "bypassPermissions",
    "plan",
    "dontAsk",
];
const VALID_MEMORY_SCOPES: &[&str] = &["user", "project", "local"];
const VALID_ISOLATION_MODES: &[&str] = &["worktree"];

pub struct AgentValidator;

/// Display text for a header value, `None` when missing or empty-like.
fn get_display(fm: &frontmatter::Frontmatter, key: &str) -> Option<String> {
    fm.get(key)
        .filter(|v| !v.is_empty_like())
        .map(|v| v.display_string())
}

/// Check that a tool-listing key is a string or a list of non-empty strings.
fn check_string_or_list(result: &mut ValidationResult, name: &str, key: &str, value: &Value) {
    match value {
        Value::Str(_) => {}
        Value::List(items) => {
            if items.iter().any(|i| i.trim().is_empty()) {
                result.add_error(format!("{}: {} must not contain empty entries", name, key));
            }
        }
        _ => result.add_error(format!(
            "{}: {} must be a string or a list of strings",
            name, key
        )),
    }
}

impl Validator for AgentValidator {
    fn validate(&self, path: &Path, content: &str) -> ValidationResult {
        let mut result = ValidationResult::new();
        let name = file_name(path);
        let fm = frontmatter::parse(content);

        for w in &fm.warnings {
            result.add_warning(format!("{}: {}", name, w));
        }

        match get_display(&fm, "name") {
            None => result.add_error(format!("{}: name is required", name)),
            Some(agent_name) => {
                if let Some(kebab_error) = validate_kebab_case(&agent_name) {
                    result.add_error(format!("{}: {}", name, kebab_error));
                }
            }
        }

        match get_display(&fm, "description") {
            None => result.add_error(format!("{}: description is required", name)),
            Some(description) => {
                if description.chars().count() < 20 {
                    result.add_warning(format!(
                        "{}: description is too short; state clearly when this agent should be used",
                        name
                    ));
                }
            }
        }

        if let Some(model) = get_display(&fm, "model") {
            if !VALID_MODELS.contains(&model.as_str()) {
                result.add_warning(format!(
                    "{}: invalid model: {} ({})",
                    name,
                    model,
                    VALID_MODELS.join("/")
                ));
            }
        }

        if let Some(mode) = get_display(&fm, "permissionMode") {
            if !VALID_PERMISSION_MODES.contains(&mode.as_str()) {
                result.add_error(format!(
                    "{}: invalid permissionMode: {} ({})",
                    name,
                    mode,
                    VALID_PERMISSION_MODES.join("/")
                ));
            }
        }

        if let Some(memory) = get_display(&fm, "memory") {
            if !VALID_MEMORY_SCOPES.contains(&memory.as_str()) {
                result.add_error(format!(
                    "{}: invalid memory: {} ({})",
                    name,
                    memory,
                    VALID_MEMORY_SCOPES.join("/")
                ));
            }
        }

        if let Some(isolation) = get_display(&fm, "isolation") {
            if !VALID_ISOLATION_MODES.contains(&isolation.as_str()) {
                result.add_error(format!(
                    "{}: invalid isolation: {} ({})",
                    name,
                    isolation,
                    VALID_ISOLATION_MODES.join("/")
                ));
            }
        }

        if let Some(background) = fm.get("background") {
            if background.as_bool().is_none() {
                result.add_error(format!("{}: background must be a boolean", name));
            }
        }

        for key in ["tools", "disallowedTools", "skills"] {
            if let Some(value) = fm.get(key) {
                check_string_or_list(&mut result, &name, key, value);

                // Task() with empty parens names no agent to delegate to
                if value.display_string().contains("Task()") {
                    result.add_warning(format!(
                        "{}: {} contains Task() with empty parentheses; name the target agent",
                        name, key
                    ));
                }
            }
        }

        if fm.body.trim().is_empty() {
            result.add_warning(format!("{}: system prompt (body) is empty", name));
        }

        result
    }
}
