//! Skill validation (`SKILL.md`)

use crate::diagnostics::ValidationResult;
use crate::parsers::frontmatter::{self, Value};
use crate::regex_util::static_regex;
use crate::rules::{disabled_warnings, file_name, Validator, WARNING_BROAD_BASH_WILDCARD};
use regex::Regex;
use std::path::Path;

const MAX_NAME_LEN: usize = 64;
const MAX_DESCRIPTION_LEN: usize = 1024;
const MAX_BODY_LINES: usize = 500;

static_regex!(fn skill_name, r"^[a-z0-9-]+$");

pub struct SkillValidator;

impl Validator for SkillValidator {
    fn validate(&self, path: &Path, content: &str) -> ValidationResult {
        let mut result = ValidationResult::new();
        let name = file_name(path);
        let fm = frontmatter::parse(content);
        let disabled = disabled_warnings(content);

        for w in &fm.warnings {
            result.add_warning(format!("{}: {}", name, w));
        }

        match fm.get("name").filter(|v| !v.is_empty_like()) {
            None => result.add_error(format!("{}: name is required", name)),
            Some(value) => {
                let skill = value.display_string();
                let len = skill.chars().count();
                if len > MAX_NAME_LEN {
                    result.add_error(format!(
                        "{}: name must be at most 64 characters: {} characters",
                        name, len
                    ));
                }
                if !skill_name().is_match(&skill) {
                    result.add_error(format!(
                        "{}: name may only contain lowercase letters, digits, and hyphens",
                        name
                    ));
                }
                let lower = skill.to_lowercase();
                if lower.contains("anthropic") || lower.contains("claude") {
                    result.add_error(format!(
                        "{}: name must not contain the reserved words anthropic or claude",
                        name
                    ));
                }
            }
        }

        match fm.get("description").filter(|v| !v.is_empty_like()) {
            None => result.add_error(format!("{}: description is required", name)),
            Some(value) => {
                let len = value.display_string().chars().count();
                if len > MAX_DESCRIPTION_LEN {
                    result.add_error(format!(
                        "{}: description must be at most 1024 characters: {} characters",
                        name, len
                    ));
                }
            }
        }

        // Only fork is supported; omitting the key means the main context
        if let Some(context) = fm.get("context") {
            let context_str = if context.is_empty_like() {
                String::new()
            } else {
                context.display_string()
            };
            if !context_str.is_empty() && context_str != "fork" {
                result.add_error(format!(
                    "{}: invalid context: {} (only fork is supported)",
                    name, context_str
                ));
            }
        }

        if let Some(value) = fm.get("user-invocable") {
            if value.as_bool().is_none() {
                result.add_error(format!("{}: user-invocable must be a boolean", name));
            }
        }

        if let Some(agent) = fm.get("agent") {
            if agent.is_empty_like() {
                result.add_error(format!("{}: agent must be a non-empty string", name));
            }
        }

        if let Some(tools) = fm.get("allowed-tools") {
            let tools_str = match tools {
                Value::List(items) => items.join(", "),
                other => other.display_string(),
            };
            if tools_str.contains("Bash(*)")
                && !disabled.contains(WARNING_BROAD_BASH_WILDCARD)
            {
                result.add_warning(format!(
                    "{}: allowed-tools grants Bash(*); prefer specific command patterns",
                    name
                ));
            }
        }

        // Skill hooks belong in hooks.json, not the frontmatter
        if fm.get("hooks").is_some() {
            result.add_warning(format!(
                "{}: hooks should be defined in hooks.json, not in frontmatter",
                name
            ));
        }

        let body_lines = fm.body.trim().split('\n').count();
        if body_lines > MAX_BODY_LINES {
            result.add_warning(format!(
                "{}: body exceeds 500 lines ({} lines); consider splitting",
                name, body_lines
            ));
        }

        result
    }
}
