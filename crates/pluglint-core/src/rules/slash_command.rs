//! Slash command validation (`commands/**/*.md`)

use crate::diagnostics::ValidationResult;
use crate::parsers::frontmatter::{self, Value};
use crate::rules::{
    disabled_warnings, file_name, Validator, WARNING_BROAD_BASH_WILDCARD,
    WARNING_DANGEROUS_OPERATION,
};
use std::path::Path;

const VALID_MODELS: &[&str] = &["sonnet", "opus", "haiku"];

/// Keywords suggesting an operation the model should not trigger on its own.
const DANGEROUS_KEYWORDS: &[&str] = &["deploy", "delete", "drop", "production", "本番"];

pub struct SlashCommandValidator;

impl Validator for SlashCommandValidator {
    fn validate(&self, path: &Path, content: &str) -> ValidationResult {
        let mut result = ValidationResult::new();
        let name = file_name(path);
        let fm = frontmatter::parse(content);
        let disabled = disabled_warnings(content);

        for w in &fm.warnings {
            result.add_warning(format!("{}: {}", name, w));
        }

        let description = fm
            .get("description")
            .filter(|v| !v.is_empty_like())
            .map(|v| v.display_string())
            .unwrap_or_default();

        if description.is_empty() {
            if fm.body.trim().is_empty() {
                result.add_error(format!(
                    "{}: description is missing and the body is empty",
                    name
                ));
            } else {
                result.add_warning(format!(
                    "{}: description is missing (the first body line is used by default)",
                    name
                ));
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

        if let Some(agent) = fm.get("agent") {
            if agent.is_empty_like() {
                result.add_error(format!("{}: agent must be a non-empty string", name));
            }
        }

        // A command mentioning deploy/delete/etc. should be gated behind
        // disable-model-invocation: true
        let model_invocation_disabled = matches!(
            fm.get("disable-model-invocation"),
            Some(Value::Bool(true))
        );
        let body_lower = fm.body.to_lowercase();
        let description_lower = description.to_lowercase();
        let has_dangerous_keyword = DANGEROUS_KEYWORDS
            .iter()
            .any(|kw| body_lower.contains(kw) || description_lower.contains(kw));
        if has_dangerous_keyword
            && !model_invocation_disabled
            && !disabled.contains(WARNING_DANGEROUS_OPERATION)
        {
            result.add_warning(format!(
                "{}: possibly dangerous operation; consider disable-model-invocation: true",
                name
            ));
        }

        if let Some(model) = fm.get("model").filter(|v| !v.is_empty_like()) {
            let model_str = model.display_string();
            let model_str = model_str.trim();
            if !model_str.is_empty() && !VALID_MODELS.contains(&model_str) {
                result.add_warning(format!(
                    "{}: invalid model: {} ({})",
                    name,
                    model_str,
                    VALID_MODELS.join("/")
                ));
            }
        }

        result
    }
}
