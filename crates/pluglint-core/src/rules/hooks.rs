//! hooks.json validation

use crate::diagnostics::ValidationResult;
use crate::parsers::json::parse_json_safe;
use crate::rules::{file_name, Validator};
use serde_json::Value;
use std::path::Path;

const VALID_EVENTS: &[&str] = &[
    "PreToolUse",
    "PostToolUse",
    "PostToolUseFailure",
    "PermissionRequest",
    "UserPromptSubmit",
    "Notification",
    "Stop",
    "SubagentStart",
    "SubagentStop",
    "PreCompact",
    "SessionStart",
    "SessionEnd",
    "Setup",
    "TeammateIdle",
    "TaskCompleted",
    "ConfigChange",
    "WorktreeCreate",
    "WorktreeRemove",
];

/// Events whose hook entries accept a `matcher` filter.
const EVENTS_WITH_MATCHER: &[&str] = &[
    "PreToolUse",
    "PostToolUse",
    "PostToolUseFailure",
    "PermissionRequest",
    "Notification",
    "SubagentStart",
    "SubagentStop",
    "PreCompact",
    "SessionStart",
    "ConfigChange",
];

const VALID_HOOK_TYPES: &[&str] = &["command", "prompt", "agent", "http"];

pub struct HooksValidator;

/// The field each hook type requires.
fn required_field(hook_type: &str) -> Option<&'static str> {
    match hook_type {
        "command" => Some("command"),
        "prompt" => Some("prompt"),
        "agent" => Some("agent"),
        "http" => Some("url"),
        _ => None,
    }
}

fn is_missing(entry: &Value, field: &str) -> bool {
    match entry.get(field) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

impl HooksValidator {
    fn check_inner_hook(&self, result: &mut ValidationResult, name: &str, hook: &Value) {
        if !hook.is_object() {
            result.add_error(format!("{}: hook entries must be objects", name));
            return;
        }

        let hook_type = hook.get("type").and_then(|t| t.as_str()).unwrap_or("");
        if !VALID_HOOK_TYPES.contains(&hook_type) {
            result.add_error(format!(
                "{}: invalid hook type: {} ({})",
                name,
                hook_type,
                VALID_HOOK_TYPES.join("/")
            ));
        } else if let Some(field) = required_field(hook_type) {
            if is_missing(hook, field) {
                result.add_error(format!(
                    "{}: {} hooks require the {} field",
                    name, hook_type, field
                ));
            }
        }

        if let Some(once) = hook.get("once") {
            if !once.is_boolean() {
                result.add_error(format!("{}: once must be a boolean", name));
            }
        }
    }
}

impl Validator for HooksValidator {
    fn validate(&self, path: &Path, content: &str) -> ValidationResult {
        let mut result = ValidationResult::new();
        let name = file_name(path);

        let Some(data) = parse_json_safe(content, &name, &mut result) else {
            return result;
        };

        let hooks = data.get("hooks").and_then(|h| h.as_object());
        let Some(hooks) = hooks.filter(|h| !h.is_empty()) else {
            result.add_warning(format!("{}: hooks is empty", name));
            return result;
        };

        for (event_name, event_hooks) in hooks {
            if !VALID_EVENTS.contains(&event_name.as_str()) {
                result.add_error(format!("{}: invalid event name: {}", name, event_name));
                continue;
            }

            let Some(entries) = event_hooks.as_array() else {
                result.add_error(format!("{}: {} must be an array", name, event_name));
                continue;
            };

            for entry in entries {
                if !entry.is_object() {
                    result.add_error(format!(
                        "{}: {} entries must be objects",
                        name, event_name
                    ));
                    continue;
                }

                if EVENTS_WITH_MATCHER.contains(&event_name.as_str())
                    && is_missing(entry, "matcher")
                {
                    result.add_warning(format!(
                        "{}: {} has no matcher (matches every tool)",
                        name, event_name
                    ));
                }

                if let Some(inner) = entry.get("hooks").and_then(|h| h.as_array()) {
                    for hook in inner {
                        self.check_inner_hook(&mut result, &name, hook);
                    }
                }
            }
        }

        result
    }
}
