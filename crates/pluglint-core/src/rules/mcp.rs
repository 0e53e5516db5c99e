//! .mcp.json validation

use crate::diagnostics::ValidationResult;
use crate::parsers::json::parse_json_safe;
use crate::rules::{file_name, Validator};
use crate::secrets::{check_env_secrets, env_from_json};
use std::path::Path;

pub struct McpValidator;

impl Validator for McpValidator {
    fn validate(&self, path: &Path, content: &str) -> ValidationResult {
        let mut result = ValidationResult::new();
        let name = file_name(path);

        let Some(data) = parse_json_safe(content, &name, &mut result) else {
            return result;
        };

        let servers = data.get("mcpServers").and_then(|s| s.as_object());
        let Some(servers) = servers.filter(|s| !s.is_empty()) else {
            result.add_warning(format!("{}: mcpServers is empty", name));
            return result;
        };

        for (server_name, config) in servers {
            if !config.is_object() {
                result.add_error(format!(
                    "{}: {}: server config must be an object",
                    name, server_name
                ));
                continue;
            }

            // type defaults to stdio when omitted
            let server_type = config.get("type").and_then(|t| t.as_str()).unwrap_or("stdio");

            match server_type {
                "stdio" => {
                    let has_command = config
                        .get("command")
                        .and_then(|c| c.as_str())
                        .is_some_and(|c| !c.is_empty());
                    if !has_command {
                        result.add_error(format!(
                            "{}: {}: stdio servers require the command field",
                            name, server_name
                        ));
                    }
                }
                "http" | "sse" => {
                    let has_url = config
                        .get("url")
                        .and_then(|u| u.as_str())
                        .is_some_and(|u| !u.is_empty());
                    if !has_url {
                        result.add_error(format!(
                            "{}: {}: {} servers require the url field",
                            name, server_name, server_type
                        ));
                    }
                }
                other => {
                    result.add_warning(format!(
                        "{}: {}: unknown server type: {}",
                        name, server_name, other
                    ));
                }
            }

            if let Some(env) = config.get("env") {
                let env = env_from_json(env);
                check_env_secrets(&mut result, &name, server_name, &env);
            }
        }

        result
    }
}
