//! # pluglint-core
//!
//! Core validation engine for Claude Code plugin packages.
//!
//! Validates:
//! - Agent Skills (SKILL.md)
//! - Subagent definitions (agents/*.md)
//! - Slash commands (commands/*.md)
//! - Output styles (output-styles/*.md)
//! - hooks.json, .mcp.json, .lsp.json
//! - Plugin and marketplace manifests (.claude-plugin/)
//! - README.md
//!
//! The heart of the crate is the YAML-frontmatter subset parser in
//! [`parsers::frontmatter`]; every Markdown rule set consumes its output.

pub mod diagnostics;
pub mod parsers;
pub(crate) mod regex_util;
pub mod rules;
pub mod secrets;

use std::path::Path;

pub use diagnostics::{FileError, ValidationResult};
use rules::Validator;

/// Detected file type for validator dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// SKILL.md files
    Skill,
    /// commands/**/*.md
    SlashCommand,
    /// agents/**/*.md
    Agent,
    /// output-styles/**/*.md
    OutputStyle,
    /// hooks.json
    Hooks,
    /// .mcp.json
    Mcp,
    /// .lsp.json
    Lsp,
    /// marketplace.json in .claude-plugin/
    Marketplace,
    /// plugin.json in .claude-plugin/
    Plugin,
    /// README.md
    Readme,
    /// Skip validation
    Unknown,
}

fn has_dir_ancestor(path: &Path, dir: &str) -> bool {
    // Only directory components count; the file name itself is excluded
    path.parent()
        .map(|p| p.components().any(|c| c.as_os_str() == dir))
        .unwrap_or(false)
}

/// Detect file type based on path patterns
pub fn detect_file_type(path: &Path) -> FileType {
    let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let is_markdown = filename.ends_with(".md");

    match filename {
        "SKILL.md" => FileType::Skill,
        "hooks.json" => FileType::Hooks,
        ".mcp.json" => FileType::Mcp,
        ".lsp.json" => FileType::Lsp,
        "plugin.json" if has_dir_ancestor(path, ".claude-plugin") => FileType::Plugin,
        "marketplace.json" if has_dir_ancestor(path, ".claude-plugin") => FileType::Marketplace,
        _ if is_markdown && has_dir_ancestor(path, "commands") => FileType::SlashCommand,
        _ if is_markdown && has_dir_ancestor(path, "agents") => FileType::Agent,
        _ if is_markdown && has_dir_ancestor(path, "output-styles") => FileType::OutputStyle,
        "README.md" => FileType::Readme,
        _ => FileType::Unknown,
    }
}

/// Get the validator for a file type, if the type is validated at all
pub fn validator_for(file_type: FileType) -> Option<Box<dyn Validator>> {
    match file_type {
        FileType::Skill => Some(Box::new(rules::skill::SkillValidator)),
        FileType::SlashCommand => Some(Box::new(rules::slash_command::SlashCommandValidator)),
        FileType::Agent => Some(Box::new(rules::agent::AgentValidator)),
        FileType::OutputStyle => Some(Box::new(rules::output_style::OutputStyleValidator)),
        FileType::Hooks => Some(Box::new(rules::hooks::HooksValidator)),
        FileType::Mcp => Some(Box::new(rules::mcp::McpValidator)),
        FileType::Lsp => Some(Box::new(rules::lsp::LspValidator)),
        FileType::Marketplace => Some(Box::new(rules::marketplace::MarketplaceValidator)),
        FileType::Plugin => Some(Box::new(rules::plugin::PluginValidator)),
        FileType::Readme => Some(Box::new(rules::readme::ReadmeValidator)),
        FileType::Unknown => None,
    }
}

fn read_file(path: &Path) -> Result<String, FileError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FileError::NotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::InvalidData => FileError::NotUtf8 {
            path: path.to_path_buf(),
        },
        _ => FileError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Validate a single file, reading it from disk.
///
/// Paths matching no dispatch rule return an empty (clean) result. Read
/// failures become a single error entry; this function never fails.
pub fn validate_file(path: &Path) -> ValidationResult {
    let Some(validator) = validator_for(detect_file_type(path)) else {
        return ValidationResult::new();
    };

    match read_file(path) {
        Ok(content) => validator.validate(path, &content),
        Err(e) => {
            let mut result = ValidationResult::new();
            result.add_error(e.to_string());
            result
        }
    }
}

/// Validate already-loaded content as if it lived at `path`.
pub fn validate_content(path: &Path, content: &str) -> ValidationResult {
    match validator_for(detect_file_type(path)) {
        Some(validator) => validator.validate(path, content),
        None => ValidationResult::new(),
    }
}
