//! Validation result accumulator and file-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Ordered collection of errors and warnings produced by one validation pass.
///
/// Insertion order is preserved for display; pass/fail is decided purely by
/// whether any error was recorded.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Render a human-readable block for hook output.
    ///
    /// Sections are omitted entirely when empty.
    pub fn to_message(&self) -> String {
        let mut lines = Vec::new();
        if !self.errors.is_empty() {
            lines.push("Errors:".to_string());
            for e in &self.errors {
                lines.push(format!("  - {}", e));
            }
        }
        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_string());
            for w in &self.warnings {
                lines.push(format!("  - {}", w));
            }
        }
        lines.join("\n")
    }
}

/// File read failures. These never escape as a crash: callers convert them
/// into a single error entry on a fresh [`ValidationResult`].
#[derive(Error, Debug)]
pub enum FileError {
    #[error("{}: file not found", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: file is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },

    #[error("{}: failed to read file: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
