//! Per-document-kind validation rules

pub mod agent;
pub mod hooks;
pub mod lsp;
pub mod marketplace;
pub mod mcp;
pub mod output_style;
pub mod plugin;
pub mod readme;
pub mod skill;
pub mod slash_command;

use crate::diagnostics::ValidationResult;
use crate::regex_util::static_regex;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

/// Trait for file validators. One rule set per document kind; the
/// dispatcher in `lib.rs` selects exactly one per path.
pub trait Validator {
    fn validate(&self, path: &Path, content: &str) -> ValidationResult;
}

/// Warning id for the dangerous-keyword slash-command warning.
pub const WARNING_DANGEROUS_OPERATION: &str = "dangerous-operation";
/// Warning id for the `Bash(*)` allowed-tools warning.
pub const WARNING_BROAD_BASH_WILDCARD: &str = "broad-bash-wildcard";

static_regex!(fn kebab_case, r"^[a-z0-9]+(-[a-z0-9]+)*$");
static_regex!(fn disable_comment, r"<!--\s*validator-disable\s+([a-z-]+)\s*-->");

/// Check kebab-case form; returns the error text on violation.
pub(crate) fn validate_kebab_case(name: &str) -> Option<String> {
    if kebab_case().is_match(name) {
        None
    } else {
        Some(format!(
            "name must be kebab-case (lowercase letters, digits, hyphens): {}",
            name
        ))
    }
}

/// Collect warning ids suppressed by `<!-- validator-disable <id> -->`
/// comments anywhere in the raw document text. Scans the raw text, not the
/// parsed frontmatter: the comment may live in the body or the header.
pub(crate) fn disabled_warnings(content: &str) -> HashSet<String> {
    disable_comment()
        .captures_iter(content)
        .map(|c| c[1].to_string())
        .collect()
}

/// File name for message prefixes; lossy so weird paths still report.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_accepts() {
        assert!(validate_kebab_case("code-review").is_none());
        assert!(validate_kebab_case("a").is_none());
        assert!(validate_kebab_case("x1-y2-z3").is_none());
    }

    #[test]
    fn test_kebab_case_rejects() {
        for bad in ["Code_Reviewer", "UPPER", "has space", "-leading", "trailing-", "double--dash", ""] {
            let err = validate_kebab_case(bad);
            assert!(err.is_some(), "{:?} should be rejected", bad);
            assert!(err.unwrap().contains("kebab-case"));
        }
    }

    #[test]
    fn test_disabled_warnings_scan() {
        let content = "---\nname: x\n---\n<!-- validator-disable dangerous-operation -->\nbody";
        let disabled = disabled_warnings(content);
        assert!(disabled.contains(WARNING_DANGEROUS_OPERATION));
        assert!(!disabled.contains(WARNING_BROAD_BASH_WILDCARD));
    }

    #[test]
    fn test_disabled_warnings_multiple_and_spacing() {
        let content = "<!--validator-disable broad-bash-wildcard-->\n<!--  validator-disable   dangerous-operation  -->";
        let disabled = disabled_warnings(content);
        assert_eq!(disabled.len(), 2);
    }
}
