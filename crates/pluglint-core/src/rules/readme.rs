//! README.md validation

use crate::diagnostics::ValidationResult;
use crate::regex_util::static_regex;
use crate::rules::{file_name, Validator};
use regex::Regex;
use std::path::Path;

/// Required sections, matched against Japanese or English headings.
const REQUIRED_SECTIONS: &[(&str, &str)] = &[
    (r"(?i)##\s+(概要|Overview)", "Overview (概要)"),
    (r"(?i)##\s+(インストール|Installation)", "Installation (インストール)"),
    (r"(?i)##\s+(使い方|Usage)", "Usage (使い方)"),
];

static_regex!(fn md_link, r"(!?)\[([^\]]*)\]\(([^)]*)\)");

fn section_patterns() -> &'static Vec<Regex> {
    static STORE: std::sync::OnceLock<Vec<Regex>> = std::sync::OnceLock::new();
    STORE.get_or_init(|| {
        REQUIRED_SECTIONS
            .iter()
            .map(|(pattern, _)| {
                Regex::new(pattern)
                    .unwrap_or_else(|_| panic!("BUG: invalid section regex: {}", pattern))
            })
            .collect()
    })
}

pub struct ReadmeValidator;

impl ReadmeValidator {
    fn check_sections(&self, result: &mut ValidationResult, name: &str, content: &str) {
        for (re, (_, section_name)) in section_patterns().iter().zip(REQUIRED_SECTIONS) {
            if !re.is_match(content) {
                result.add_error(format!(
                    "{}: missing required section: {}",
                    name, section_name
                ));
            }
        }
    }

    fn check_links(&self, result: &mut ValidationResult, name: &str, path: &Path, content: &str) {
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

        for caps in md_link().captures_iter(content) {
            let is_image = &caps[1] == "!";
            let text = &caps[2];
            let target = &caps[3];

            if target.starts_with('#') {
                continue;
            }
            if target.starts_with("http://")
                || target.starts_with("https://")
                || target.starts_with("mailto:")
            {
                continue;
            }

            // Links may carry an anchor: ./file.md#section
            let target_path = if is_image {
                target
            } else {
                target.split('#').next().unwrap_or("")
            };
            if target_path.is_empty() {
                continue;
            }

            if !base_dir.join(target_path).exists() {
                if is_image {
                    result.add_error(format!(
                        "{}: broken image link ![{}]({}) - file does not exist",
                        name, text, target
                    ));
                } else {
                    result.add_error(format!(
                        "{}: broken link [{}]({}) - file does not exist",
                        name, text, target
                    ));
                }
            }
        }
    }

    fn check_code_blocks(&self, result: &mut ValidationResult, name: &str, content: &str) {
        let mut in_code_block = false;
        for (i, line) in content.lines().enumerate() {
            let stripped = line.trim();
            if !stripped.starts_with("```") {
                continue;
            }
            if !in_code_block {
                in_code_block = true;
                if stripped[3..].trim().is_empty() {
                    result.add_warning(format!(
                        "{}: code block at line {} has no language tag",
                        name,
                        i + 1
                    ));
                }
            } else {
                in_code_block = false;
            }
        }
    }
}

impl Validator for ReadmeValidator {
    fn validate(&self, path: &Path, content: &str) -> ValidationResult {
        let mut result = ValidationResult::new();
        let name = file_name(path);

        self.check_sections(&mut result, &name, content);
        self.check_links(&mut result, &name, path, content);
        self.check_code_blocks(&mut result, &name, content);

        result
    }
}
