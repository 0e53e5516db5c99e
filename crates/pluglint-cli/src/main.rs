//! pluglint CLI - validator for Claude Code plugin packages
//!
//! Two modes share one binary:
//! - CLI mode: `pluglint <files...>` prints findings and sets the exit code.
//! - Hook mode: with no file arguments, reads a PostToolUse payload from
//!   stdin and answers with a single JSON line on stdout.

use clap::Parser;
use colored::*;
use pluglint_core::{validate_file, ValidationResult};
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;
use std::process;
use tracing::debug;

#[derive(Parser)]
#[command(name = "pluglint")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Validator for Claude Code plugin packages",
    long_about = "Validate Claude Code plugin files: skills, agents, slash commands,\noutput styles, hooks.json, .mcp.json, .lsp.json, manifests, and READMEs.\n\nWith no file arguments, runs as a PostToolUse hook reading JSON from stdin."
)]
struct Cli {
    /// Files to validate; empty means hook mode
    files: Vec<PathBuf>,

    /// Strict mode (treat warnings as errors)
    #[arg(short, long)]
    strict: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Subset of the PostToolUse payload the hook cares about
#[derive(Deserialize)]
struct HookInput {
    #[serde(default)]
    tool_name: String,
    #[serde(default)]
    tool_input: ToolInput,
}

#[derive(Deserialize, Default)]
struct ToolInput {
    #[serde(default)]
    file_path: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = if cli.files.is_empty() {
        run_hook_mode()
    } else {
        run_cli_mode(&cli)
    };

    process::exit(exit_code);
}

/// Read a PostToolUse payload from stdin and report findings back to the
/// agent loop. The hook never blocks the tool call: exit code is always 0
/// and output is a single `{"continue": true, ...}` line, emitted only
/// when there is something to say.
fn run_hook_mode() -> i32 {
    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        return 0;
    }

    let Ok(hook) = serde_json::from_str::<HookInput>(&input) else {
        debug!("hook input was not valid JSON; passing through");
        return 0;
    };

    if hook.tool_name != "Edit" && hook.tool_name != "Write" {
        return 0;
    }
    let Some(file_path) = hook.tool_input.file_path else {
        return 0;
    };

    debug!(path = %file_path.display(), "validating edited file");
    let result = validate_file(&file_path);
    if result.is_clean() {
        return 0;
    }

    let response = serde_json::json!({
        "continue": true,
        "systemMessage": result.to_message(),
    });
    println!("{}", response);

    0
}

fn run_cli_mode(cli: &Cli) -> i32 {
    let mut total_errors = 0usize;
    let mut total_warnings = 0usize;

    for file in &cli.files {
        debug!(path = %file.display(), "validating");
        let result = validate_file(file);
        report(file, &result);
        total_errors += result.errors.len();
        total_warnings += result.warnings.len();
    }

    if cli.verbose && total_errors == 0 && total_warnings == 0 {
        eprintln!("{}", "✓ No issues found".green().bold());
    }

    if total_errors > 0 || (cli.strict && total_warnings > 0) {
        1
    } else {
        0
    }
}

fn report(file: &PathBuf, result: &ValidationResult) {
    if result.has_errors() {
        eprintln!("{} {}", "❌".red(), file.display());
        for error in &result.errors {
            eprintln!("   {}: {}", "error".red().bold(), error);
        }
        for warning in &result.warnings {
            eprintln!("   {}: {}", "warning".yellow().bold(), warning);
        }
    } else if !result.warnings.is_empty() {
        eprintln!("{} {}", "⚠️ ".yellow(), file.display());
        for warning in &result.warnings {
            eprintln!("   {}: {}", "warning".yellow().bold(), warning);
        }
    }
}
