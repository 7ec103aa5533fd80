//! Fix command — applies mechanical suggestions until none remain.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use quillcheck_core::analyze;

/// Arguments for the `fix` subcommand.
#[derive(Args, Debug)]
pub struct FixArgs {
    /// File to fix.
    pub file: Utf8PathBuf,

    /// Write the fixed text back to the file instead of stdout.
    #[arg(long)]
    pub write: bool,

    /// Maximum number of analyze-and-apply passes.
    #[arg(long, default_value_t = 100)]
    pub max_passes: usize,
}

/// Outcome of a fix run.
#[derive(Debug, Serialize)]
struct FixOutcome {
    /// The text after all applied fixes.
    fixed_text: String,
    /// Number of fixes applied.
    applied: usize,
    /// Analysis passes consumed, including the final clean pass.
    passes: usize,
    /// Diagnostics still present in the fixed text (advisory ones remain).
    remaining_diagnostics: usize,
}

/// Apply mechanical fixes to a file.
///
/// Every pass re-analyzes the current text and applies the first mechanical
/// suggestion, so offsets always refer to the text being edited. Advisory
/// suggestions are never applied.
#[instrument(name = "cmd_fix", skip_all, fields(file = %args.file))]
pub fn cmd_fix(args: FixArgs, global_json: bool, max_input: Option<usize>) -> anyhow::Result<()> {
    debug!(file = %args.file, write = args.write, "executing fix command");

    let original = super::load_input(&args.file, max_input)?;
    let outcome = apply_fixes(&original, args.max_passes);

    if args.write && outcome.applied > 0 {
        std::fs::write(args.file.as_std_path(), &outcome.fixed_text)
            .with_context(|| format!("failed to write {}", args.file))?;
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if args.write {
        if outcome.applied == 0 {
            println!("{}: nothing to fix", args.file);
        } else {
            println!("{}: applied {} fixes", args.file, outcome.applied);
        }
    } else {
        // Filter mode: emit the text exactly, fixed or not.
        print!("{}", outcome.fixed_text);
    }

    Ok(())
}

fn apply_fixes(text: &str, max_passes: usize) -> FixOutcome {
    let mut current = text.to_string();
    let mut applied = 0;
    let mut passes = 0;

    while passes < max_passes {
        passes += 1;
        let report = analyze(&current);
        let Some(fixed) = report.diagnostics.iter().find_map(|d| {
            let suggestion = d.mechanical_suggestion()?;
            d.apply_to(&current, suggestion)
        }) else {
            break;
        };
        current = fixed;
        applied += 1;
    }

    let remaining_diagnostics = analyze(&current).stats.diagnostic_count;
    FixOutcome {
        fixed_text: current,
        applied,
        passes,
        remaining_diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_spaces_and_corrects_spelling() {
        let outcome = apply_fixes("i  seperate  it.", 100);
        assert_eq!(outcome.fixed_text, "i separate it.");
        assert_eq!(outcome.applied, 3);
    }

    #[test]
    fn punctuation_fix_cascades_into_capitalization() {
        // Inserting the space exposes a lowercase sentence start on the
        // following pass.
        let outcome = apply_fixes("end.world", 100);
        assert_eq!(outcome.fixed_text, "end. World");
        assert_eq!(outcome.applied, 2);
    }

    #[test]
    fn could_of_becomes_could_have() {
        let outcome = apply_fixes("You could of known", 100);
        assert_eq!(outcome.fixed_text, "You could have known");
        assert_eq!(outcome.applied, 1);
    }

    #[test]
    fn advisory_suggestions_leave_text_alone() {
        let outcome = apply_fixes("He are happy", 100);
        assert_eq!(outcome.fixed_text, "He are happy");
        assert_eq!(outcome.applied, 0);
        assert!(outcome.remaining_diagnostics > 0);
    }

    #[test]
    fn pass_cap_bounds_the_work() {
        let outcome = apply_fixes("a  b  c  d", 2);
        assert_eq!(outcome.applied, 2);
        assert_eq!(outcome.passes, 2);
        assert_eq!(outcome.fixed_text, "a b c  d");
    }

    #[test]
    fn clean_text_costs_one_pass() {
        let outcome = apply_fixes("Nothing wrong here.", 100);
        assert_eq!(outcome.fixed_text, "Nothing wrong here.");
        assert_eq!(outcome.applied, 0);
        assert_eq!(outcome.passes, 1);
    }
}
