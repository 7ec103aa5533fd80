//! Check command — rule-based analysis of a single file.

use anyhow::bail;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use quillcheck_core::{AnalysisReport, Category, Suggestion, analyze};

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Categories to report (comma-separated). Omit for all.
    #[arg(long, value_delimiter = ',', value_enum)]
    pub categories: Option<Vec<Category>>,

    /// Minimum acceptable overall score (0-100).
    #[arg(long)]
    pub min_score: Option<u8>,
}

/// Analyze a file and report diagnostics.
///
/// A category filter narrows the reported diagnostics only; the stats always
/// cover every category.
#[instrument(name = "cmd_check", skip_all, fields(file = %args.file))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    config_min_score: Option<u8>,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, categories = ?args.categories, "executing check command");

    let content = super::load_input(&args.file, max_input)?;
    let mut report = analyze(&content);

    if let Some(ref keep) = args.categories {
        report.diagnostics.retain(|d| keep.contains(&d.category));
    }

    let min_score = args.min_score.or(config_min_score);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&args.file, &content, &report);

    if let Some(min) = min_score
        && report.stats.overall_score < min
    {
        bail!(
            "{} scored {}, below the minimum {}",
            args.file,
            report.stats.overall_score,
            min,
        );
    }

    Ok(())
}

fn print_report(file: &Utf8Path, content: &str, report: &AnalysisReport) {
    let stats = &report.stats;
    println!("{}: score {}", file.bold(), score_label(stats.overall_score));
    println!(
        "  Words: {}   Characters: {}",
        stats.word_count, stats.character_count
    );
    let scores = stats.category_scores;
    println!(
        "  Categories: grammar {}, spelling {}, punctuation {}, style {}",
        scores.grammar, scores.spelling, scores.punctuation, scores.style
    );

    if report.diagnostics.is_empty() {
        println!("  Issues: none detected");
        return;
    }

    println!("  Issues: {}", report.diagnostics.len());
    for diagnostic in &report.diagnostics {
        let snippet = diagnostic.matched_text(content).unwrap_or("");
        println!(
            "    [{}] at {}: {} ({:?})",
            category_label(diagnostic.category),
            diagnostic.offset,
            diagnostic.message,
            snippet,
        );
        for suggestion in &diagnostic.suggestions {
            match suggestion {
                Suggestion::Replacement(text) => println!("      fix: {text:?}"),
                Suggestion::Advice(text) => println!("      note: {text}"),
            }
        }
    }
}

fn score_label(score: u8) -> String {
    let label = format!("{score}/100");
    if score >= 80 {
        label.green().to_string()
    } else if score >= 60 {
        label.yellow().to_string()
    } else {
        label.red().to_string()
    }
}

fn category_label(category: Category) -> String {
    let name = category.as_str().to_uppercase();
    match category {
        Category::Grammar => name.red().to_string(),
        Category::Spelling => name.yellow().to_string(),
        Category::Punctuation => name.cyan().to_string(),
        Category::Style | Category::Spacing | Category::Capitalization => {
            name.dimmed().to_string()
        }
    }
}
