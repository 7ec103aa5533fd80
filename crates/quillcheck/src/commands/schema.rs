//! Schema command — emits the JSON Schema for analysis reports.

use clap::Args;
use schemars::schema_for;
use tracing::{debug, instrument};

use quillcheck_core::AnalysisReport;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    // No subcommand-specific arguments; output is always JSON
}

/// Print the JSON Schema describing [`AnalysisReport`].
///
/// Consumers that read `check --json` output can validate against this
/// schema instead of tracking the report shape by hand.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    debug!("executing schema command");

    let schema = schema_for!(AnalysisReport);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
