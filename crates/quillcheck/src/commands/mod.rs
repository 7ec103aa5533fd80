//! Subcommand implementations, plus the input plumbing they share.

use anyhow::Context;
use camino::Utf8Path;

pub mod check;
pub mod fix;
pub mod info;
pub mod schema;

/// Read an input file, enforcing the configured size cap.
///
/// The cap is checked against metadata first, so an oversized file never
/// gets pulled into memory.
pub fn load_input(path: &Utf8Path, limit: Option<usize>) -> anyhow::Result<String> {
    let std_path = path.as_std_path();

    let size = std_path
        .metadata()
        .with_context(|| format!("failed to read {path}"))?
        .len() as usize;
    if let Some(max) = limit
        && size > max
    {
        anyhow::bail!("input too large: {path} is {size} bytes (limit {max})");
    }

    std::fs::read_to_string(std_path).with_context(|| format!("failed to read {path}"))
}
