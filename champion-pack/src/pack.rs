//! The packing pipeline: collect, filter, render, write.

use camino::Utf8PathBuf;
use tracing::info;

use crate::collect::collect_champions;
use crate::config::PackConfig;
use crate::error::Result;
use crate::output::write_module;
use crate::render::render_module;

/// Outcome of a successful packing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSummary {
    /// Path of the module that was written.
    pub output_path: Utf8PathBuf,
    /// Number of champions in the module.
    pub champion_count: usize,
    /// Champions dropped by the exclusion pattern, in ascending order.
    pub excluded: Vec<String>,
}

/// Runs a complete packing pass described by `config`.
///
/// Any failure aborts the run. The output file is only opened after the
/// champions have been collected and rendered.
///
/// # Errors
///
/// Propagates collection, rendering, and write failures as
/// [`crate::error::PackError`].
pub fn generate(config: &PackConfig) -> Result<PackSummary> {
    let mut champions = collect_champions(&config.root_dir, &config.suffix)?;
    let excluded = config
        .exclude_pattern
        .as_deref()
        .map(|pattern| champions.exclude_containing(pattern))
        .unwrap_or_default();

    let module = render_module(&config.export_name, &champions, config.escape)?;
    let output_path = write_module(&config.output_path, &module)?;

    info!(
        path = %output_path,
        champions = champions.len(),
        excluded = excluded.len(),
        "wrote champion module"
    );
    Ok(PackSummary {
        output_path,
        champion_count: champions.len(),
        excluded,
    })
}
