//! One calculation, from a loaded config to a rendered report.

use crate::config::Config;
use anyhow::{Context, Result};
use palletcalc_core::calculate_cycle_with;
use palletcalc_report::{OutputFormat, Report, render};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Apply `overrides`, calculate the cycle and render the report.
pub fn render_report<S: AsRef<str>>(
    mut config: Config,
    overrides: &[S],
    format: OutputFormat,
) -> Result<String> {
    config.apply_overrides(overrides)?;
    config.validate()?;

    let input = config.parameters;
    let result = calculate_cycle_with(&input, &config.calculation.options());
    let report = Report::new(&input, &result);

    for advisory in &report.advisories {
        tracing::warn!("{advisory}");
    }

    render(&report, format).context("failed to render report")
}

/// `path`, with the format's extension added when it has none.
pub fn output_path(path: &Path, format: OutputFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}

/// Write a rendered report, creating missing parent directories.
///
/// Returns the path actually written.
pub fn write_report(path: &Path, format: OutputFormat, rendered: &str) -> Result<PathBuf> {
    let path = output_path(path, format);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }
    fs::write(&path, rendered)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(path)
}
