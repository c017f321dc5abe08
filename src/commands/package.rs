//! Store zip creation for the extension's distributable assets.

use anyhow::{Context, Result};
use console::style;

use crate::archive::{collect_files, write_archive};
use crate::config::Config;
use crate::error::EfhError;

/// Execute the packaging step.
pub fn execute_package(config: &Config) -> Result<bool> {
    let staged = match collect_files(&config.root, &config.package) {
        Ok(staged) => staged,
        Err(EfhError::MissingPath(path)) => {
            eprintln!("{} Missing for zip: {}", style("✗").red(), path.display());
            return Ok(false);
        }
        Err(e) => return Err(e).context("failed to collect files for the zip"),
    };

    let zip_path = config.root.join(&config.package.archive_name);
    println!("{} Creating {}", style("→").blue(), zip_path.display());
    let written = write_archive(&staged, &zip_path, &config.package)
        .with_context(|| format!("failed to write {}", zip_path.display()))?;

    println!(
        "{} Packaged {} files into {}",
        style("✓").green(),
        written,
        config.package.archive_name
    );
    Ok(true)
}
