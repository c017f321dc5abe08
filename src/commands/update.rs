//! Name list refresh: fetch sections, scrub, overwrite `content/names.js`.

use anyhow::{Context, Result};
use console::style;

use crate::config::Config;
use crate::generate::write_names_js;
use crate::names::build_names;
use crate::wiki::fetch_sections;

/// Execute the list-update step.
pub fn execute_update(config: &Config) -> Result<bool> {
    let out_path = config.root.join(&config.update.output);
    let out_dir = out_path.parent().unwrap_or_else(|| config.root.as_path());
    if !out_dir.is_dir() {
        eprintln!(
            "{} Expected {} under project root: {}",
            style("✗").red(),
            out_dir.display(),
            config.root.display()
        );
        return Ok(false);
    }

    println!("{} Fetching from Wikipedia...", style("→").blue());
    let sections =
        fetch_sections(&config.update).context("failed to fetch the section list")?;
    let names = build_names(&sections, &config.update);

    println!(
        "{} Writing {} names to {}",
        style("→").blue(),
        names.len(),
        out_path.display()
    );
    write_names_js(&names, &out_path)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("{} Name list updated", style("✓").green());
    Ok(true)
}
