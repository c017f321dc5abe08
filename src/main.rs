#![forbid(unsafe_code)]
//! EFH Command Line Interface

use std::path::Path;

use clap::Parser;
use console::style;

use efh::commands::{execute_package, execute_update};
use efh::Config;

#[derive(Parser)]
#[command(name = "efh")]
#[command(about = "Build tooling for the Epstein Files Highlighter extension")]
#[command(version)]
struct Cli {
    /// Only update content/names.js from Wikipedia
    #[arg(long)]
    list: bool,

    /// Only create the store zip in the project root
    #[arg(long)]
    zip: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load config if a project override exists
    let config_path = Path::new(".efh.config.json");
    let config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        Config::default()
    };

    let run_all = !cli.list && !cli.zip;
    let do_list = cli.list || run_all;
    let do_zip = cli.zip || run_all;

    let mut ok = true;
    if do_list {
        ok &= execute_update(&config)?;
    }
    if do_zip {
        ok &= execute_package(&config)?;
    }

    if !ok {
        std::process::exit(1);
    }
    println!("{} Done.", style("✓").green());
    Ok(())
}
