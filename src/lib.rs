#![forbid(unsafe_code)]

//! # EFH Tools
//!
//! Build tooling for the Epstein Files Highlighter extension: refreshes the
//! generated `content/names.js` name list from Wikipedia's section index
//! and packages the extension's static assets into the store zip.
//!
//! ## Example
//!
//! ```rust,no_run
//! use efh::{build_names, fetch_sections, write_names_js, Config};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let sections = fetch_sections(&config.update)?;
//!     let names = build_names(&sections, &config.update);
//!     write_names_js(&names, config.root.join(&config.update.output))?;
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod commands;
pub mod config;
pub mod error;
pub mod generate;
pub mod names;
pub mod wiki;

// Re-exports
pub use archive::{collect_files, create_archive, write_archive, StagedFile};
pub use config::{Config, PackageConfig, UpdateConfig};
pub use error::{EfhError, Result};
pub use generate::{render_names_js, write_names_js};
pub use names::{build_names, NameEntry};
pub use wiki::{fetch_sections, parse_sections, Section};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
