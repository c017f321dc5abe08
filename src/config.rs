//! Tool configuration and defaults.
//!
//! Every knob the tool uses (wiki page, scrub denylist, packaging include
//! and exclude sets) lives here instead of being scattered as module
//! constants, so a checked-in `.efh.config.json` can override any of it.
//! Absent fields fall back to the defaults below.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn is_default_root(p: &std::path::Path) -> bool {
    p == std::path::Path::new(".")
}

fn default_api_endpoint() -> String {
    "https://en.wikipedia.org/w/api.php".to_string()
}

fn default_page() -> String {
    "List_of_people_named_in_the_Epstein_files".to_string()
}

fn default_user_agent() -> String {
    "EpsteinFilesHighlighter/1.0".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("content/names.js")
}

fn default_skip_sections() -> Vec<String> {
    [
        "References",
        "External links",
        "Contents",
        "See also",
        "Notes",
        "Background",
        "Releases",
        "Redactions",
        "Litigation",
        "Names",
        "Name",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_include() -> Vec<String> {
    ["manifest.json", "background", "content", "icons", "popup"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_exclude_suffixes() -> Vec<String> {
    [".DS_Store", ".zip", ".new"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_exclude_dirs() -> Vec<String> {
    [".git", ".claude", "scripts"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_archive_name() -> String {
    "epstein-files-highlighter.zip".to_string()
}

/// Top-level configuration for both tool steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Extension project root; all other paths are relative to this.
    #[serde(default = "default_root", skip_serializing_if = "is_default_root")]
    pub root: PathBuf,

    /// Name list refresh settings
    #[serde(default)]
    pub update: UpdateConfig,

    /// Store zip settings
    #[serde(default)]
    pub package: PackageConfig,
}

/// Settings for the `content/names.js` refresh step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateConfig {
    /// MediaWiki API endpoint
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,

    /// Wiki page whose section headings are the name source
    #[serde(default = "default_page")]
    pub page: String,

    /// User-Agent sent with the API request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Generated file path, relative to the project root
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Section headings that are structure, not names
    #[serde(default = "default_skip_sections")]
    pub skip_sections: Vec<String>,
}

/// Settings for the store zip step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Top-level files and directories that go into the zip
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// File name suffixes excluded from the zip
    #[serde(default = "default_exclude_suffixes")]
    pub exclude_suffixes: Vec<String>,

    /// Directory names pruned anywhere in the tree
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Zip file name, created in the project root
    #[serde(default = "default_archive_name")]
    pub archive_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            update: UpdateConfig::default(),
            package: PackageConfig::default(),
        }
    }
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            api_endpoint: default_api_endpoint(),
            page: default_page(),
            user_agent: default_user_agent(),
            output: default_output(),
            skip_sections: default_skip_sections(),
        }
    }
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            include: default_include(),
            exclude_suffixes: default_exclude_suffixes(),
            exclude_dirs: default_exclude_dirs(),
            archive_name: default_archive_name(),
        }
    }
}

impl Config {
    /// Load config from a JSON file.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
