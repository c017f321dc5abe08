//! Section fetch from the MediaWiki parse API.
//!
//! One blocking GET per run. The response shape is
//! `{ "parse": { "sections": [ { "line": ..., "anchor": ... }, ... ] } }`;
//! a missing `parse` or `sections` key yields an empty list. Transport and
//! decode failures propagate to the caller, there is no retry.

use serde::Deserialize;

use crate::config::UpdateConfig;
use crate::error::{EfhError, Result};

/// One section heading as returned by the API.
///
/// Fields default to empty when absent; validation happens in the builder.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    /// Display title of the heading
    #[serde(default)]
    pub line: String,
    /// Stable fragment identifier for linking to the heading
    #[serde(default)]
    pub anchor: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    parse: Option<ParseBody>,
}

#[derive(Debug, Deserialize)]
struct ParseBody {
    #[serde(default)]
    sections: Vec<Section>,
}

fn api_url(config: &UpdateConfig) -> String {
    format!(
        "{}?action=parse&page={}&prop=sections&format=json&origin=*",
        config.api_endpoint, config.page
    )
}

/// Fetch the section list for the configured page.
pub fn fetch_sections(config: &UpdateConfig) -> Result<Vec<Section>> {
    let url = api_url(config);
    tracing::debug!(%url, "fetching section list");

    let response = ureq::get(&url)
        .set("User-Agent", &config.user_agent)
        .call()
        .map_err(|e| EfhError::Http {
            url: url.clone(),
            source: Box::new(e),
        })?;

    let body = response.into_string()?;
    parse_sections(&body)
}

/// Decode the API body into section records.
pub fn parse_sections(body: &str) -> Result<Vec<Section>> {
    let response: ApiResponse = serde_json::from_str(body)?;
    let sections = response.parse.map(|p| p.sections).unwrap_or_default();
    tracing::debug!(count = sections.len(), "decoded sections");
    Ok(sections)
}
