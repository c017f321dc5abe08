//! Name list construction from raw section records.
//!
//! Applies the same scrub rules as the extension's service worker: drop
//! blank records, single-letter index headers, structural section titles,
//! and A-B style index ranges; split "X and Y" headings into separate
//! entries sharing one anchor; sort longest-first. The sort order is a
//! contract with the matcher, which tries longer names before shorter ones.

use crate::config::UpdateConfig;
use crate::wiki::Section;

/// A cleaned (name, anchor) pair ready for embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub name: String,
    pub anchor: String,
}

/// True for 3-character alphabetic index ranges like "A-B".
fn is_letter_range(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.len() == 3 && chars[1] == '-' && chars[0].is_alphabetic() && chars[2].is_alphabetic()
}

/// Split "X and Y" into separate entries, same anchor for both.
fn expand_and_names(entries: Vec<NameEntry>) -> Vec<NameEntry> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.name.contains(" and ") {
            for part in entry.name.split(" and ") {
                let part = part.trim();
                if !part.is_empty() {
                    out.push(NameEntry {
                        name: part.to_string(),
                        anchor: entry.anchor.clone(),
                    });
                }
            }
        } else {
            out.push(entry);
        }
    }
    out
}

/// Build the final name list from raw sections.
pub fn build_names(sections: &[Section], config: &UpdateConfig) -> Vec<NameEntry> {
    let mut entries = Vec::new();
    for section in sections {
        let name = section.line.trim();
        let anchor = section.anchor.trim();
        if name.is_empty() || anchor.is_empty() {
            continue;
        }
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_alphabetic() {
                continue;
            }
        }
        if config.skip_sections.iter().any(|s| s.as_str() == name) || is_letter_range(name) {
            continue;
        }
        entries.push(NameEntry {
            name: name.to_string(),
            anchor: anchor.to_string(),
        });
    }

    let before = entries.len();
    let mut entries = expand_and_names(entries);
    tracing::debug!(kept = before, expanded = entries.len(), "scrubbed sections");

    // Longest first; stable, so equal lengths keep source order.
    entries.sort_by(|a, b| b.name.chars().count().cmp(&a.name.chars().count()));
    entries
}
