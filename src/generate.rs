//! Emission of the generated `content/names.js` fragment.
//!
//! The service worker and content script read `HARDCODED_NAMES` as-is, so
//! the constant name, the one-entry-per-line shape, and the longest-first
//! ordering of the input all carry through unchanged. The file is
//! overwritten in place on every run.

use std::path::Path;

use crate::error::Result;
use crate::names::NameEntry;

/// Escape a string for embedding in a double-quoted JS literal.
fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the full names.js source text.
pub fn render_names_js(entries: &[NameEntry]) -> String {
    let mut out = String::from(
        "// content/names.js\n\
         // Hardcoded fallback list generated from Wikipedia.\n\
         // The background service worker refreshes this daily via chrome.storage.local.\n\
         // Sorted longest-first so the regex engine tries longer names before shorter ones.\n\
         // Run `efh --list` to refresh this file.\n\
         \n\
         const HARDCODED_NAMES = [\n",
    );
    for entry in entries {
        out.push_str(&format!(
            "  {{ name: \"{}\", anchor: \"{}\" }},\n",
            js_escape(&entry.name),
            js_escape(&entry.anchor)
        ));
    }
    out.push_str("];\n");
    out
}

/// Write the rendered fragment, replacing any previous file.
pub fn write_names_js<P: AsRef<Path>>(entries: &[NameEntry], path: P) -> Result<()> {
    std::fs::write(path, render_names_js(entries))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(name: &str, anchor: &str) -> NameEntry {
        NameEntry {
            name: name.to_string(),
            anchor: anchor.to_string(),
        }
    }

    /// Undo js_escape the way a JS engine reads the literal.
    fn js_unescape(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn renders_one_line_per_entry() {
        let text = render_names_js(&[entry("Smith", "S"), entry("Jones", "J")]);
        assert!(text.contains("const HARDCODED_NAMES = [\n"));
        assert!(text.contains("  { name: \"Smith\", anchor: \"S\" },\n"));
        assert!(text.contains("  { name: \"Jones\", anchor: \"J\" },\n"));
        assert!(text.ends_with("];\n"));
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        let original = r#"O"Back\slash"#;
        let text = render_names_js(&[entry(original, "a")]);
        assert!(text.contains(r#"{ name: "O\"Back\\slash", anchor: "a" },"#));

        // The emitted literal must read back as the exact original characters.
        let line = text
            .lines()
            .find(|l| l.trim_start().starts_with("{ name:"))
            .unwrap();
        let literal = line
            .split("name: \"")
            .nth(1)
            .unwrap()
            .split("\", anchor")
            .next()
            .unwrap();
        assert_eq!(js_unescape(literal), original);
    }

    #[test]
    fn empty_list_still_declares_the_constant() {
        let text = render_names_js(&[]);
        assert!(text.contains("const HARDCODED_NAMES = [\n];\n"));
    }

    #[test]
    fn overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.js");
        write_names_js(&[entry("First", "1")], &path).unwrap();
        write_names_js(&[entry("Second", "2")], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Second"));
        assert!(!text.contains("First"));
    }
}
