//! End-to-end list update tests: API body → scrubbed list → generated file.
//!
//! Exercises the full pipeline minus the network call.

use pretty_assertions::assert_eq;

use efh::{build_names, parse_sections, render_names_js, write_names_js, UpdateConfig};

const API_BODY: &str = r#"{
    "parse": {
        "title": "List of people named in the Epstein files",
        "pageid": 123,
        "sections": [
            { "toclevel": 1, "line": "Background", "anchor": "Background", "index": "1" },
            { "toclevel": 1, "line": "Names", "anchor": "Names", "index": "2" },
            { "toclevel": 2, "line": "A", "anchor": "A", "index": "3" },
            { "toclevel": 3, "line": "Prince Andrew", "anchor": "Prince_Andrew", "index": "4" },
            { "toclevel": 3, "line": "Smith and Jones", "anchor": "Smith_and_Jones", "index": "5" },
            { "toclevel": 2, "line": "A-B", "anchor": "A-B", "index": "6" },
            { "toclevel": 3, "line": "Bill Clinton", "anchor": "Bill_Clinton", "index": "7" },
            { "toclevel": 1, "line": "References", "anchor": "References", "index": "8" },
            { "toclevel": 1, "line": "See also", "anchor": "See_also", "index": "9" }
        ]
    }
}"#;

mod pipeline {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scrubs_splits_and_sorts() {
        let sections = parse_sections(API_BODY).unwrap();
        let names = build_names(&sections, &UpdateConfig::default());

        let pairs: Vec<(&str, &str)> = names
            .iter()
            .map(|e| (e.name.as_str(), e.anchor.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Prince Andrew", "Prince_Andrew"),
                ("Bill Clinton", "Bill_Clinton"),
                ("Smith", "Smith_and_Jones"),
                ("Jones", "Smith_and_Jones"),
            ]
        );
    }

    #[test]
    fn ordering_is_non_increasing_in_length() {
        let sections = parse_sections(API_BODY).unwrap();
        let names = build_names(&sections, &UpdateConfig::default());
        for pair in names.windows(2) {
            assert!(pair[0].name.chars().count() >= pair[1].name.chars().count());
        }
    }

    #[test]
    fn generated_file_matches_the_list() {
        let sections = parse_sections(API_BODY).unwrap();
        let names = build_names(&sections, &UpdateConfig::default());

        let dir = tempfile::tempdir().unwrap();
        let out_path = dir.path().join("names.js");
        write_names_js(&names, &out_path).unwrap();

        let text = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(text, render_names_js(&names));
        assert!(text.contains("const HARDCODED_NAMES = ["));
        assert!(text.contains(r#"  { name: "Prince Andrew", anchor: "Prince_Andrew" },"#));
        assert!(text.contains(r#"  { name: "Jones", anchor: "Smith_and_Jones" },"#));
        assert!(!text.contains("References"));
        assert!(text.trim_end().ends_with("];"));
    }

    #[test]
    fn custom_denylist_is_honored() {
        let sections = parse_sections(API_BODY).unwrap();
        let mut config = UpdateConfig::default();
        config.skip_sections.push("Bill Clinton".to_string());
        let names = build_names(&sections, &config);
        assert!(names.iter().all(|e| e.name != "Bill Clinton"));
    }
}
