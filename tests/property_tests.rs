//! Property-based tests for the load/save guarantees.
//!
//! Generated documents are either built through the public API or written
//! as INI text, then saved and loaded back under the same options.

use inidoc::{from_str_with_options, CaseMode, Ini, IniOptions, SetOutcome};
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_.-]{0,11}"
}

fn value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_ .,:/=;#-]{0,20}".prop_map(|v| v.trim().to_string())
}

fn sections() -> impl Strategy<Value = Vec<(String, Vec<(String, String)>)>> {
    prop::collection::vec(
        (name(), prop::collection::vec((name(), value()), 0..6)),
        0..5,
    )
}

fn section_name() -> impl Strategy<Value = String> {
    prop_oneof![1 => Just(String::new()), 4 => name()]
}

/// INI text with optional comments, an optional unnamed section and
/// repeated keys.
fn document_text() -> impl Strategy<Value = String> {
    let entry = (
        prop::option::of("[;#][ A-Za-z0-9]{0,10}"),
        "[A-Za-z_][A-Za-z0-9_]{0,3}",
        value(),
    );
    prop::collection::vec(
        (
            section_name(),
            prop::option::of("; [A-Za-z ]{0,10}"),
            prop::collection::vec(entry, 0..6),
        ),
        0..5,
    )
    .prop_map(|sections| {
        let mut text = String::new();
        for (section, comment, entries) in sections {
            if let Some(comment) = comment {
                text.push_str(&comment);
                text.push('\n');
            }
            text.push_str(&format!("[{section}]\n"));
            for (comment, key, value) in entries {
                if let Some(comment) = comment {
                    text.push_str(&comment);
                    text.push('\n');
                }
                text.push_str(&format!("{key} = {value}\n"));
            }
        }
        text
    })
}

fn build(options: &IniOptions, data: &[(String, Vec<(String, String)>)]) -> Ini {
    let mut ini = Ini::with_options(options.clone());
    for (section, entries) in data {
        ini.add_section(section);
        for (key, value) in entries {
            ini.set(section, key, value);
        }
    }
    ini
}

fn roundtrips(options: IniOptions, data: &[(String, Vec<(String, String)>)]) -> bool {
    let ini = build(&options, data);
    let saved = ini.save();
    match from_str_with_options(&saved, options) {
        Ok(reloaded) => {
            let same = reloaded.save() == saved;
            if !same {
                eprintln!("Saved was: {saved:?}");
            }
            same
        }
        Err(e) => {
            eprintln!("Load failed: {e}");
            false
        }
    }
}

proptest! {
    #[test]
    fn prop_roundtrip_default(data in sections()) {
        prop_assert!(roundtrips(IniOptions::new(), &data));
    }

    #[test]
    fn prop_roundtrip_case_sensitive(data in sections()) {
        prop_assert!(roundtrips(IniOptions::new().with_case_mode(CaseMode::Sensitive), &data));
    }

    #[test]
    fn prop_roundtrip_multikey(data in sections()) {
        prop_assert!(roundtrips(IniOptions::new().with_multikey(true), &data));
    }

    #[test]
    fn prop_roundtrip_allow_key_only(data in sections()) {
        prop_assert!(roundtrips(IniOptions::new().with_allow_key_only(true), &data));
    }

    #[test]
    fn prop_load_save_load_keeps_values(text in document_text(), multikey in any::<bool>()) {
        let options = IniOptions::new().with_multikey(multikey);
        let first = from_str_with_options(&text, options.clone()).unwrap();
        let second = from_str_with_options(&first.save(), options).unwrap();

        for section in first.sections() {
            let original = first.section(section).unwrap();
            if section.is_empty() && original.is_empty() && original.comment().is_none() {
                continue;
            }
            let reloaded = second.section(section);
            prop_assert!(reloaded.is_some(), "section {:?} lost", section);
            prop_assert_eq!(original.comment(), reloaded.unwrap().comment());
            prop_assert_eq!(first.keys(section), second.keys(section));
            for key in first.keys(section) {
                prop_assert_eq!(first.get_all(section, key), second.get_all(section, key));
            }
        }
    }

    #[test]
    fn prop_roundtrip_multiline_values(
        lines in prop::collection::vec("[ A-Za-z0-9<=;#\\[\\]]{0,12}", 1..5)
    ) {
        let options = IniOptions::new().with_multiline(true);
        let body = lines.join("\n");
        let mut ini = Ini::with_options(options.clone());
        ini.set("s", "k", &body);

        let reloaded = from_str_with_options(&ini.save(), options).unwrap();
        prop_assert_eq!(reloaded.get("s", "k"), Some(body.as_str()));
    }

    #[test]
    fn prop_delete_is_idempotent(data in sections()) {
        let mut ini = build(&IniOptions::new(), &data);
        for (section, entries) in &data {
            for (key, _) in entries {
                ini.delete(section, Some(key), false);
                prop_assert!(!ini.delete(section, Some(key), false));
                prop_assert!(!ini.key_exists(section, key));
            }
        }
    }

    #[test]
    fn prop_multikey_keeps_order(values in prop::collection::vec(value(), 1..8)) {
        let mut ini = Ini::with_options(IniOptions::new().with_multikey(true));
        for value in &values {
            prop_assert_eq!(ini.set("s", "k", value), SetOutcome::Inserted);
        }
        let expected: Vec<&str> = values.iter().map(String::as_str).collect();
        prop_assert_eq!(ini.get_all("s", "k"), expected);
        prop_assert_eq!(ini.get("s", "k"), Some(values[0].as_str()));
    }

    #[test]
    fn prop_case_fold_equivalence(key in "[a-z]{1,8}") {
        let mut folded = Ini::new();
        folded.set("s", &key, "lower");
        prop_assert_eq!(folded.set("S", &key.to_uppercase(), "upper"), SetOutcome::Updated);
        prop_assert_eq!(folded.section_size("s"), 1);

        let mut exact = Ini::with_options(IniOptions::new().with_case_mode(CaseMode::Sensitive));
        exact.set("s", &key, "lower");
        prop_assert_eq!(exact.set("s", &key.to_uppercase(), "upper"), SetOutcome::Inserted);
        prop_assert_eq!(exact.get("s", &key), Some("lower"));
    }
}
