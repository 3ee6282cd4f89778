//! Public API behaviour in headless mode.

use std::collections::BTreeSet;

use chibiui::{ChibiUi, UiError, Value};
use pretty_assertions::assert_eq;

fn person_form() -> ChibiUi {
    let mut ui = ChibiUi::create("Test", true).unwrap();
    ui.add_textbox("Title", "Personal Data").unwrap();
    ui.add_textbox("Person/Name", "John Doe").unwrap();
    ui.add_selector("Person/Gender", &["Male", "Female", "Other"], "Male").unwrap();
    ui.add_slider("Person/Age", 0.0, 100.0, 1.0, 30.0).unwrap();
    ui.add_checkbox("Person/Add File", true).unwrap();
    ui.add_browse_file("Person/Select File").unwrap();
    ui.add_button("Person/Submit", false).unwrap();
    ui.add_textbox("Option/Country", "Japan").unwrap();
    ui
}

#[test]
fn get_after_add_returns_initial_value() {
    let ui = person_form();
    assert_eq!(ui.get("Title").unwrap(), Value::from("Personal Data"));
    assert_eq!(ui.get("Person/Name").unwrap(), Value::from("John Doe"));
    assert_eq!(ui.get("Person/Gender").unwrap(), Value::from("Male"));
    assert_eq!(ui.get("Person/Age").unwrap(), Value::Number(30.0));
    assert_eq!(ui.get("Person/Add File").unwrap(), Value::Bool(true));
    assert_eq!(ui.get("Person/Select File").unwrap(), Value::from(""));
    assert_eq!(ui.get("Person/Submit").unwrap(), Value::Bool(false));
    assert_eq!(ui.get("Option/Country").unwrap(), Value::from("Japan"));
}

#[test]
fn set_then_get_returns_new_value() {
    let mut ui = person_form();
    ui.set("Person/Name", "Michel Lee").unwrap();
    ui.set("Person/Age", 41.5).unwrap();
    ui.set("Person/Submit", true).unwrap();
    ui.set("Person/Select File", "/tmp/data.csv").unwrap();

    assert_eq!(ui.get("Person/Name").unwrap(), Value::from("Michel Lee"));
    assert_eq!(ui.get("Person/Age").unwrap(), Value::Number(41.5));
    assert_eq!(ui.get("Person/Submit").unwrap(), Value::Bool(true));
    assert_eq!(ui.get("Person/Select File").unwrap(), Value::from("/tmp/data.csv"));
}

#[test]
fn path_spellings_share_one_key() {
    let mut ui = person_form();
    ui.set("/Person/Name/", "A").unwrap();
    assert_eq!(ui.get("Person/Name").unwrap(), Value::from("A"));
    ui.set("//Person//Name", "B").unwrap();
    assert_eq!(ui.get("/Person/Name").unwrap(), Value::from("B"));
    assert!(matches!(ui.get("person/name"), Err(UiError::NotFound(_))));
}

#[test]
fn unknown_paths_fail_predictably() {
    let mut ui = person_form();
    assert!(matches!(ui.get("Person/Email"), Err(UiError::NotFound(p)) if p == "/Person/Email"));
    assert!(matches!(ui.set("Nope", "x"), Err(UiError::NotFound(p)) if p == "/Nope"));
    assert!(matches!(ui.get(""), Err(UiError::NotFound(p)) if p == "/"));
}

#[test]
fn duplicate_registration_fails_and_keeps_original() {
    let mut ui = person_form();
    let err = ui.add_checkbox("Person/Name/", false).unwrap_err();
    assert!(matches!(err, UiError::DuplicatePath(ref p) if p == "/Person/Name"));
    assert_eq!(ui.get("Person/Name").unwrap(), Value::from("John Doe"));
    assert_eq!(ui.paths().len(), 8);
}

#[test]
fn empty_path_is_rejected() {
    let mut ui = ChibiUi::create("Test", true).unwrap();
    assert!(matches!(ui.add_textbox("///", "x"), Err(UiError::EmptyPath)));
    assert!(ui.paths().is_empty());
}

#[test]
fn incompatible_set_is_rejected() {
    let mut ui = person_form();
    assert!(matches!(ui.set("Person/Add File", "yes"), Err(UiError::TypeMismatch { .. })));
    assert!(matches!(ui.set("Person/Age", "old"), Err(UiError::TypeMismatch { .. })));
    ui.set("Person/Age", "42").unwrap();
    assert_eq!(ui.get("Person/Age").unwrap(), Value::Number(42.0));
    ui.set("Person/Name", 7).unwrap();
    assert_eq!(ui.get("Person/Name").unwrap(), Value::from("7"));
}

#[test]
fn nav_len_counts_distinct_prefixes() {
    let mut ui = ChibiUi::create("Test", true).unwrap();
    let paths = [
        "Top",
        "A/x",
        "A/y",
        "A/B/z",
        "A/B/C/w",
        "D/E/v",
        "/A//B/u/",
    ];
    for p in paths {
        ui.add_checkbox(p, false).unwrap();
    }

    let mut prefixes = BTreeSet::new();
    for p in paths {
        let segs: Vec<&str> = p.split('/').filter(|s| !s.is_empty()).collect();
        for end in 1..segs.len() {
            prefixes.insert(segs[..end].join("/"));
        }
    }
    // A, A/B, A/B/C, D, D/E
    assert_eq!(prefixes.len(), 5);
    assert_eq!(ui.nav_len(), prefixes.len());
}

#[test]
fn headless_matches_a_fresh_registry_after_many_writes() {
    let mut ui = person_form();
    for i in 0..50 {
        ui.set("Person/Age", f64::from(i)).unwrap();
        assert_eq!(ui.get("Person/Age").unwrap(), Value::Number(f64::from(i)));
    }
    assert!(ui.is_headless());
    assert!(ui.alive());
}

#[test]
fn closed_ui_refuses_access() {
    let mut ui = person_form();
    ui.close();
    assert!(!ui.alive());
    assert!(matches!(ui.get("Title"), Err(UiError::Closed)));
    assert!(matches!(ui.set("Title", "x"), Err(UiError::Closed)));
}

#[test]
fn shown_page_survives_unrelated_registration() {
    let mut ui = ChibiUi::create("Test", true).unwrap();
    ui.add_textbox("A/a", "").unwrap();
    ui.add_textbox("B/b", "").unwrap();
    ui.navigate_to("B").unwrap();
    assert_eq!(ui.current_path(), "/B");

    ui.add_textbox("A/X/c", "").unwrap();
    ui.add_checkbox("A/X/Y/d", false).unwrap();
    ui.add_button("Z/go", false).unwrap();
    assert_eq!(ui.current_path(), "/B");
}

#[test]
fn tree_shape_depends_only_on_registered_paths() {
    let paths = ["A/B/x", "Top", "D/y", "A/z", "A/B/C/w"];
    let mut forward = ChibiUi::create("Test", true).unwrap();
    let mut backward = ChibiUi::create("Test", true).unwrap();
    for p in paths {
        forward.add_checkbox(p, false).unwrap();
    }
    for p in paths.iter().rev() {
        backward.add_checkbox(p, false).unwrap();
    }

    assert_eq!(forward.nav_len(), backward.nav_len());
    assert_eq!(forward.paths(), backward.paths());
    for folder in ["A", "A/B", "A/B/C", "D"] {
        forward.navigate_to(folder).unwrap();
        backward.navigate_to(folder).unwrap();
        assert_eq!(forward.current_path(), backward.current_path());
    }
    assert!(matches!(forward.navigate_to("Top"), Err(UiError::NotFound(_))));
}
