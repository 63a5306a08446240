//! tests/record_tests.rs
//! Normalization of source entries into the fixed export shape

mod common;
use common::MapEntry;

use selection_export::ExportRecord;

#[test]
fn absent_fields_normalize_to_empty_strings() {
    let entry = MapEntry::new(&[]);

    let record = ExportRecord::from_source(&entry);

    assert_eq!(record.title, "");
    assert_eq!(record.username, "");
    assert_eq!(record.password, "");
    assert_eq!(record.url, "");
    assert_eq!(record.notes, "");
}

#[test]
fn present_fields_pass_through_verbatim() {
    let entry = MapEntry::new(&[
        ("Title", "example.com"),
        ("UserName", "alice"),
        ("Password", "correct horse battery staple"),
        ("Url", "https://example.com/login"),
        ("Notes", "first line\nsecond line"),
    ]);

    let record = ExportRecord::from_source(&entry);

    assert_eq!(record.title, "example.com");
    assert_eq!(record.username, "alice");
    assert_eq!(record.password, "correct horse battery staple");
    assert_eq!(record.url, "https://example.com/login");
    // Embedded newlines survive normalization untouched
    assert_eq!(record.notes, "first line\nsecond line");
}

#[test]
fn partially_filled_entries_get_empty_strings_for_the_rest() {
    let entry = MapEntry::new(&[("Title", "router admin"), ("Password", "hunter2")]);

    let record = ExportRecord::from_source(&entry);

    assert_eq!(record.title, "router admin");
    assert_eq!(record.username, "");
    assert_eq!(record.password, "hunter2");
    assert_eq!(record.url, "");
    assert_eq!(record.notes, "");
}

#[test]
fn username_lookup_uses_the_host_field_name() {
    // Host stores spell the lookup key "UserName"; "Username" is only the
    // output label and must not match
    let entry = MapEntry::new(&[("UserName", "bob"), ("Username", "impostor")]);

    let record = ExportRecord::from_source(&entry);

    assert_eq!(record.username, "bob");
}
