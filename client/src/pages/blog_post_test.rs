use super::*;

#[test]
fn load_for_current_slug_publishes() {
    assert!(is_current_load("introducing-fillflow", "introducing-fillflow"));
}

#[test]
fn load_for_previous_slug_is_dropped() {
    assert!(!is_current_load("introducing-fillflow", "reading-form-fields-reliably"));
    assert!(!is_current_load("introducing-fillflow", ""));
}
