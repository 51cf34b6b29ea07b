#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn default_theme_is_dark() {
    assert!(DEFAULT_DARK);
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn toggle_twice_is_identity() {
    assert!(toggle(toggle(true)));
    assert!(!toggle(toggle(false)));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
