use super::*;

#[test]
fn normalize_link_trims_and_drops_blank() {
    assert_eq!(normalize_link(Some(" https://a.test ")), Some("https://a.test"));
    assert_eq!(normalize_link(Some("   ")), None);
    assert_eq!(normalize_link(Some("")), None);
    assert_eq!(normalize_link(None), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn open_external_is_noop_but_callable() {
    open_external("https://a.test");
}
