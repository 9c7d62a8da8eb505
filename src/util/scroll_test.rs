use super::*;

#[test]
fn anchor_target_strips_hash() {
    assert_eq!(anchor_target("#pricing"), Some("pricing"));
}

#[test]
fn anchor_target_rejects_bare_hash_and_external_links() {
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("/tools/rotate-pdf.html"), None);
    assert_eq!(anchor_target(""), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_helpers_are_noops_outside_browser() {
    scroll_to_id("error-container", ScrollBlock::Center);
    install_anchor_smooth_scroll();
}
