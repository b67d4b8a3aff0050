// Accessibility helpers

/// Id of the polite live region cart changes are announced in.
pub const STATUS_REGION_ID: &str = "cart-status";

/// Get CSS for visible focus indicators and screen reader utilities
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #00D9C0;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Updates the text content of the status region if it is mounted.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID)) {
        node.set_text_content(Some(msg));
    }
}
