/// Where to scroll for an in-page anchor so the target is not hidden under the
/// sticky header. `target_top` is the target's viewport-relative top, `None`
/// when `href` names no element on the page.
///
/// Returns `None` when the click should keep its default behaviour.
pub fn scroll_target(
    href: &str,
    target_top: Option<f64>,
    page_y_offset: f64,
    header_height: f64,
) -> Option<f64> {
    if href.is_empty() || href == "#" || !href.starts_with('#') {
        return None;
    }
    target_top.map(|top| top + page_y_offset - header_height)
}
