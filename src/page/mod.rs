//! Page assembly and the one-shot equivalents of the site's ambient effects.
//! Every effect no-ops when its mount element is absent from the page.

pub mod counters;
pub mod nav;
pub mod partials;

pub use nav::{highlight_active, page_name};
pub use partials::{inject_partials, load_partial};

use regex::Regex;
use time::OffsetDateTime;

/// Scroll offset above which the header gets its scrolled presentation class.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Calendar year stamped into the footer.
pub fn footer_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

/// Replace the inner content of the element carrying `id`. Returns the page
/// unchanged when no such element exists. Mount elements are expected to be
/// empty or flat; content is matched up to the first closing tag of the same
/// name.
pub fn fill_element(html: &str, id: &str, content: &str) -> String {
    let open = match Regex::new(&format!(
        r#"<(\w+)[^>]*\bid=["']{}["'][^>]*>"#,
        regex::escape(id)
    )) {
        Ok(re) => re,
        Err(_) => return html.to_string(),
    };

    let caps = match open.captures(html) {
        Some(c) => c,
        None => return html.to_string(),
    };
    let tag_end = caps.get(0).map(|m| m.end()).unwrap_or(0);
    let close = format!("</{}>", &caps[1]);

    match html[tag_end..].find(&close) {
        Some(rel) => {
            let close_start = tag_end + rel;
            format!("{}{}{}", &html[..tag_end], content, &html[close_start..])
        }
        None => html.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(10.0));
        assert!(header_scrolled(10.5));
        assert!(header_scrolled(400.0));
    }

    #[test]
    fn test_footer_year_is_current() {
        assert!(footer_year() >= 2026);
    }

    #[test]
    fn test_fill_element_replaces_content() {
        let html = r#"<footer>© <span id="year"></span></footer>"#;
        let out = fill_element(html, "year", "2026");
        assert_eq!(out, r#"<footer>© <span id="year">2026</span></footer>"#);
    }

    #[test]
    fn test_fill_element_overwrites_existing_content() {
        let html = r#"<div id="pub-list">stale</div>"#;
        let out = fill_element(html, "pub-list", "fresh");
        assert_eq!(out, r#"<div id="pub-list">fresh</div>"#);
    }

    #[test]
    fn test_fill_element_missing_mount_no_ops() {
        let html = "<body><p>nothing here</p></body>";
        assert_eq!(fill_element(html, "pub-list", "x"), html);
    }
}
