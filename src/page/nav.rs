use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref NAV_LINK: Regex = Regex::new(r#"<a\b[^>]*\bhref=["']([^"']*)["'][^>]*>"#).unwrap();
    static ref CLASS_ATTR: Regex = Regex::new(r#"class=["']([^"']*)["']"#).unwrap();
}

/// File-name component of a path or href, with query/fragment stripped.
/// A bare directory reference means the index page.
pub fn page_name(path: &str) -> String {
    let name = path
        .rsplit('/')
        .next()
        .unwrap_or("")
        .split(['?', '#'])
        .next()
        .unwrap_or("");
    if name.is_empty() {
        "index.html".to_string()
    } else {
        name.to_string()
    }
}

/// Mark the nav link whose href points at the current page with the
/// `active` class. Only anchors inside the first <nav> block are touched;
/// pages without one are returned unchanged. Must run after partial
/// injection, since the nav usually arrives with the header partial.
pub fn highlight_active(html: &str, current_page: &str) -> String {
    let start = match html.find("<nav") {
        Some(i) => i,
        None => return html.to_string(),
    };
    let end = html[start..]
        .find("</nav>")
        .map(|i| start + i + "</nav>".len())
        .unwrap_or(html.len());

    let nav = &html[start..end];
    let rewritten = NAV_LINK.replace_all(nav, |caps: &Captures| {
        let tag = &caps[0];
        if page_name(&caps[1]) == current_page {
            add_active_class(tag)
        } else {
            tag.to_string()
        }
    });

    format!("{}{}{}", &html[..start], rewritten, &html[end..])
}

fn add_active_class(tag: &str) -> String {
    if let Some(caps) = CLASS_ATTR.captures(tag) {
        let classes = &caps[1];
        if classes.split_whitespace().any(|c| c == "active") {
            return tag.to_string();
        }
        tag.replacen(&caps[0], &format!(r#"class="{} active""#, classes), 1)
    } else {
        format!("{} class=\"active\">", &tag[..tag.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAV: &str = concat!(
        r#"<header><nav class="site-nav">"#,
        r#"<a href="index.html">Home</a>"#,
        r#"<a class="nav-link" href="publications.html">Publications</a>"#,
        r#"<a href="contact.html">Contact</a>"#,
        r#"</nav></header><a href="publications.html">footer link</a>"#
    );

    #[test]
    fn test_page_name_variants() {
        assert_eq!(page_name("publications.html"), "publications.html");
        assert_eq!(page_name("/site/publications.html"), "publications.html");
        assert_eq!(page_name("publications.html?sort=year"), "publications.html");
        assert_eq!(page_name("about.html#bio"), "about.html");
        assert_eq!(page_name("/"), "index.html");
        assert_eq!(page_name(""), "index.html");
    }

    #[test]
    fn test_highlight_matching_link() {
        let out = highlight_active(NAV, "publications.html");
        assert!(out.contains(r#"class="nav-link active" href="publications.html""#));
        assert!(!out.contains(r#"<a href="index.html" class="active">"#));
    }

    #[test]
    fn test_highlight_adds_class_attr_when_absent() {
        let out = highlight_active(NAV, "contact.html");
        assert!(out.contains(r#"<a href="contact.html" class="active">"#));
    }

    #[test]
    fn test_links_outside_nav_untouched() {
        let out = highlight_active(NAV, "publications.html");
        assert!(out.ends_with(r#"<a href="publications.html">footer link</a>"#));
    }

    #[test]
    fn test_no_nav_block_no_ops() {
        let html = r#"<a href="index.html">Home</a>"#;
        assert_eq!(highlight_active(html, "index.html"), html);
    }

    #[test]
    fn test_already_active_not_duplicated() {
        let html = r#"<nav><a class="active" href="index.html">Home</a></nav>"#;
        let out = highlight_active(html, "index.html");
        assert_eq!(out, html);
    }
}
