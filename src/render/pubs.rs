use crate::common::Publication;

/// Shown in the list container when the loader came back empty.
pub const PLACEHOLDER: &str =
    r#"<div class="card">Publications will appear after the first Scholar sync.</div>"#;

/// Label shown for the metrics timestamp when no data is available.
pub const METRICS_PENDING: &str = "Scholar data will appear after the first sync.";

/// One list fragment. The meta line joins authors/venue/year with a middle
/// dot; empty segments still participate, so missing fields produce doubled
/// separators (matches the site's rendering, left as-is). The link action is
/// only emitted for a non-empty link; the citation badge only when `citedBy`
/// is an actual number, so "Cited by 0" is distinct from no badge at all.
pub fn pub_item(p: &Publication) -> String {
    item(p, "<a class='badge pub-link' href='{href}' target='_blank' rel='noopener'>Read Paper</a>")
}

/// Home-page variant: same shape, button-styled link labelled "Publisher".
pub fn featured_item(p: &Publication) -> String {
    item(p, r#"<a class="btn" href="{href}" target="_blank" rel="noopener">Publisher</a>"#)
}

fn item(p: &Publication, link_template: &str) -> String {
    let title = match p.title.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => "Untitled",
    };
    let authors = p.authors.as_deref().unwrap_or("");
    let venue = p.venue.as_deref().unwrap_or("");
    let year = p.year_str();

    let link = match p.link_str() {
        Some(href) => link_template.replace("{href}", href),
        None => String::new(),
    };
    let badge = match p.cited_by {
        Some(n) => format!("<span class='badge'>Cited by {}</span>", n),
        None => String::new(),
    };

    format!(
        "<div class='pub-item'>\n  \
           <div class='pub-title'>{}</div>\n  \
           <div class='pub-meta'>{} · {} · {}</div>\n  \
           <div class='pub-actions'>{}{}</div>\n\
         </div>",
        title, authors, venue, year, link, badge
    )
}

/// Join fragments in sequence order. An empty input renders an empty string;
/// there is deliberately no "no results" message.
pub fn render_list(list: &[&Publication]) -> String {
    list.iter().map(|p| pub_item(p)).collect::<Vec<_>>().join("\n")
}

/// Top-`n` publications by year, descending.
pub fn featured(pubs: &[Publication], n: usize) -> Vec<&Publication> {
    let mut list: Vec<&Publication> = pubs.iter().collect();
    list.sort_by(|a, b| b.year.unwrap_or(0).cmp(&a.year.unwrap_or(0)));
    list.truncate(n);
    list
}

pub fn render_featured(pubs: &[Publication], n: usize) -> String {
    featured(pubs, n)
        .iter()
        .map(|p| featured_item(p))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_fallback() {
        let html = pub_item(&Publication::default());
        assert!(html.contains("Untitled"));
        let p = Publication { title: Some(String::new()), ..Default::default() };
        assert!(pub_item(&p).contains("Untitled"));
    }

    #[test]
    fn test_meta_line_keeps_empty_segments() {
        let p = Publication {
            title: Some("A".to_string()),
            year: Some(2020),
            ..Default::default()
        };
        // missing authors and venue still contribute their separators
        assert!(pub_item(&p).contains("<div class='pub-meta'> ·  · 2020</div>"));
    }

    #[test]
    fn test_no_link_no_anchor() {
        let html = pub_item(&Publication::default());
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_link_opens_without_opener() {
        let p = Publication {
            link: Some("https://example.org/paper".to_string()),
            ..Default::default()
        };
        let html = pub_item(&p);
        assert!(html.contains("href='https://example.org/paper'"));
        assert!(html.contains("target='_blank'"));
        assert!(html.contains("rel='noopener'"));
        assert!(html.contains("Read Paper"));
    }

    #[test]
    fn test_cited_by_zero_renders_badge() {
        let p = Publication { cited_by: Some(0), ..Default::default() };
        assert!(pub_item(&p).contains("Cited by 0"));
    }

    #[test]
    fn test_cited_by_absent_renders_no_badge() {
        let html = pub_item(&Publication::default());
        assert!(!html.contains("Cited by"));
    }

    #[test]
    fn test_render_list_empty_is_empty() {
        assert_eq!(render_list(&[]), "");
    }

    #[test]
    fn test_featured_top_three_by_year() {
        let pubs: Vec<Publication> = [2019, 2023, 2021, 2022]
            .iter()
            .map(|y| Publication { year: Some(*y), ..Default::default() })
            .collect();
        let top = featured(&pubs, 3);
        let years: Vec<Option<i32>> = top.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![Some(2023), Some(2022), Some(2021)]);
    }

    #[test]
    fn test_featured_variant_markup() {
        let pubs = vec![Publication {
            title: Some("A".to_string()),
            link: Some("https://example.org".to_string()),
            ..Default::default()
        }];
        let html = render_featured(&pubs, 3);
        assert!(html.contains(r#"class="btn""#));
        assert!(html.contains("Publisher"));
    }
}
