use crate::common::Publication;

/// Recognized sort keys. Anything else falls back to the order the records
/// arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Year,
    Citations,
    Title,
    SourceOrder,
}

impl SortKey {
    pub fn parse(s: &str) -> Self {
        match s {
            "year" => SortKey::Year,
            "citations" => SortKey::Citations,
            "title" => SortKey::Title,
            _ => SortKey::SourceOrder,
        }
    }
}

/// Sort in place with a stable sort. Missing years and citation counts
/// default to 0, which puts them at the end of the descending orders;
/// missing titles default to the empty string. Equal keys keep their
/// relative input order.
pub fn sort_publications(list: &mut [&Publication], key: SortKey) {
    match key {
        SortKey::Year => {
            list.sort_by(|a, b| b.year.unwrap_or(0).cmp(&a.year.unwrap_or(0)));
        }
        SortKey::Citations => {
            list.sort_by(|a, b| b.cited_by.unwrap_or(0).cmp(&a.cited_by.unwrap_or(0)));
        }
        SortKey::Title => {
            list.sort_by(|a, b| title_key(a).cmp(&title_key(b)));
        }
        SortKey::SourceOrder => {}
    }
}

// Case-insensitive collation key; a full ICU collator is out of proportion
// for a few hundred records.
fn title_key(p: &Publication) -> String {
    p.title.as_deref().unwrap_or("").to_lowercase()
}
