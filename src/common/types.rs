use serde::{Deserialize, Serialize};

/// One publication record from the scholar document. Every field is optional;
/// records carry no identifier and arrive in source order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(rename = "citedBy", skip_serializing_if = "Option::is_none")]
    pub cited_by: Option<u64>,
}

impl Publication {
    /// Lowercased haystack for the free-text query: title, authors, venue,
    /// and type joined with spaces (missing fields contribute empty segments).
    pub fn search_text(&self) -> String {
        [
            self.title.as_deref().unwrap_or(""),
            self.authors.as_deref().unwrap_or(""),
            self.venue.as_deref().unwrap_or(""),
            self.kind.as_deref().unwrap_or(""),
        ]
        .join(" ")
        .to_lowercase()
    }

    /// String coercion of the year for exact-match filtering and display.
    /// Absent and zero years both coerce to the empty string.
    pub fn year_str(&self) -> String {
        match self.year {
            Some(y) if y != 0 => y.to_string(),
            _ => String::new(),
        }
    }

    /// Link, treating the empty string as absent.
    pub fn link_str(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.is_empty())
    }
}

/// Citation metrics block. `last_updated` is opaque text, displayed verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hindex: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i10: Option<u64>,
    #[serde(rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Root of data/scholar.json. An absent publications array means
/// "no data yet", not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScholarDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publications: Option<Vec<Publication>>,
}

impl ScholarDoc {
    /// Empty document written when a sync fails with nothing on disk.
    pub fn empty() -> Self {
        Self {
            metrics: Some(Metrics::default()),
            publications: Some(Vec::new()),
        }
    }
}
