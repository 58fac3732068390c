use crate::common::Publication;

/// The three composable filter controls. A predicate whose control is unset
/// (or an empty string) is inactive and always true; active predicates AND
/// together, so applying them in any order yields the same subsequence.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Free-text query, matched case-insensitively as a substring of the
    /// record's joined title/authors/venue/type text.
    pub text: String,
    /// Exact match against the record's string-coerced year.
    pub year: Option<String>,
    /// Exact match against the record's publication type.
    pub category: Option<String>,
}

impl Query {
    pub fn matches(&self, p: &Publication) -> bool {
        let q = self.text.to_lowercase();
        let ok_text = q.is_empty() || p.search_text().contains(&q);

        let ok_year = match self.year.as_deref() {
            None | Some("") => true,
            Some(y) => p.year_str() == y,
        };

        let ok_category = match self.category.as_deref() {
            None | Some("") => true,
            Some(c) => p.kind.as_deref().unwrap_or("") == c,
        };

        ok_text && ok_year && ok_category
    }
}

/// Distinct years present in the full record set, descending. Absent and
/// zero years are excluded. Computed once from the unfiltered list; the
/// options are never narrowed by later filtering.
pub fn distinct_years(pubs: &[Publication]) -> Vec<i32> {
    let mut years: Vec<i32> = pubs
        .iter()
        .filter_map(|p| p.year)
        .filter(|y| *y != 0)
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}
