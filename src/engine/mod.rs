//! Filter/sort pipeline over the in-memory publication list.

pub mod filter;
pub mod sort;

pub use filter::{distinct_years, Query};
pub use sort::{sort_publications, SortKey};

use crate::common::Publication;

/// Filter, then sort. Sorting applies to the filtered subsequence only.
pub fn apply<'a>(pubs: &'a [Publication], query: &Query, sort: SortKey) -> Vec<&'a Publication> {
    let mut list: Vec<&Publication> = pubs.iter().filter(|p| query.matches(p)).collect();
    sort_publications(&mut list, sort);
    list
}
