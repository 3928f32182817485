use crate::interactive::domain::models::{CandidateEntry, Suggestion};

/// Client-side filtering of a candidate catalog. The catalog is fetched
/// once and filtered here on every keystroke; there is no server-side
/// incremental search.
pub struct CandidateFilter;

impl CandidateFilter {
    /// Case-insensitive substring match of `query` against the catalog
    /// labels. An empty query matches the whole catalog.
    pub fn filter(catalog: &[CandidateEntry], query: &str) -> Vec<CandidateEntry> {
        if query.is_empty() {
            return catalog.to_vec();
        }
        let query_lower = query.to_lowercase();
        catalog
            .iter()
            .filter(|entry| entry.label.to_lowercase().contains(&query_lower))
            .cloned()
            .collect()
    }

    /// Dropdown rows for the current query: the free-text row first,
    /// then the catalog matches.
    pub fn suggestions(catalog: &[CandidateEntry], query: &str) -> Vec<Suggestion> {
        let mut rows = vec![Suggestion::FreeText(query.to_string())];
        rows.extend(Self::filter(catalog, query).into_iter().map(Suggestion::Catalog));
        rows
    }
}
