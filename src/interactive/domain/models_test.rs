#[cfg(test)]
mod tests {
    use crate::interactive::domain::models::{
        CandidateEntry, SavedSearch, Suggestion, SENTINEL_SEARCH_ID,
    };

    #[test]
    fn test_sentinel_search() {
        let sentinel = SavedSearch::sentinel();
        assert_eq!(sentinel.id, SENTINEL_SEARCH_ID);
        assert!(sentinel.is_sentinel());
        assert_eq!(sentinel.name, "Select a saved search");
        assert_eq!(sentinel.title, "...");
    }

    #[test]
    fn test_regular_search_is_not_sentinel() {
        let mut search = SavedSearch::sentinel();
        search.id = 7;
        assert!(!search.is_sentinel());
    }

    #[test]
    fn test_suggestion_values() {
        let free = Suggestion::FreeText("rust dev".to_string());
        assert_eq!(free.committed_value(), "rust dev");
        assert_eq!(free.display_label(), "Use filter: rust dev");

        let entry = Suggestion::Catalog(CandidateEntry {
            id: 3,
            label: "Berlin".to_string(),
        });
        assert_eq!(entry.committed_value(), "Berlin");
        assert_eq!(entry.display_label(), "Berlin");
    }

    #[test]
    fn test_saved_search_wire_format_is_camel_case() {
        let json = serde_json::to_value(SavedSearch::sentinel()).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("jobDescription").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
