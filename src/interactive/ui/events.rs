use crate::interactive::domain::models::{
    CandidateEntry, FilterField, JobsResponse, MutationOutcome, Notice, SavedSearch, Suggestion,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Autocomplete inputs
    QueryChanged(FilterField, String),
    SuggestionCommitted(FilterField, Suggestion),
    /// Blur or Enter with an empty query: the field no longer constrains
    /// the job query.
    InputCleared(FilterField),
    /// Focus left the input; clears the field when the query is empty.
    InputBlurred(FilterField),
    CatalogLoaded(FilterField, Result<Vec<CandidateEntry>, String>),

    // Saved searches
    SearchHighlighted(usize),
    SearchSelected(SavedSearch),
    EditRequested,
    NameChanged(String),
    SaveRequested,
    DeleteRequested(SavedSearch),
    MutationCompleted(MutationOutcome),
    SearchesLoaded(Result<Vec<SavedSearch>, String>),

    // Job list
    JobHighlighted(usize),
    JobQueryRequested,
    JobsCompleted(JobsResponse),
    TagApplied(String),

    // UI
    SetNotice(Notice),
    ClearNotice,
}
