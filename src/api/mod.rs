pub mod http;

pub use http::HttpClient;

use crate::interactive::domain::models::{
    CandidateEntry, FilterField, JobPosting, JobQuery, SavedSearch, UpdatePayload,
};
use thiserror::Error;

/// Failures surfaced by the remote service collaborators.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("saved search {0} not found")]
    NotFound(i64),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected response status {0}")]
    Status(u16),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Saved-search CRUD operations for the authenticated user. `update` and
/// `delete` fail with `ApiError::NotFound` when the id does not belong
/// to the caller.
pub trait SavedSearchApi: Send + Sync {
    fn list(&self) -> ApiResult<Vec<SavedSearch>>;
    fn update(&self, payload: &UpdatePayload) -> ApiResult<SavedSearch>;
    fn delete(&self, id: i64) -> ApiResult<()>;
}

/// Named role/location/company lists used to seed the autocomplete
/// dropdowns.
pub trait CatalogApi: Send + Sync {
    fn candidates(&self, field: FilterField) -> ApiResult<Vec<CandidateEntry>>;
}

/// Paginated job listing, parameterized by the committed filters.
pub trait JobsApi: Send + Sync {
    fn search(&self, query: &JobQuery) -> ApiResult<Vec<JobPosting>>;
}
