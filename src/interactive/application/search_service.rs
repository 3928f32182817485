use std::sync::Arc;

use crate::api::{ApiResult, SavedSearchApi};
use crate::interactive::domain::models::{MutationOutcome, MutationRequest, SavedSearch};

/// Executes saved-search operations against the remote API. Runs on the
/// I/O worker thread; outcomes are stamped with the id of the search
/// they targeted so the state machine can drop stale ones.
pub struct SavedSearchService {
    api: Arc<dyn SavedSearchApi>,
}

impl SavedSearchService {
    pub fn new(api: Arc<dyn SavedSearchApi>) -> Self {
        Self { api }
    }

    pub fn list(&self) -> ApiResult<Vec<SavedSearch>> {
        self.api.list()
    }

    pub fn run(&self, request: MutationRequest) -> MutationOutcome {
        match request {
            MutationRequest::Update(payload) => {
                let search_id = payload.id;
                let result = self.api.update(&payload).map_err(|e| {
                    tracing::warn!(search_id, error = %e, "update mutation failed");
                    e.to_string()
                });
                MutationOutcome::Updated { search_id, result }
            }
            MutationRequest::Delete(search_id) => {
                let result = self.api.delete(search_id).map_err(|e| {
                    tracing::warn!(search_id, error = %e, "delete mutation failed");
                    e.to_string()
                });
                MutationOutcome::Deleted { search_id, result }
            }
        }
    }
}
