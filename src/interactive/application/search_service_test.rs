#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::api::{ApiError, ApiResult, SavedSearchApi};
    use crate::interactive::application::search_service::SavedSearchService;
    use crate::interactive::domain::models::{
        MutationOutcome, MutationRequest, SavedSearch, UpdatePayload,
    };

    struct FakeApi {
        known_id: i64,
    }

    impl SavedSearchApi for FakeApi {
        fn list(&self) -> ApiResult<Vec<SavedSearch>> {
            let mut search = SavedSearch::sentinel();
            search.id = self.known_id;
            search.name = "Backend remote".to_string();
            Ok(vec![search])
        }

        fn update(&self, payload: &UpdatePayload) -> ApiResult<SavedSearch> {
            if payload.id != self.known_id {
                return Err(ApiError::NotFound(payload.id));
            }
            let mut search = SavedSearch::sentinel();
            search.id = payload.id;
            search.name = payload.name.clone();
            search.title = payload.title.clone();
            search.location = payload.location.clone();
            search.company = payload.company.clone();
            Ok(search)
        }

        fn delete(&self, id: i64) -> ApiResult<()> {
            if id != self.known_id {
                return Err(ApiError::NotFound(id));
            }
            Ok(())
        }
    }

    fn service() -> SavedSearchService {
        SavedSearchService::new(Arc::new(FakeApi { known_id: 7 }))
    }

    fn payload(id: i64) -> UpdatePayload {
        UpdatePayload {
            id,
            name: "Renamed".to_string(),
            title: "Engineer".to_string(),
            location: "Remote".to_string(),
            company: "Acme".to_string(),
        }
    }

    #[test]
    fn test_update_outcome_is_stamped_with_target_id() {
        let outcome = service().run(MutationRequest::Update(payload(7)));
        match outcome {
            MutationOutcome::Updated { search_id, result } => {
                assert_eq!(search_id, 7);
                let updated = result.unwrap();
                assert_eq!(updated.name, "Renamed");
                assert_eq!(updated.title, "Engineer");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_update_of_unknown_search_reports_not_found() {
        let outcome = service().run(MutationRequest::Update(payload(99)));
        match outcome {
            MutationOutcome::Updated { search_id, result } => {
                assert_eq!(search_id, 99);
                assert!(result.unwrap_err().contains("not found"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_delete_outcomes() {
        match service().run(MutationRequest::Delete(7)) {
            MutationOutcome::Deleted { search_id, result } => {
                assert_eq!(search_id, 7);
                assert!(result.is_ok());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        match service().run(MutationRequest::Delete(99)) {
            MutationOutcome::Deleted { search_id, result } => {
                assert_eq!(search_id, 99);
                assert!(result.is_err());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_list_passes_through() {
        let searches = service().list().unwrap();
        assert_eq!(searches.len(), 1);
        assert_eq!(searches[0].name, "Backend remote");
    }
}
