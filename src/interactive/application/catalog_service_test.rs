#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::api::{ApiError, ApiResult, CatalogApi};
    use crate::interactive::application::catalog_service::CatalogService;
    use crate::interactive::domain::models::{CandidateEntry, FilterField};

    struct CountingCatalog {
        fetches: AtomicUsize,
        fail: bool,
    }

    impl CountingCatalog {
        fn new(fail: bool) -> Self {
            Self {
                fetches: AtomicUsize::new(0),
                fail,
            }
        }
    }

    impl CatalogApi for CountingCatalog {
        fn candidates(&self, field: FilterField) -> ApiResult<Vec<CandidateEntry>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ApiError::Status(500));
            }
            Ok(vec![CandidateEntry {
                id: 1,
                label: format!("{field:?}-entry"),
            }])
        }
    }

    #[test]
    fn test_each_field_is_fetched_once() {
        let api = Arc::new(CountingCatalog::new(false));
        let service = CatalogService::new(api.clone());

        for _ in 0..3 {
            for field in FilterField::ALL {
                service.candidates(field).unwrap();
            }
        }

        assert_eq!(api.fetches.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_fields_are_cached_independently() {
        let api = Arc::new(CountingCatalog::new(false));
        let service = CatalogService::new(api.clone());

        let roles = service.candidates(FilterField::Role).unwrap();
        let locations = service.candidates(FilterField::Location).unwrap();

        assert_eq!(roles[0].label, "Role-entry");
        assert_eq!(locations[0].label, "Location-entry");
    }

    #[test]
    fn test_fetch_failure_propagates_and_is_not_cached() {
        let api = Arc::new(CountingCatalog::new(true));
        let service = CatalogService::new(api.clone());

        assert!(service.candidates(FilterField::Role).is_err());
        assert!(service.candidates(FilterField::Role).is_err());

        // Failed fetches do not populate the cache.
        assert_eq!(api.fetches.load(Ordering::SeqCst), 2);
    }
}
