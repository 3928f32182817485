use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::api::CatalogApi;
use crate::interactive::domain::models::{CandidateEntry, FilterField};

/// Fetches candidate catalogs from the remote service and caches them
/// per field. Each field is requested at most once per service lifetime;
/// the catalogs are treated as immutable after that.
pub struct CatalogService {
    api: Arc<dyn CatalogApi>,
    cache: Mutex<HashMap<FilterField, Vec<CandidateEntry>>>,
}

impl CatalogService {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn candidates(&self, field: FilterField) -> Result<Vec<CandidateEntry>> {
        if let Some(cached) = self.cache.lock().unwrap().get(&field) {
            return Ok(cached.clone());
        }

        let fetched = self.api.candidates(field)?;
        tracing::debug!(?field, count = fetched.len(), "fetched candidate catalog");
        self.cache.lock().unwrap().insert(field, fetched.clone());
        Ok(fetched)
    }
}
