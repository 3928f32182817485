pub mod api;
pub mod interactive;

/// Connection and query options shared by the binary and the client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub max_results: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            auth_token: None,
            max_results: 50,
        }
    }
}

pub use api::{ApiError, ApiResult, CatalogApi, HttpClient, JobsApi, SavedSearchApi};
pub use interactive::InteractiveClient;
