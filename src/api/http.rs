use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;

use crate::api::{ApiError, ApiResult, CatalogApi, JobsApi, SavedSearchApi};
use crate::interactive::domain::models::{
    CandidateEntry, FilterField, JobPosting, JobQuery, SavedSearch, UpdatePayload,
};
use crate::ClientOptions;

/// Blocking HTTP implementation of the remote collaborators. Calls are
/// made from the I/O worker thread, never from the event loop.
pub struct HttpClient {
    http: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpClient {
    pub fn new(options: &ClientOptions) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            auth_token: options.auth_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn expect_ok(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }

    fn catalog_path(field: FilterField) -> &'static str {
        match field {
            FilterField::Role => "/catalog/roles",
            FilterField::Location => "/catalog/locations",
            FilterField::Company => "/catalog/companies",
        }
    }
}

impl SavedSearchApi for HttpClient {
    fn list(&self) -> ApiResult<Vec<SavedSearch>> {
        let response = self.authorize(self.http.get(self.url("/searches"))).send()?;
        Ok(Self::expect_ok(response)?.json()?)
    }

    fn update(&self, payload: &UpdatePayload) -> ApiResult<SavedSearch> {
        let url = self.url(&format!("/searches/{}", payload.id));
        let response = self.authorize(self.http.put(url).json(payload)).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(payload.id));
        }
        Ok(Self::expect_ok(response)?.json()?)
    }

    fn delete(&self, id: i64) -> ApiResult<()> {
        let url = self.url(&format!("/searches/{id}"));
        let response = self.authorize(self.http.delete(url)).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id));
        }
        Self::expect_ok(response)?;
        Ok(())
    }
}

impl CatalogApi for HttpClient {
    fn candidates(&self, field: FilterField) -> ApiResult<Vec<CandidateEntry>> {
        let url = self.url(Self::catalog_path(field));
        let response = self.authorize(self.http.get(url)).send()?;
        Ok(Self::expect_ok(response)?.json()?)
    }
}

impl JobsApi for HttpClient {
    fn search(&self, query: &JobQuery) -> ApiResult<Vec<JobPosting>> {
        let limit = query.max_results.to_string();
        let response = self
            .authorize(
                self.http.get(self.url("/jobs")).query(&[
                    ("title", query.title.as_str()),
                    ("location", query.location.as_str()),
                    ("company", query.company.as_str()),
                    ("limit", limit.as_str()),
                ]),
            )
            .send()?;
        Ok(Self::expect_ok(response)?.json()?)
    }
}
