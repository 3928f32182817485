use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Id of the well-known "nothing selected" saved search. It is never sent
/// to the update or delete endpoints.
pub const SENTINEL_SEARCH_ID: i64 = -1;

/// Which of the three filter inputs a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterField {
    Role,
    Location,
    Company,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [Self::Role, Self::Location, Self::Company];

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Role => 0,
            Self::Location => 1,
            Self::Company => 2,
        }
    }

    /// Prompt shown above the input, matching the search form wording.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Role => "I'm looking for",
            Self::Location => "In",
            Self::Company => "At",
        }
    }
}

/// A persisted named bundle of the three filter values plus metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub title: String,
    pub location: String,
    pub company: String,
    pub job_description: String,
    pub salary: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavedSearch {
    /// The placeholder record shown before any search has been picked.
    pub fn sentinel() -> Self {
        let now = Utc::now();
        Self {
            id: SENTINEL_SEARCH_ID,
            user_id: String::new(),
            name: "Select a saved search".to_string(),
            title: "...".to_string(),
            location: "...".to_string(),
            company: "...".to_string(),
            job_description: "...".to_string(),
            salary: "...".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.id == SENTINEL_SEARCH_ID
    }
}

/// Fields sent to the saved-search update endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdatePayload {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub location: String,
    pub company: String,
}

/// One named role, location or company from the remote catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateEntry {
    pub id: i64,
    pub label: String,
}

/// One row in an autocomplete dropdown. The free-text row is always
/// present and always first; it commits the typed text verbatim.
#[derive(Clone, Debug, PartialEq)]
pub enum Suggestion {
    FreeText(String),
    Catalog(CandidateEntry),
}

impl Suggestion {
    /// Value written into the filter store when this row is committed.
    pub fn committed_value(&self) -> &str {
        match self {
            Self::FreeText(query) => query,
            Self::Catalog(entry) => &entry.label,
        }
    }

    /// Text rendered in the dropdown.
    pub fn display_label(&self) -> String {
        match self {
            Self::FreeText(query) if query.is_empty() => "Use filter: None".to_string(),
            Self::FreeText(query) => format!("Use filter: {query}"),
            Self::Catalog(entry) => entry.label.clone(),
        }
    }
}

/// A job posting returned by the listing service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Parameters for a job-listing query, built from the committed filters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JobQuery {
    pub title: String,
    pub location: String,
    pub company: String,
    pub max_results: usize,
}

// Request/response pairs for the I/O worker. Every response carries the
// id it was issued for so late arrivals can be dropped.

#[derive(Clone, Debug, PartialEq)]
pub struct JobsRequest {
    pub id: u64,
    pub query: JobQuery,
}

#[derive(Clone, Debug, PartialEq)]
pub struct JobsResponse {
    pub id: u64,
    pub result: Result<Vec<JobPosting>, String>,
}

/// A saved-search mutation dispatched to the I/O worker.
#[derive(Clone, Debug, PartialEq)]
pub enum MutationRequest {
    Update(UpdatePayload),
    Delete(i64),
}

/// Outcome of a mutation, stamped with the id of the search it targeted.
#[derive(Clone, Debug, PartialEq)]
pub enum MutationOutcome {
    Updated {
        search_id: i64,
        result: Result<SavedSearch, String>,
    },
    Deleted {
        search_id: i64,
        result: Result<(), String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A fire-and-forget status-line notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Quick role filters offered on the job panel, lifted from the landing
/// page tag row.
pub const ROLE_TAGS: [&str; 7] = [
    "Remote", "Product", "Frontend", "Backend", "Software", "Senior", "Staff",
];
