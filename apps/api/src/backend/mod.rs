//! Backend seam: the generic row-filtering query client behind every search.
//!
//! `AppState` holds an `Option<Arc<dyn Backend>>`; `None` means the hosted database
//! was never configured and searches fail fast with a configuration notice.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::candidate::CandidateRow;
use crate::models::job::JobRow;

pub mod memory;
pub mod rest;
pub mod seed;

pub use memory::MemoryBackend;
pub use rest::RestBackend;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Filter for active job postings. `None` fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub title: Option<String>,
    pub location: Option<String>,
}

/// Filter for candidate profiles. `text` matches name, job title or email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    pub text: Option<String>,
    pub location: Option<String>,
}

impl JobFilter {
    pub fn matches(&self, row: &JobRow) -> bool {
        row.is_active()
            && contains_ci(row.title.as_deref(), self.title.as_deref())
            && contains_ci(row.location.as_deref(), self.location.as_deref())
    }
}

impl CandidateFilter {
    pub fn matches(&self, row: &CandidateRow) -> bool {
        let text_match = match self.text.as_deref() {
            None => true,
            Some(needle) => [&row.full_name, &row.job_title, &row.email]
                .iter()
                .any(|field| contains_ci(field.as_deref(), Some(needle))),
        };
        text_match && contains_ci(row.country.as_deref(), self.location.as_deref())
    }
}

/// Case-insensitive substring test. A missing needle always matches;
/// a missing haystack only matches a missing needle.
pub(crate) fn contains_ci(haystack: Option<&str>, needle: Option<&str>) -> bool {
    match (haystack, needle) {
        (_, None) => true,
        (None, Some(_)) => false,
        (Some(h), Some(n)) => h.to_lowercase().contains(&n.to_lowercase()),
    }
}

/// The read-only query surface used by the search adapter.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Active jobs matching the filter, in backend order.
    async fn fetch_jobs(&self, filter: &JobFilter) -> Result<Vec<JobRow>, BackendError>;

    /// Candidate profiles with their skills join, in backend order.
    async fn fetch_candidates(
        &self,
        filter: &CandidateFilter,
    ) -> Result<Vec<CandidateRow>, BackendError>;

    /// Cheap round trip proving the backend answers with the configured credentials.
    async fn ping(&self) -> Result<(), BackendError>;

    /// Short label for logs and the connection check.
    fn name(&self) -> &'static str;
}
