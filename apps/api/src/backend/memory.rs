use async_trait::async_trait;

use super::{seed, Backend, BackendError, CandidateFilter, JobFilter};
use crate::models::candidate::CandidateRow;
use crate::models::job::JobRow;

/// In-process backend. Applies the same substring filters as the REST client and
/// keeps rows in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    jobs: Vec<JobRow>,
    candidates: Vec<CandidateRow>,
}

impl MemoryBackend {
    pub fn new(jobs: Vec<JobRow>, candidates: Vec<CandidateRow>) -> Self {
        Self { jobs, candidates }
    }

    /// Demo data set used when `DATA_SOURCE=memory`.
    pub fn seeded() -> Self {
        Self::new(seed::jobs(), seed::candidates())
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn fetch_jobs(&self, filter: &JobFilter) -> Result<Vec<JobRow>, BackendError> {
        Ok(self
            .jobs
            .iter()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect())
    }

    async fn fetch_candidates(
        &self,
        filter: &CandidateFilter,
    ) -> Result<Vec<CandidateRow>, BackendError> {
        Ok(self
            .candidates
            .iter()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), BackendError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
