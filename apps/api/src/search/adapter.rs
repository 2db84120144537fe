//! Query adapter: role + params → one backend read → display records.
//!
//! Flow:
//! 1. company role without a company sign-in → login required, no query
//! 2. no backend configured → `BackendNotConfigured`
//! 3. seeker → active jobs; company → candidate profiles
//! 4. rows adapted in backend order; any backend error aborts the whole search

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::backend::{Backend, CandidateFilter, JobFilter};
use crate::errors::AppError;
use crate::models::user::{Role, User};
use crate::search::display::{adapt_candidate, adapt_job, AdaptOptions, DisplayRecord};
use crate::search::params::SearchParams;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub role: Role,
    pub login_required: bool,
    pub results: Vec<DisplayRecord>,
}

impl SearchOutcome {
    fn login_required(role: Role) -> Self {
        SearchOutcome {
            role,
            login_required: true,
            results: Vec::new(),
        }
    }
}

/// Role shown to a request: explicit override, then the signed-in user, then seeker.
pub fn resolve_role(requested: Option<Role>, user: Option<&User>) -> Role {
    requested
        .or_else(|| user.map(|u| u.role))
        .unwrap_or(Role::Seeker)
}

pub async fn run_search(
    backend: Option<&dyn Backend>,
    role: Role,
    user: Option<&User>,
    params: &SearchParams,
    options: &AdaptOptions,
) -> Result<SearchOutcome, AppError> {
    if role == Role::Company && !matches!(user, Some(u) if u.role == Role::Company) {
        info!("Candidate search requested without a company sign-in");
        return Ok(SearchOutcome::login_required(role));
    }

    let backend = backend.ok_or(AppError::BackendNotConfigured)?;

    let results = match role {
        Role::Seeker => {
            let filter = JobFilter {
                title: params.query_filter(),
                location: params.location_filter(),
            };
            backend
                .fetch_jobs(&filter)
                .await
                .inspect_err(|e| warn!("Job query failed on {}: {e}", backend.name()))?
                .into_iter()
                .map(|row| DisplayRecord::Job(adapt_job(row, options)))
                .collect::<Vec<_>>()
        }
        Role::Company => {
            let filter = CandidateFilter {
                text: params.query_filter(),
                location: params.location_filter(),
            };
            backend
                .fetch_candidates(&filter)
                .await
                .inspect_err(|e| warn!("Candidate query failed on {}: {e}", backend.name()))?
                .into_iter()
                .map(|row| DisplayRecord::Candidate(adapt_candidate(row)))
                .collect::<Vec<_>>()
        }
    };

    info!(
        role = role.as_str(),
        q = %params.q,
        loc = %params.loc,
        results = results.len(),
        "Search completed"
    );

    Ok(SearchOutcome {
        role,
        login_required: false,
        results,
    })
}
