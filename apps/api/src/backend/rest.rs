//! REST client for the hosted database (PostgREST dialect).
//!
//! One request per search, awaited linearly. No retries and no caching; whatever the
//! last response says is the result.

use anyhow::{Context, Result};
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

use super::{Backend, BackendError, CandidateFilter, JobFilter};
use crate::models::candidate::CandidateRow;
use crate::models::job::JobRow;

const REST_PREFIX: &str = "/rest/v1/";

const JOB_COLUMNS: &str =
    "id,title,location,description,created_at,is_active,companies(name,name_ar,name_en,logo_url)";
const CANDIDATE_COLUMNS: &str = "id,full_name,job_title,country,phone,email,nationality,avatar_url,user_skills(level,skills(name))";

/// Filter values keep PostgREST operators readable; everything else is escaped.
const FILTER_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')')
    .remove(b',');

#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

#[derive(Clone)]
pub struct RestBackend {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestBackend {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> Result<Vec<T>, BackendError> {
        let url = format!("{}{}{}", self.base_url, REST_PREFIX, path_and_query);
        debug!("Backend GET {url}");

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("accept", "application/json")
            .send()
            .await?;

        let response = check_status(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl Backend for RestBackend {
    async fn fetch_jobs(&self, filter: &JobFilter) -> Result<Vec<JobRow>, BackendError> {
        self.get_rows(&jobs_query(filter)).await
    }

    async fn fetch_candidates(
        &self,
        filter: &CandidateFilter,
    ) -> Result<Vec<CandidateRow>, BackendError> {
        self.get_rows(&candidates_query(filter)).await
    }

    async fn ping(&self) -> Result<(), BackendError> {
        let _: Vec<serde_json::Value> = self.get_rows(ping_query()).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "rest"
    }
}

async fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(BackendError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Prefers the `message` field of a PostgREST error body over the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<PostgrestError>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.to_string())
}

pub(crate) fn jobs_query(filter: &JobFilter) -> String {
    let mut query = format!("jobs?select={JOB_COLUMNS}&is_active=eq.true");
    if let Some(title) = &filter.title {
        query.push_str(&format!("&title={}", encode(&ilike(title))));
    }
    if let Some(location) = &filter.location {
        query.push_str(&format!("&location={}", encode(&ilike(location))));
    }
    query.push_str("&order=created_at.desc");
    query
}

pub(crate) fn candidates_query(filter: &CandidateFilter) -> String {
    let mut query = format!("seeker_profiles?select={CANDIDATE_COLUMNS}");
    if let Some(text) = &filter.text {
        let pattern = quote(&format!("*{}*", escape_like(text)));
        let any_of = ["full_name", "job_title", "email"]
            .iter()
            .map(|column| format!("{column}.ilike.{pattern}"))
            .collect::<Vec<_>>()
            .join(",");
        query.push_str(&format!("&or={}", encode(&format!("({any_of})"))));
    }
    if let Some(location) = &filter.location {
        query.push_str(&format!("&country={}", encode(&ilike(location))));
    }
    query
}

pub(crate) fn ping_query() -> &'static str {
    "profiles?select=id&limit=1"
}

fn ilike(value: &str) -> String {
    format!("ilike.*{}*", escape_like(value))
}

/// Escapes LIKE metacharacters so user text is matched literally.
fn escape_like(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Double-quotes a value inside a PostgREST logic tree (`or=(...)`).
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, FILTER_VALUE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_query_without_filters_only_requires_active() {
        let q = jobs_query(&JobFilter::default());
        assert!(q.starts_with("jobs?select=id,title"));
        assert!(q.contains("companies(name,name_ar,name_en,logo_url)"));
        assert!(q.contains("&is_active=eq.true"));
        assert!(!q.contains("&title="));
        assert!(!q.contains("&location="));
        assert!(q.ends_with("&order=created_at.desc"));
    }

    #[test]
    fn test_jobs_query_encodes_arabic_title() {
        let q = jobs_query(&JobFilter {
            title: Some("مطور".to_string()),
            location: Some("الرياض".to_string()),
        });
        let expected_title = format!(
            "&title=ilike.*{}*",
            utf8_percent_encode("مطور", NON_ALPHANUMERIC)
        );
        assert!(q.contains(&expected_title), "{q}");
        assert!(q.contains("&location=ilike.*%D8%A7"), "{q}");
    }

    #[test]
    fn test_candidates_query_builds_or_tree() {
        let q = candidates_query(&CandidateFilter {
            text: Some("ali".to_string()),
            location: None,
        });
        assert!(q.starts_with("seeker_profiles?select="));
        assert!(q.contains("user_skills(level,skills(name))"));
        assert!(q.contains(
            "&or=(full_name.ilike.%22*ali*%22,job_title.ilike.%22*ali*%22,email.ilike.%22*ali*%22)"
        ));
        assert!(!q.contains("&country="));
    }

    #[test]
    fn test_filter_values_cannot_break_out_of_query() {
        let q = candidates_query(&CandidateFilter {
            text: Some("a\",b&c=d".to_string()),
            location: Some("50%".to_string()),
        });
        assert!(!q.contains("&c=d"));
        assert!(q.contains("%5C%22"));
        assert!(q.contains("&country=ilike.*50%5C%25*"));
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("a_b%c\\"), "a\\_b\\%c\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_error_message_prefers_json_message() {
        assert_eq!(
            error_message(r#"{"code":"42P01","message":"relation \"jobs\" does not exist"}"#),
            "relation \"jobs\" does not exist"
        );
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let backend = RestBackend::new("https://db.example.co/", "anon").unwrap();
        assert_eq!(backend.base_url, "https://db.example.co");
        assert_eq!(backend.name(), "rest");
    }
}
