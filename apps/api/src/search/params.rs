//! Search parameters and their URL query-string form.
//!
//! The query string is the only place search state lives between requests:
//! the form writes it on submit and the page reads it back on load.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    All,
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::All,
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contract,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmploymentType::All => "all",
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
            EmploymentType::Contract => "contract",
        }
    }

    /// Unknown values fall back to `All`.
    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == code.trim())
            .unwrap_or_default()
    }
}

/// What the user asked for. `employment_type` and `remote` travel through the URL
/// but are not applied as backend filters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub loc: String,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub remote: bool,
}

/// Raw query string of the search routes, as the `Query` extractor decodes it.
///
/// Every field is optional; `type` stays a string so an unknown value falls back
/// to `all` instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub loc: String,
    #[serde(default, rename = "type")]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub remote: Option<String>,
    /// View override (`seeker` or `company`); not part of the search state.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

impl From<&SearchQuery> for SearchParams {
    fn from(query: &SearchQuery) -> Self {
        SearchParams {
            q: query.q.clone(),
            loc: query.loc.clone(),
            employment_type: query
                .employment_type
                .as_deref()
                .map(EmploymentType::from_code)
                .unwrap_or_default(),
            remote: query.remote.as_deref() == Some("true"),
        }
    }
}

impl SearchParams {
    /// Parses the query part of a URL (with or without the leading `?`).
    /// Malformed input yields the defaults.
    pub fn from_query_str(query: &str) -> Self {
        serde_urlencoded::from_str::<SearchQuery>(query.trim_start_matches('?'))
            .map(|query| SearchParams::from(&query))
            .unwrap_or_default()
    }

    /// Writes `q`, `loc`, `type` and `remote`, in that order.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self).unwrap_or_default()
    }

    /// Trimmed free-text query, `None` when blank.
    pub fn query_filter(&self) -> Option<String> {
        non_blank(&self.q)
    }

    /// Trimmed location, `None` when blank.
    pub fn location_filter(&self) -> Option<String> {
        non_blank(&self.loc)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
