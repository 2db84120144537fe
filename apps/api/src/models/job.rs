use serde::{Deserialize, Serialize};

/// A row of the `jobs` collection with its `companies` join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRow {
    #[serde(deserialize_with = "super::id_as_string")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub companies: Option<CompanyJoin>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyJoin {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl JobRow {
    /// Only an explicit `true` is active, as with the REST filter `is_active=eq.true`.
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }
}
