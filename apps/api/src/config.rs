use anyhow::{bail, Context, Result};

use crate::render::i18n::Locale;

pub const DEFAULT_COMPANY_FALLBACK: &str = "شركة غير معروفة";

/// Where search rows come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Hosted database reached through its REST surface.
    Rest,
    /// In-process demo rows, no network.
    Memory,
}

/// Application configuration loaded from environment variables.
///
/// The backend credentials are optional on purpose: a missing URL or key does not
/// stop the server, every search answers with a "backend not configured" notice instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_source: DataSource,
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub company_fallback_name: String,
    pub default_locale: Locale,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let data_source = match optional_env("DATA_SOURCE").as_deref() {
            None | Some("rest") => DataSource::Rest,
            Some("memory") => DataSource::Memory,
            Some(other) => bail!("DATA_SOURCE must be 'rest' or 'memory', got '{other}'"),
        };

        let default_locale = match optional_env("DEFAULT_LOCALE") {
            Some(code) => Locale::from_code(&code)
                .with_context(|| format!("DEFAULT_LOCALE '{code}' is not a supported locale"))?,
            None => Locale::default(),
        };

        Ok(Config {
            data_source,
            supabase_url: optional_env("SUPABASE_URL"),
            supabase_anon_key: optional_env("SUPABASE_ANON_KEY"),
            company_fallback_name: optional_env("COMPANY_FALLBACK_NAME")
                .unwrap_or_else(|| DEFAULT_COMPANY_FALLBACK.to_string()),
            default_locale,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Both the URL and the anon key, when both are present and non-empty.
    pub fn rest_credentials(&self) -> Option<(&str, &str)> {
        match (&self.supabase_url, &self.supabase_anon_key) {
            (Some(url), Some(key)) => Some((url.as_str(), key.as_str())),
            _ => None,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Config {
    /// Configuration used by unit and router tests.
    pub fn for_tests() -> Self {
        Config {
            data_source: DataSource::Memory,
            supabase_url: None,
            supabase_anon_key: None,
            company_fallback_name: DEFAULT_COMPANY_FALLBACK.to_string(),
            default_locale: Locale::Ar,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_credentials_require_both_values() {
        let mut config = Config::for_tests();
        assert!(config.rest_credentials().is_none());

        config.supabase_url = Some("https://db.example.co".to_string());
        assert!(config.rest_credentials().is_none());

        config.supabase_anon_key = Some("anon".to_string());
        assert_eq!(
            config.rest_credentials(),
            Some(("https://db.example.co", "anon"))
        );
    }
}
