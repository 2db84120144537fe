use std::sync::Arc;

use axum::http::{header, HeaderMap};

use crate::auth::AuthContext;
use crate::backend::Backend;
use crate::config::Config;
use crate::render::i18n::Locale;
use crate::search::display::AdaptOptions;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when the hosted database was not configured at startup.
    pub backend: Option<Arc<dyn Backend>>,
    pub auth: AuthContext,
    pub config: Config,
}

impl AppState {
    pub fn backend(&self) -> Option<&dyn Backend> {
        self.backend.as_deref()
    }

    pub fn adapt_options(&self, locale: Locale) -> AdaptOptions {
        AdaptOptions {
            company_fallback: self.config.company_fallback_name.clone(),
            locale,
        }
    }

    /// Locale for a request: `lang` query value, then the `lang` cookie, then
    /// `Accept-Language`, then the configured default.
    pub fn request_locale(&self, lang: Option<&str>, headers: &HeaderMap) -> Locale {
        let header_str = |name: header::HeaderName| headers.get(name).and_then(|v| v.to_str().ok());
        Locale::detect(
            lang,
            header_str(header::COOKIE),
            header_str(header::ACCEPT_LANGUAGE),
            self.config.default_locale,
        )
    }
}
