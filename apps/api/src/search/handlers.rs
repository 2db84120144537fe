//! Axum route handlers for search: JSON API and the server-rendered page.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::{debug, error};

use crate::auth::session_id;
use crate::errors::AppError;
use crate::models::user::{Role, User};
use crate::render::i18n::{Locale, Msg};
use crate::render::page::{PageView, SearchPage};
use crate::search::adapter::{resolve_role, run_search, SearchOutcome};
use crate::search::params::{SearchParams, SearchQuery};
use crate::state::AppState;

/// Everything a search request carries besides the backend.
struct SearchRequest {
    params: SearchParams,
    role: Role,
    role_override: Option<Role>,
    locale: Locale,
    user: Option<User>,
}

impl SearchRequest {
    async fn from_parts(state: &AppState, query: &SearchQuery, headers: &HeaderMap) -> Self {
        let params = SearchParams::from(query);

        let role_override = query.role.as_deref().and_then(|code| {
            let role = Role::from_code(code);
            if role.is_none() {
                debug!("Ignoring unknown role '{code}' in query");
            }
            role
        });

        let locale = state.request_locale(query.lang.as_deref(), headers);
        let user = state.auth.current(session_id(headers)).await;
        let role = resolve_role(role_override, user.as_ref());

        SearchRequest {
            params,
            role,
            role_override,
            locale,
            user,
        }
    }

    async fn run(&self, state: &AppState) -> Result<SearchOutcome, AppError> {
        run_search(
            state.backend(),
            self.role,
            self.user.as_ref(),
            &self.params,
            &state.adapt_options(self.locale),
        )
        .await
    }
}

/// User-facing notice for a failed search.
fn failure_notice(err: &AppError) -> Msg {
    match err {
        AppError::BackendNotConfigured => Msg::BackendNotConfigured,
        _ => Msg::QueryFailed,
    }
}

/// GET /api/v1/search?q=&loc=&type=&remote=&role=&lang=
pub async fn handle_search_api(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
    headers: HeaderMap,
) -> Result<Json<SearchOutcome>, AppError> {
    let request = SearchRequest::from_parts(&state, &query, &headers).await;
    Ok(Json(request.run(&state).await?))
}

/// GET /search
///
/// Renders the full page. A failed search still renders the page, with an error
/// notice in place of the results and the error's status code.
pub async fn handle_search_page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
    headers: HeaderMap,
) -> Response {
    let request = SearchRequest::from_parts(&state, &query, &headers).await;
    let result = request.run(&state).await;

    let page = |view: PageView<'_>| {
        SearchPage {
            locale: request.locale,
            role: request.role,
            role_override: request.role_override,
            params: &request.params,
            user: request.user.as_ref(),
            view,
            now: Utc::now(),
        }
        .render()
    };

    match &result {
        Ok(outcome) if outcome.login_required => Html(page(PageView::LoginRequired)).into_response(),
        Ok(outcome) => Html(page(PageView::Results(&outcome.results))).into_response(),
        Err(err) => {
            error!("Search page failed ({}): {err}", err.code());
            (err.status(), Html(page(PageView::Failed(failure_notice(err))))).into_response()
        }
    }
}
