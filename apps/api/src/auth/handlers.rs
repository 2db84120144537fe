use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use super::{expired_session_cookie, session_cookie, session_id};
use crate::errors::AppError;
use crate::models::user::{Role, User};
use crate::render::i18n::Locale;
use crate::render::page::SignInPage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: Option<User>,
}

/// Query of `GET /signin`.
#[derive(Debug, Default, Deserialize)]
pub struct SignInPageQuery {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

/// Body of the HTML sign-in form.
#[derive(Debug, Deserialize)]
pub struct SignInForm {
    pub role: String,
    #[serde(default)]
    pub lang: Option<String>,
}

/// Body of the HTML sign-out form.
#[derive(Debug, Default, Deserialize)]
pub struct SignOutForm {
    #[serde(default)]
    pub lang: Option<String>,
}

fn parse_role(code: &str) -> Result<Role, AppError> {
    Role::from_code(code).ok_or_else(|| {
        AppError::Validation(format!("role must be 'seeker' or 'company', got '{code}'"))
    })
}

/// Opens a session for `role` and returns its `Set-Cookie` value with the user.
async fn open_session(state: &AppState, headers: &HeaderMap, role: Role) -> (String, User) {
    let (session, user) = state.auth.sign_in(session_id(headers), role).await;
    (session_cookie(session), user)
}

async fn close_session(state: &AppState, headers: &HeaderMap) {
    if let Some(session) = session_id(headers) {
        state.auth.sign_out(session).await;
    }
}

/// Where the HTML forms land after signing in or out, keeping a supported `lang`.
fn search_location(lang: Option<&str>) -> String {
    match lang.and_then(Locale::from_code) {
        Some(locale) => format!("/search?lang={}", locale.code()),
        None => "/search".to_string(),
    }
}

/// POST /api/v1/auth/signin
pub async fn handle_sign_in(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SignInRequest>,
) -> Result<Response, AppError> {
    let role = parse_role(&request.role)?;
    let (cookie, user) = open_session(&state, &headers, role).await;
    Ok(([(header::SET_COOKIE, cookie)], Json(user)).into_response())
}

/// POST /api/v1/auth/signout
pub async fn handle_sign_out(State(state): State<AppState>, headers: HeaderMap) -> Response {
    close_session(&state, &headers).await;
    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, expired_session_cookie())],
    )
        .into_response()
}

/// GET /api/v1/auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        user: state.auth.current(session_id(&headers)).await,
    })
}

/// GET /signin
pub async fn handle_sign_in_page(
    State(state): State<AppState>,
    Query(query): Query<SignInPageQuery>,
    headers: HeaderMap,
) -> Html<String> {
    let page = SignInPage {
        locale: state.request_locale(query.lang.as_deref(), &headers),
        selected: query
            .role
            .as_deref()
            .and_then(Role::from_code)
            .unwrap_or(Role::Seeker),
    };
    Html(page.render())
}

/// POST /signin (form-encoded), then back to the search page.
pub async fn handle_sign_in_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SignInForm>,
) -> Result<Response, AppError> {
    let role = parse_role(&form.role)?;
    let (cookie, _) = open_session(&state, &headers, role).await;
    Ok((
        [(header::SET_COOKIE, cookie)],
        Redirect::to(&search_location(form.lang.as_deref())),
    )
        .into_response())
}

/// POST /signout (form-encoded), then back to the search page.
pub async fn handle_sign_out_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SignOutForm>,
) -> Response {
    close_session(&state, &headers).await;
    (
        [(header::SET_COOKIE, expired_session_cookie())],
        Redirect::to(&search_location(form.lang.as_deref())),
    )
        .into_response()
}
