//! Mock authentication. Each browser gets its own signed-in user, keyed by the id
//! in its `session` cookie. Sessions live in memory only; nothing is persisted.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::HeaderMap;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::cookies::request_cookie;
use crate::models::user::{Role, User};

pub const SESSION_COOKIE: &str = "session";

#[derive(Clone, Default)]
pub struct AuthContext {
    sessions: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs in as `role` without checking credentials and opens a new session.
    /// A previous session of the same client is closed first.
    pub async fn sign_in(&self, previous: Option<Uuid>, role: Role) -> (Uuid, User) {
        let user = User::mock(role);
        let session = Uuid::new_v4();

        let mut sessions = self.sessions.write().await;
        if let Some(previous) = previous {
            sessions.remove(&previous);
        }
        sessions.insert(session, user.clone());
        info!("Mock sign-in as {} ({})", role.as_str(), user.email);

        (session, user)
    }

    /// Closes a session. Unknown sessions are ignored.
    pub async fn sign_out(&self, session: Uuid) -> Option<User> {
        let user = self.sessions.write().await.remove(&session);
        if let Some(user) = &user {
            info!("Signed out {}", user.email);
        }
        user
    }

    pub async fn current(&self, session: Option<Uuid>) -> Option<User> {
        let session = session?;
        self.sessions.read().await.get(&session).cloned()
    }
}

/// Session id from the request's `session` cookie. Malformed ids count as none.
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    let raw = request_cookie(headers, SESSION_COOKIE)?;
    match Uuid::parse_str(raw) {
        Ok(id) => Some(id),
        Err(e) => {
            debug!("Ignoring malformed session cookie: {e}");
            None
        }
    }
}

/// `Set-Cookie` value for a new session.
pub fn session_cookie(session: Uuid) -> String {
    format!("{SESSION_COOKIE}={session}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value that removes the session cookie.
pub fn expired_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};

    #[tokio::test]
    async fn test_starts_signed_out() {
        let auth = AuthContext::new();
        assert!(auth.current(None).await.is_none());
        assert!(auth.current(Some(Uuid::new_v4())).await.is_none());
    }

    #[tokio::test]
    async fn test_sign_in_sets_role_and_email() {
        let auth = AuthContext::new();
        let (session, user) = auth.sign_in(None, Role::Company).await;
        assert_eq!(user.role, Role::Company);
        assert_eq!(user.email, "company@example.com");
        assert_eq!(auth.current(Some(session)).await, Some(user));
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let auth = AuthContext::new();
        let (company, _) = auth.sign_in(None, Role::Company).await;
        let (seeker, _) = auth.sign_in(None, Role::Seeker).await;

        assert_eq!(auth.current(Some(company)).await.map(|u| u.role), Some(Role::Company));
        assert_eq!(auth.current(Some(seeker)).await.map(|u| u.role), Some(Role::Seeker));
        assert!(auth.current(None).await.is_none());
    }

    #[tokio::test]
    async fn test_sign_in_closes_previous_session() {
        let auth = AuthContext::new();
        let (first, _) = auth.sign_in(None, Role::Company).await;
        let (second, seeker) = auth.sign_in(Some(first), Role::Seeker).await;

        assert!(auth.current(Some(first)).await.is_none());
        assert_eq!(auth.current(Some(second)).await.map(|u| u.id), Some(seeker.id));
    }

    #[tokio::test]
    async fn test_sign_out_is_idempotent_and_shared_across_clones() {
        let auth = AuthContext::new();
        let handle = auth.clone();
        let (session, _) = auth.sign_in(None, Role::Seeker).await;
        assert!(handle.current(Some(session)).await.is_some());

        assert!(handle.sign_out(session).await.is_some());
        assert!(handle.sign_out(session).await.is_none());
        assert!(auth.current(Some(session)).await.is_none());
    }

    #[test]
    fn test_session_id_from_cookie() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("lang=en; session={id}")).unwrap(),
        );
        assert_eq!(session_id(&headers), Some(id));

        headers.insert(header::COOKIE, HeaderValue::from_static("session=not-a-uuid"));
        assert_eq!(session_id(&headers), None);
        assert_eq!(session_id(&HeaderMap::new()), None);
    }

    #[test]
    fn test_session_cookie_round_trips() {
        let id = Uuid::new_v4();
        let set_cookie = session_cookie(id);
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(set_cookie.split(';').next().unwrap()).unwrap(),
        );
        assert_eq!(session_id(&headers), Some(id));
        assert!(expired_session_cookie().contains("Max-Age=0"));
    }
}
