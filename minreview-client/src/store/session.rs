//! User session store
//!
//! Two states: anonymous (no token) and authenticated (token + profile).
//! The session survives restarts through durable storage under the
//! `token` / `userInfo` keys.
//!
//! Logout contract: the server is told first, best effort. Whatever it
//! answers, the local session is cleared afterwards, because a token the
//! server may already have revoked must never be kept.

use std::sync::Arc;

use shared::client::UserLoginResponse;
use shared::models::UserInfo;

use crate::api::UserApi;
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpClient, NetworkHttpClient};
use crate::storage::{KeyValueStorage, StorageExt, USER_INFO_KEY, USER_TOKEN_KEY};

/// Logged-in user
#[derive(Debug, Clone, PartialEq)]
pub struct UserSession {
    pub token: String,
    pub user_info: UserInfo,
}

/// User session store
#[derive(Debug)]
pub struct SessionStore<C = NetworkHttpClient> {
    api: UserApi<C>,
    storage: Arc<dyn KeyValueStorage>,
    session: Option<UserSession>,
}

impl<C: HttpClient> SessionStore<C> {
    /// Create an anonymous store. Call [`SessionStore::restore`] once at
    /// startup to pick up a persisted session.
    pub fn new(api: UserApi<C>, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            api,
            storage,
            session: None,
        }
    }

    /// Load the persisted session, if any. A token without a readable
    /// profile still counts as logged in, with an empty profile.
    pub fn restore(&mut self) -> Option<UserSession> {
        self.session = self
            .storage
            .get_non_empty(USER_TOKEN_KEY)
            .map(|token| UserSession {
                token,
                user_info: self.storage.get_json(USER_INFO_KEY).unwrap_or_default(),
            });

        if let Some(session) = &self.session {
            tracing::debug!(user_id = session.user_info.id, "User session restored");
        }
        self.session.clone()
    }

    /// Log in and persist the session. On failure the store stays anonymous
    /// and the server message is carried by the error.
    pub async fn login(&mut self, name: &str, password: &str) -> ClientResult<&UserSession> {
        tracing::debug!(name = %name, "Sending login request");
        let UserLoginResponse { token, user_info } = match self.api.login(name, password).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "Login failed");
                return Err(e);
            }
        };
        if token.is_empty() {
            return Err(ClientError::InvalidResponse("login returned no token".into()));
        }

        self.storage.set(USER_TOKEN_KEY, &token)?;
        if let Err(e) = self.storage.set_json(USER_INFO_KEY, &user_info) {
            // A token without its profile would restore as logged in
            if let Err(rollback) = self.storage.remove(USER_TOKEN_KEY) {
                tracing::warn!(error = %rollback, "Failed to roll back session token");
            }
            return Err(e.into());
        }

        tracing::info!(user_id = user_info.id, "User logged in");
        Ok(self.session.insert(UserSession { token, user_info }))
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, name: &str, password: &str) -> ClientResult<()> {
        tracing::debug!(name = %name, "Sending register request");
        self.api.register(name, password).await.inspect_err(|e| {
            tracing::warn!(name = %name, error = %e, "Register failed");
        })
    }

    /// Tell the server, then always clear the local session. Only a storage
    /// failure is reported; a failed server call is logged and ignored.
    pub async fn logout(&mut self) -> ClientResult<()> {
        if let Err(e) = self.api.logout().await {
            tracing::warn!(error = %e, "Server logout failed, clearing local session anyway");
        }

        self.session = None;
        let token_removed = self.storage.remove(USER_TOKEN_KEY);
        let info_removed = self.storage.remove(USER_INFO_KEY);
        token_removed?;
        info_removed?;

        tracing::info!("User logged out");
        Ok(())
    }

    // ========== Getters ==========

    pub fn session(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// 0 when anonymous
    pub fn user_id(&self) -> i64 {
        self.session.as_ref().map_or(0, |s| s.user_info.id)
    }

    pub fn user_name(&self) -> &str {
        self.session
            .as_ref()
            .map_or("", |s| s.user_info.name.as_str())
    }

    pub fn avatar_url(&self) -> &str {
        self.session
            .as_ref()
            .map_or("", |s| s.user_info.avatar_url.as_str())
    }

    pub fn api(&self) -> &UserApi<C> {
        &self.api
    }
}
