//! Admin session store
//!
//! The admin token lives under `adminToken` and the whole login response
//! under `adminInfo`. Logout is purely local: the back-office has no server
//! logout endpoint.

use std::sync::Arc;

use shared::client::AdminLoginResponse;

use crate::api::AdminApi;
use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::storage::{ADMIN_INFO_KEY, ADMIN_TOKEN_KEY, KeyValueStorage, StorageExt};

#[derive(Debug)]
pub struct AdminSessionStore<C = NetworkHttpClient> {
    api: AdminApi<C>,
    storage: Arc<dyn KeyValueStorage>,
    admin_info: Option<AdminLoginResponse>,
}

impl<C: HttpClient> AdminSessionStore<C> {
    pub fn new(api: AdminApi<C>, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            api,
            storage,
            admin_info: None,
        }
    }

    /// Load the persisted admin session. Both the token and the profile
    /// must be present.
    pub fn restore(&mut self) -> Option<AdminLoginResponse> {
        self.admin_info = match self.storage.get_non_empty(ADMIN_TOKEN_KEY) {
            Some(_) => self.storage.get_json(ADMIN_INFO_KEY),
            None => None,
        };
        self.admin_info.clone()
    }

    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<&AdminLoginResponse> {
        let info = self.api.login(username, password).await?;

        self.storage.set(ADMIN_TOKEN_KEY, &info.token)?;
        if let Err(e) = self.storage.set_json(ADMIN_INFO_KEY, &info) {
            if let Err(rollback) = self.storage.remove(ADMIN_TOKEN_KEY) {
                tracing::warn!(error = %rollback, "Failed to roll back admin token");
            }
            return Err(e.into());
        }

        tracing::info!(admin_id = info.id, username = %info.username, "Admin logged in");
        Ok(self.admin_info.insert(info))
    }

    pub fn logout(&mut self) -> ClientResult<()> {
        self.admin_info = None;
        let token_removed = self.storage.remove(ADMIN_TOKEN_KEY);
        let info_removed = self.storage.remove(ADMIN_INFO_KEY);
        token_removed?;
        info_removed?;
        tracing::info!("Admin logged out");
        Ok(())
    }

    /// Logged in as far as this store knows. A 401 from the server clears
    /// the stored token; check `storage` too when that matters.
    pub fn is_logged_in(&self) -> bool {
        self.admin_info.is_some()
    }

    pub fn admin_info(&self) -> Option<&AdminLoginResponse> {
        self.admin_info.as_ref()
    }

    pub fn api(&self) -> &AdminApi<C> {
        &self.api
    }
}
