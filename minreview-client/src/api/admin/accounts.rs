use shared::PageResult;
use shared::client::{AdminLoginRequest, AdminLoginResponse};
use shared::models::{Admin, AdminCreate, AdminNameUpdate, PasswordUpdate};
use shared::request::AdminQuery;

use super::AdminApi;
use crate::error::ClientResult;
use crate::http::{Ack, HttpClient};

impl<C: HttpClient> AdminApi<C> {
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<AdminLoginResponse> {
        let req = AdminLoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.http.post("/admin/login", &req).await
    }

    pub async fn admin_list(&self, query: &AdminQuery) -> ClientResult<PageResult<Admin>> {
        self.http.get_query("/admin/admin/list", query).await
    }

    pub async fn add_admin(&self, admin: &AdminCreate) -> ClientResult<()> {
        self.http.post::<Ack, _>("/admin/admin", admin).await?;
        Ok(())
    }

    pub async fn update_admin_name(&self, admin_id: i64, name: &str) -> ClientResult<()> {
        let body = AdminNameUpdate {
            name: name.to_string(),
        };
        self.http
            .put::<Ack, _>(&format!("/admin/admin/name/{}", admin_id), &body)
            .await?;
        Ok(())
    }

    pub async fn delete_admin(&self, admin_id: i64) -> ClientResult<()> {
        self.http
            .delete::<Ack>(&format!("/admin/admin/{}", admin_id))
            .await?;
        Ok(())
    }

    /// Status travels in the path for admins, unlike every other resource
    pub async fn update_admin_status(&self, admin_id: i64, status: i32) -> ClientResult<()> {
        self.http
            .put_empty::<Ack>(&format!("/admin/admin/status/{}/{}", admin_id, status))
            .await?;
        Ok(())
    }

    pub async fn update_admin_password(
        &self,
        admin_id: i64,
        passwords: &PasswordUpdate,
    ) -> ClientResult<()> {
        self.http
            .put::<Ack, _>(&format!("/admin/admin/password/{}", admin_id), passwords)
            .await?;
        Ok(())
    }
}
