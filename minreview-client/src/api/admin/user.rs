use shared::PageResult;
use shared::models::{StatusUpdate, User};
use shared::request::ListQuery;

use super::AdminApi;
use crate::error::ClientResult;
use crate::http::{Ack, HttpClient};

impl<C: HttpClient> AdminApi<C> {
    pub async fn user_list(&self, query: &ListQuery) -> ClientResult<PageResult<User>> {
        self.http.get_query("/admin/user/list", query).await
    }

    /// Enable or ban a site user
    pub async fn update_user_status(&self, user_id: i64, status: i32) -> ClientResult<()> {
        self.http
            .put::<Ack, _>(&format!("/admin/user/status/{}", user_id), &StatusUpdate { status })
            .await?;
        Ok(())
    }

    pub async fn delete_user(&self, user_id: i64) -> ClientResult<()> {
        self.http
            .delete::<Ack>(&format!("/admin/user/{}", user_id))
            .await?;
        Ok(())
    }
}
