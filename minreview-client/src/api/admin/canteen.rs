use shared::PageResult;
use shared::models::{Canteen, CanteenCreate, CanteenUpdate, StatusUpdate};
use shared::request::CanteenQuery;

use super::AdminApi;
use crate::error::ClientResult;
use crate::http::{Ack, HttpClient};

impl<C: HttpClient> AdminApi<C> {
    /// Filterable by campus; `page`/`pageSize` omitted returns the server default page
    pub async fn canteen_list(&self, query: &CanteenQuery) -> ClientResult<PageResult<Canteen>> {
        self.http.get_query("/admin/canteen/list", query).await
    }

    pub async fn add_canteen(&self, form: &CanteenCreate) -> ClientResult<()> {
        self.http.post::<Ack, _>("/admin/canteen", form).await?;
        Ok(())
    }

    pub async fn update_canteen(&self, id: i64, form: &CanteenUpdate) -> ClientResult<()> {
        self.http
            .put::<Ack, _>(&format!("/admin/canteen/{}", id), form)
            .await?;
        Ok(())
    }

    pub async fn delete_canteen(&self, id: i64) -> ClientResult<()> {
        self.http
            .delete::<Ack>(&format!("/admin/canteen/{}", id))
            .await?;
        Ok(())
    }

    pub async fn update_canteen_status(&self, id: i64, status: i32) -> ClientResult<()> {
        self.http
            .put::<Ack, _>(&format!("/admin/canteen/status/{}", id), &StatusUpdate { status })
            .await?;
        Ok(())
    }
}
