use shared::PageResult;
use shared::models::{Floor, FloorCreate};
use shared::request::FloorQuery;

use super::AdminApi;
use crate::error::ClientResult;
use crate::http::{Ack, HttpClient};

// Floors cannot be edited or disabled, only added and removed.
impl<C: HttpClient> AdminApi<C> {
    pub async fn floor_list(&self, query: &FloorQuery) -> ClientResult<PageResult<Floor>> {
        self.http.get_query("/admin/floor/list", query).await
    }

    pub async fn add_floor(&self, floor: &FloorCreate) -> ClientResult<()> {
        self.http.post::<Ack, _>("/admin/floor", floor).await?;
        Ok(())
    }

    pub async fn delete_floor(&self, floor_id: i64) -> ClientResult<()> {
        self.http
            .delete::<Ack>(&format!("/admin/floor/{}", floor_id))
            .await?;
        Ok(())
    }
}
