use shared::PageResult;
use shared::models::{Campus, CampusForm, StatusUpdate};
use shared::request::ListQuery;

use super::AdminApi;
use crate::error::ClientResult;
use crate::http::{Ack, HttpClient};

impl<C: HttpClient> AdminApi<C> {
    pub async fn campus_list(&self, query: &ListQuery) -> ClientResult<PageResult<Campus>> {
        self.http.get_query("/admin/campus/list", query).await
    }

    pub async fn add_campus(&self, form: &CampusForm) -> ClientResult<()> {
        self.http.post::<Ack, _>("/admin/campus", form).await?;
        Ok(())
    }

    /// Full replacement: the form carries every editable field
    pub async fn update_campus(&self, campus_id: i64, form: &CampusForm) -> ClientResult<()> {
        self.http
            .put::<Ack, _>(&format!("/admin/campus/{}", campus_id), form)
            .await?;
        Ok(())
    }

    pub async fn delete_campus(&self, campus_id: i64) -> ClientResult<()> {
        self.http
            .delete::<Ack>(&format!("/admin/campus/{}", campus_id))
            .await?;
        Ok(())
    }

    pub async fn update_campus_status(&self, campus_id: i64, status: i32) -> ClientResult<()> {
        self.http
            .put::<Ack, _>(
                &format!("/admin/campus/status/{}", campus_id),
                &StatusUpdate { status },
            )
            .await?;
        Ok(())
    }
}
