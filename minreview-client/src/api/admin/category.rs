use shared::PageResult;
use shared::models::{Category, CategoryForm, StatusUpdate};
use shared::request::ListQuery;

use super::AdminApi;
use crate::error::ClientResult;
use crate::http::{Ack, HttpClient};

impl<C: HttpClient> AdminApi<C> {
    pub async fn category_list(&self, query: &ListQuery) -> ClientResult<PageResult<Category>> {
        self.http.get_query("/admin/category/list", query).await
    }

    pub async fn add_category(&self, form: &CategoryForm) -> ClientResult<()> {
        self.http.post::<Ack, _>("/admin/category", form).await?;
        Ok(())
    }

    /// Partial update: unset form fields are left as they are
    pub async fn update_category(&self, id: i64, form: &CategoryForm) -> ClientResult<()> {
        self.http
            .put::<Ack, _>(&format!("/admin/category/{}", id), form)
            .await?;
        Ok(())
    }

    pub async fn delete_category(&self, id: i64) -> ClientResult<()> {
        self.http
            .delete::<Ack>(&format!("/admin/category/{}", id))
            .await?;
        Ok(())
    }

    pub async fn update_category_status(&self, id: i64, status: i32) -> ClientResult<()> {
        self.http
            .put::<Ack, _>(&format!("/admin/category/status/{}", id), &StatusUpdate { status })
            .await?;
        Ok(())
    }
}
