use shared::PageResult;
use shared::models::{Dish, DishCreate, DishUpdate, StatusUpdate};
use shared::request::DishQuery;

use super::AdminApi;
use crate::error::ClientResult;
use crate::http::{Ack, HttpClient};

impl<C: HttpClient> AdminApi<C> {
    pub async fn dish_list(&self, query: &DishQuery) -> ClientResult<PageResult<Dish>> {
        self.http.get_query("/admin/dish/list", query).await
    }

    pub async fn add_dish(&self, form: &DishCreate) -> ClientResult<()> {
        self.http.post::<Ack, _>("/admin/dish", form).await?;
        Ok(())
    }

    pub async fn update_dish(&self, id: i64, form: &DishUpdate) -> ClientResult<()> {
        self.http
            .put::<Ack, _>(&format!("/admin/dish/{}", id), form)
            .await?;
        Ok(())
    }

    pub async fn delete_dish(&self, id: i64) -> ClientResult<()> {
        self.http
            .delete::<Ack>(&format!("/admin/dish/{}", id))
            .await?;
        Ok(())
    }

    /// Disabled dishes disappear from the user-facing list
    pub async fn update_dish_status(&self, id: i64, status: i32) -> ClientResult<()> {
        self.http
            .put::<Ack, _>(&format!("/admin/dish/status/{}", id), &StatusUpdate { status })
            .await?;
        Ok(())
    }
}
