use shared::models::{Campus, Canteen, Dish, Floor};
use shared::{DishQuery, PageResult};

use super::UserApi;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl<C: HttpClient> UserApi<C> {
    pub async fn campus_list(&self) -> ClientResult<Vec<Campus>> {
        self.http.get("/user/campus/list").await
    }

    pub async fn canteen_list(&self, campus_id: i64) -> ClientResult<Vec<Canteen>> {
        self.http
            .get(&format!("/user/canteen/list/{}", campus_id))
            .await
    }

    pub async fn floor_list(&self, canteen_id: i64) -> ClientResult<Vec<Floor>> {
        self.http
            .get(&format!("/user/floor/list/{}", canteen_id))
            .await
    }

    pub async fn dish_list(&self, query: &DishQuery) -> ClientResult<PageResult<Dish>> {
        self.http.get_query("/user/dish/list", query).await
    }

    pub async fn dish_detail(&self, dish_id: i64) -> ClientResult<Dish> {
        self.http
            .get(&format!("/user/dish/detail/{}", dish_id))
            .await
    }
}
