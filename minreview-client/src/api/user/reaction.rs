use shared::models::DishReaction;

use super::UserApi;
use crate::error::ClientResult;
use crate::http::{Ack, HttpClient};

impl<C: HttpClient> UserApi<C> {
    pub async fn like_dish(&self, dish_id: i64, user_id: i64) -> ClientResult<()> {
        let body = DishReaction { dish_id, user_id };
        self.http.post::<Ack, _>("/user/like", &body).await?;
        Ok(())
    }

    pub async fn cancel_like(&self, dish_id: i64, user_id: i64) -> ClientResult<()> {
        self.http
            .delete::<Ack>(&format!("/user/like/{}/{}", dish_id, user_id))
            .await?;
        Ok(())
    }

    pub async fn dislike_dish(&self, dish_id: i64, user_id: i64) -> ClientResult<()> {
        let body = DishReaction { dish_id, user_id };
        self.http.post::<Ack, _>("/user/dislike", &body).await?;
        Ok(())
    }

    pub async fn cancel_dislike(&self, dish_id: i64, user_id: i64) -> ClientResult<()> {
        self.http
            .delete::<Ack>(&format!("/user/dislike/{}/{}", dish_id, user_id))
            .await?;
        Ok(())
    }
}
