use shared::PageResult;
use shared::models::Comment;
use shared::request::CommentQuery;

use super::AdminApi;
use crate::error::ClientResult;
use crate::http::{Ack, HttpClient};

impl<C: HttpClient> AdminApi<C> {
    pub async fn comment_list(&self, query: &CommentQuery) -> ClientResult<PageResult<Comment>> {
        self.http.get_query("/admin/comment/list", query).await
    }

    pub async fn delete_comment(&self, comment_id: i64) -> ClientResult<()> {
        self.http
            .delete::<Ack>(&format!("/admin/comment/{}", comment_id))
            .await?;
        Ok(())
    }
}
