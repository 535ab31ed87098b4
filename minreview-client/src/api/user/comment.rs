use shared::PageResult;
use shared::models::{Comment, CommentCreate};
use shared::request::CommentQuery;

use super::UserApi;
use crate::error::{ClientError, ClientResult};
use crate::http::{Ack, HttpClient};

impl<C: HttpClient> UserApi<C> {
    pub async fn comments(&self, query: &CommentQuery) -> ClientResult<PageResult<Comment>> {
        self.http.get_query("/user/comment/list", query).await
    }

    /// Post a comment. Content flagged by the profanity filter is rejected
    /// locally and never reaches the server.
    pub async fn add_comment(&self, comment: &CommentCreate) -> ClientResult<()> {
        if comment.content.trim().is_empty() {
            return Err(ClientError::Validation("comment is empty".into()));
        }
        if self.filter.contains_profanity(&comment.content) {
            tracing::debug!(dish_id = comment.dish_id, "Comment rejected by content filter");
            return Err(ClientError::Validation(
                "comment contains inappropriate language".into(),
            ));
        }
        self.http.post::<Ack, _>("/user/comment", comment).await?;
        Ok(())
    }

    pub async fn delete_comment(&self, comment_id: i64) -> ClientResult<()> {
        self.http
            .delete::<Ack>(&format!("/user/comment/{}", comment_id))
            .await?;
        Ok(())
    }
}
