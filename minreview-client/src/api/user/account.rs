use serde::{Deserialize, Serialize};
use shared::client::{UploadedUrl, UserCredentials, UserLoginResponse};
use shared::models::UserInfo;

use super::UserApi;
use crate::error::ClientResult;
use crate::http::{Ack, HttpClient, UploadFile};

#[derive(Serialize)]
struct IdQuery {
    id: i64,
}

/// Profile fields the user may change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl<C: HttpClient> UserApi<C> {
    pub async fn login(&self, name: &str, password: &str) -> ClientResult<UserLoginResponse> {
        let req = UserCredentials {
            name: name.to_string(),
            password: password.to_string(),
        };
        self.http.post("/user/login", &req).await
    }

    pub async fn register(&self, name: &str, password: &str) -> ClientResult<()> {
        let req = UserCredentials {
            name: name.to_string(),
            password: password.to_string(),
        };
        self.http.post::<Ack, _>("/user/register", &req).await?;
        Ok(())
    }

    pub async fn logout(&self) -> ClientResult<()> {
        self.http.post_empty::<Ack>("/user/logout").await?;
        Ok(())
    }

    pub async fn get_user_info(&self, id: i64) -> ClientResult<UserInfo> {
        self.http.get_query("/user/personInfo", &IdQuery { id }).await
    }

    pub async fn update_user_info(&self, profile: &ProfileUpdate) -> ClientResult<()> {
        self.http.put::<Ack, _>("/user/personInfo", profile).await?;
        Ok(())
    }

    /// Permanently delete the account
    pub async fn delete_account(&self, id: i64) -> ClientResult<()> {
        self.http
            .delete_query::<Ack, _>("/user/personInfo", &IdQuery { id })
            .await?;
        Ok(())
    }

    /// Upload an avatar or dish image, returns its public URL
    pub async fn upload_image(&self, file: UploadFile) -> ClientResult<UploadedUrl> {
        self.http.upload("/admin/file/upload/image", file).await
    }
}
