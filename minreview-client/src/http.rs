// minreview-client/src/http.rs
// HTTP 客户端 - 网络通信

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiResponse;

use crate::config::ApiFlavor;
use crate::error::{ClientError, ClientResult};
use crate::storage::KeyValueStorage;

/// Payload type for calls whose `data` is ignored
pub type Ack = serde::de::IgnoredAny;

/// A file sent as multipart form data
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

/// HTTP 客户端 trait
///
/// Every method resolves with the envelope's `data` when `code == 1` and
/// fails with [`ClientError::Api`] otherwise.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn get_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn delete_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T>;
    async fn upload<T: DeserializeOwned>(&self, path: &str, file: UploadFile) -> ClientResult<T>;
    fn base_url(&self) -> &str;
    fn token(&self) -> Option<String>;
}

/// 网络 HTTP 客户端
///
/// The token is read from storage on every request, so a login or logout
/// performed through any handle sharing the storage applies immediately.
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    flavor: ApiFlavor,
    storage: Arc<dyn KeyValueStorage>,
}

impl NetworkHttpClient {
    pub fn new(
        base_url: &str,
        flavor: ApiFlavor,
        timeout_secs: u64,
        storage: Arc<dyn KeyValueStorage>,
    ) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            flavor,
            storage,
        })
    }

    pub fn flavor(&self) -> ApiFlavor {
        self.flavor
    }

    pub fn storage(&self) -> &Arc<dyn KeyValueStorage> {
        &self.storage
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.client.request(method, self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        req
    }

    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = match req.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "API request failed without response");
                return Err(ClientError::Network(e));
            }
        };
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        tracing::debug!(url = %response.url(), status = %status, "API response");

        if status == StatusCode::UNAUTHORIZED {
            return Err(self.unauthorized());
        }

        let text = response.text().await?;
        if !status.is_success() {
            // 尝试解析为 API 错误响应
            if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(&text) {
                return Err(ClientError::Api {
                    code: envelope.code,
                    msg: envelope.message().to_string(),
                });
            }
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("not an API envelope: {e}")))?;
        if !envelope.is_success() {
            return Err(ClientError::Api {
                code: envelope.code,
                msg: envelope.message().to_string(),
            });
        }

        let data = envelope.data.unwrap_or(serde_json::Value::Null);
        serde_json::from_value(data)
            .map_err(|e| ClientError::InvalidResponse(format!("unexpected data: {e}")))
    }

    fn unauthorized(&self) -> ClientError {
        let redirect = self.flavor.unauthorized_redirect();
        if redirect.is_some() {
            let key = self.flavor.token_key();
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(key = %key, error = %e, "Failed to drop rejected token");
            }
            tracing::warn!("Session rejected by server, token cleared");
        }
        ClientError::Unauthorized {
            redirect: redirect.map(str::to_string),
        }
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.execute(self.request(Method::GET, path)).await
    }

    async fn get_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::GET, path).query(query)).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::POST, path).json(body)).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.execute(self.request(Method::POST, path)).await
    }

    async fn post_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::POST, path).query(query)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::PUT, path).json(body)).await
    }

    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.execute(self.request(Method::PUT, path)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    async fn delete_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::DELETE, path).query(query)).await
    }

    async fn upload<T: DeserializeOwned>(&self, path: &str, file: UploadFile) -> ClientResult<T> {
        let mut part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(mime) = file.mime {
            part = part.mime_str(&mime)?;
        }
        let form = reqwest::multipart::Form::new().part("file", part);
        self.execute(self.request(Method::POST, path).multipart(form)).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn token(&self) -> Option<String> {
        self.storage.get(self.flavor.token_key()).filter(|t| !t.is_empty())
    }
}
