// minreview-client/tests/common/mod.rs
// 测试用模拟后端

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use minreview_client::storage::KeyValueStorage;
use minreview_client::{ApiFlavor, ClientConfig, MemoryStorage, NetworkHttpClient};
use parking_lot::Mutex;
use serde_json::{Value, json};

pub const USER_TOKEN: &str = "user-token";
pub const ADMIN_TOKEN: &str = "admin-token";

/// What the mock backend has seen
#[derive(Debug, Default)]
pub struct Recorded {
    /// `(path, Authorization header)` per request
    pub auth: Vec<(String, Option<String>)>,
    /// Comment bodies that reached the server
    pub comments: Vec<Value>,
    pub logouts: u32,
    /// Names sent to `/user/register`
    pub registrations: Vec<String>,
}

#[derive(Clone, Default)]
pub struct Backend {
    pub recorded: Arc<Mutex<Recorded>>,
    /// Answer `/user/logout` with a 500
    pub fail_logout: Arc<Mutex<bool>>,
}

fn ok(data: Value) -> Json<Value> {
    Json(json!({ "code": 1, "msg": "success", "data": data }))
}

fn fail(msg: &str) -> Json<Value> {
    Json(json!({ "code": 0, "msg": msg, "data": null }))
}

fn record(backend: &Backend, path: &str, headers: &HeaderMap) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    backend.recorded.lock().auth.push((path.to_string(), auth));
}

async fn campus_list(State(b): State<Backend>, headers: HeaderMap) -> Json<Value> {
    record(&b, "/user/campus/list", &headers);
    ok(json!([
        { "id": 1, "name": "主校区", "address": "学府路 1 号", "status": 1 },
        { "id": 2, "name": "东校区", "status": 1 }
    ]))
}

/// Echoes the query string back as the page total so tests can count
/// which filters were sent
async fn dish_list(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    ok(json!({
        "total": params.len(),
        "list": [{
            "id": 7, "name": "红烧肉", "price": 12.5,
            "canteenId": 1, "campusId": 1, "likeCount": 3
        }]
    }))
}

async fn dish_detail(Path(id): Path<i64>) -> Json<Value> {
    if id == 404 {
        return fail("菜品不存在");
    }
    ok(json!({ "id": id, "name": "红烧肉", "price": 12.5, "canteenId": 1, "campusId": 1 }))
}

async fn user_login(Json(body): Json<Value>) -> Json<Value> {
    if body["password"] != "secret" {
        return fail("用户名或密码错误");
    }
    ok(json!({
        "token": USER_TOKEN,
        "userInfo": { "id": 5, "name": body["name"], "avatarUrl": "http://img/5.png" }
    }))
}

async fn user_register(State(b): State<Backend>, Json(body): Json<Value>) -> Json<Value> {
    let name = body["name"].as_str().unwrap_or_default().to_string();
    if name == "小明" {
        return fail("用户名已存在");
    }
    b.recorded.lock().registrations.push(name);
    ok(Value::Null)
}

async fn user_logout(State(b): State<Backend>, headers: HeaderMap) -> impl IntoResponse {
    record(&b, "/user/logout", &headers);
    b.recorded.lock().logouts += 1;
    if *b.fail_logout.lock() {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream down").into_response();
    }
    ok(Value::Null).into_response()
}

async fn person_info() -> StatusCode {
    StatusCode::UNAUTHORIZED
}

async fn add_comment(State(b): State<Backend>, Json(body): Json<Value>) -> Json<Value> {
    b.recorded.lock().comments.push(body);
    ok(Value::Null)
}

async fn cancel_like(Path((dish_id, user_id)): Path<(i64, i64)>) -> Json<Value> {
    ok(json!({ "dishId": dish_id, "userId": user_id }))
}

async fn captcha_verify(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    match params.get("code").map(String::as_str) {
        Some("abcd") => ok(Value::Null),
        _ => fail("验证码错误"),
    }
}

async fn admin_login(Json(body): Json<Value>) -> Json<Value> {
    if body["username"] != "admin" || body["password"] != "admin123" {
        return fail("账号或密码错误");
    }
    ok(json!({ "token": ADMIN_TOKEN, "id": 1, "username": "admin", "name": "超级管理员" }))
}

async fn admin_campus_list(State(b): State<Backend>, headers: HeaderMap) -> impl IntoResponse {
    record(&b, "/admin/campus/list", &headers);
    StatusCode::UNAUTHORIZED
}

async fn admin_user_list(State(b): State<Backend>, headers: HeaderMap) -> Json<Value> {
    record(&b, "/admin/user/list", &headers);
    ok(json!({ "total": 1, "list": [{ "id": 5, "name": "小明", "status": 1 }] }))
}

impl Backend {
    fn router(&self) -> Router {
        Router::new()
            .route("/api/user/campus/list", get(campus_list))
            .route("/api/user/dish/list", get(dish_list))
            .route("/api/user/dish/detail/{id}", get(dish_detail))
            .route("/api/user/login", post(user_login))
            .route("/api/user/register", post(user_register))
            .route("/api/user/logout", post(user_logout))
            .route("/api/user/personInfo", get(person_info))
            .route("/api/user/comment", post(add_comment))
            .route("/api/user/like/{dish_id}/{user_id}", delete(cancel_like))
            .route("/api/captcha/verify", post(captcha_verify))
            .route("/api/admin/login", post(admin_login))
            .route("/api/admin/campus/list", get(admin_campus_list))
            .route("/api/admin/user/list", get(admin_user_list))
            .with_state(self.clone())
    }

    /// Serve on an ephemeral port, returning the `/api` base URL
    pub async fn spawn(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = self.router();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api", addr)
    }
}

/// Mock backend plus a storage and clients for both flavors
pub struct Harness {
    pub backend: Backend,
    pub base_url: String,
    pub storage: Arc<dyn KeyValueStorage>,
}

impl Harness {
    pub async fn start() -> Self {
        let backend = Backend::default();
        let base_url = backend.spawn().await;
        Self {
            backend,
            base_url,
            storage: Arc::new(MemoryStorage::new()),
        }
    }

    pub fn client(&self, flavor: ApiFlavor) -> NetworkHttpClient {
        ClientConfig::new(&self.base_url)
            .build_http_client(flavor, self.storage.clone())
            .unwrap()
    }

    pub fn auth_for(&self, path: &str) -> Option<String> {
        self.backend
            .recorded
            .lock()
            .auth
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .and_then(|(_, auth)| auth.clone())
    }
}
