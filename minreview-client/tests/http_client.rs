// minreview-client/tests/http_client.rs
// HTTP 客户端集成测试

mod common;

use common::{ADMIN_TOKEN, Harness, USER_TOKEN};
use minreview_client::storage::{ADMIN_TOKEN_KEY, KeyValueStorage, USER_TOKEN_KEY};
use minreview_client::{AdminApi, ApiFlavor, ClientConfig, ClientError, HttpClient, UserApi};
use shared::models::CommentCreate;
use shared::request::ListQuery;
use shared::DishQuery;

fn comment(content: &str) -> CommentCreate {
    CommentCreate {
        dish_id: 7,
        user_id: 5,
        content: content.to_string(),
        avatar_url: String::new(),
        user_name: "小明".to_string(),
    }
}

#[tokio::test]
async fn test_envelope_data_is_unwrapped() {
    let h = Harness::start().await;
    let api = UserApi::new(h.client(ApiFlavor::User));

    let campuses = api.campus_list().await.unwrap();
    assert_eq!(campuses.len(), 2);
    assert_eq!(campuses[0].name, "主校区");
    assert_eq!(campuses[1].address, "");

    let dish = api.dish_detail(7).await.unwrap();
    assert_eq!(dish.id, 7);
    assert_eq!(dish.price.to_string(), "12.5");
}

#[tokio::test]
async fn test_unset_filters_are_not_sent() {
    let h = Harness::start().await;
    let api = UserApi::new(h.client(ApiFlavor::User));

    let query = DishQuery {
        campus_id: Some(1),
        ..DishQuery::page(1, 10)
    };
    let page = api.dish_list(&query).await.unwrap();
    // page, pageSize, campusId
    assert_eq!(page.total, 3);
    assert_eq!(page.list[0].like_count, 3);
}

#[tokio::test]
async fn test_error_envelope_carries_server_message() {
    let h = Harness::start().await;
    let api = UserApi::new(h.client(ApiFlavor::User));

    let err = api.dish_detail(404).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { code: 0, .. }));
    assert_eq!(err.server_message(), Some("菜品不存在"));
}

#[tokio::test]
async fn test_bearer_token_attached_per_flavor() {
    let h = Harness::start().await;
    h.storage.set(USER_TOKEN_KEY, USER_TOKEN).unwrap();
    h.storage.set(ADMIN_TOKEN_KEY, ADMIN_TOKEN).unwrap();

    UserApi::new(h.client(ApiFlavor::User))
        .campus_list()
        .await
        .unwrap();
    assert_eq!(
        h.auth_for("/user/campus/list").as_deref(),
        Some("Bearer user-token")
    );

    AdminApi::new(h.client(ApiFlavor::Admin))
        .user_list(&ListQuery::default())
        .await
        .unwrap();
    assert_eq!(
        h.auth_for("/admin/user/list").as_deref(),
        Some("Bearer admin-token")
    );
}

#[tokio::test]
async fn test_no_header_without_token() {
    let h = Harness::start().await;
    let api = UserApi::new(h.client(ApiFlavor::User));
    assert!(api.http().token().is_none());

    api.campus_list().await.unwrap();
    assert_eq!(h.auth_for("/user/campus/list"), None);
}

#[tokio::test]
async fn test_token_read_at_request_time() {
    let h = Harness::start().await;
    let api = UserApi::new(h.client(ApiFlavor::User));

    api.campus_list().await.unwrap();
    assert_eq!(h.auth_for("/user/campus/list"), None);

    h.storage.set(USER_TOKEN_KEY, USER_TOKEN).unwrap();
    api.campus_list().await.unwrap();
    assert_eq!(
        h.auth_for("/user/campus/list").as_deref(),
        Some("Bearer user-token")
    );
}

#[tokio::test]
async fn test_admin_401_clears_token_and_redirects() {
    let h = Harness::start().await;
    h.storage.set(ADMIN_TOKEN_KEY, ADMIN_TOKEN).unwrap();
    h.storage.set(USER_TOKEN_KEY, USER_TOKEN).unwrap();

    let api = AdminApi::new(h.client(ApiFlavor::Admin));
    let err = api.campus_list(&ListQuery::default()).await.unwrap_err();

    match err {
        ClientError::Unauthorized { redirect } => {
            assert_eq!(redirect.as_deref(), Some("/admin/login"));
        }
        other => panic!("expected Unauthorized, got {other:?}"),
    }
    assert_eq!(h.storage.get(ADMIN_TOKEN_KEY), None);
    // the user session is untouched
    assert_eq!(h.storage.get(USER_TOKEN_KEY).as_deref(), Some(USER_TOKEN));
}

#[tokio::test]
async fn test_user_401_keeps_token() {
    let h = Harness::start().await;
    h.storage.set(USER_TOKEN_KEY, USER_TOKEN).unwrap();

    let api = UserApi::new(h.client(ApiFlavor::User));
    let err = api.get_user_info(5).await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized { redirect: None }));
    assert_eq!(h.storage.get(USER_TOKEN_KEY).as_deref(), Some(USER_TOKEN));
}

#[tokio::test]
async fn test_non_envelope_error_status() {
    let h = Harness::start().await;
    *h.backend.fail_logout.lock() = true;

    let api = UserApi::new(h.client(ApiFlavor::User));
    let err = api.logout().await.unwrap_err();

    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // bind then drop to get a port nothing listens on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let h = Harness::start().await;
    let http = ClientConfig::new(format!("http://127.0.0.1:{port}/api"))
        .with_timeout(2)
        .build_http_client(ApiFlavor::User, h.storage.clone())
        .unwrap();

    let err = UserApi::new(http).campus_list().await.unwrap_err();
    assert!(err.is_network());
    assert_eq!(err.server_message(), None);
    assert_eq!(err.to_string(), minreview_client::error::NETWORK_UNREACHABLE);
}

#[tokio::test]
async fn test_reaction_path_parameters() {
    let h = Harness::start().await;
    let api = UserApi::new(h.client(ApiFlavor::User));
    api.cancel_like(7, 5).await.unwrap();
}

#[tokio::test]
async fn test_comment_rejected_locally() {
    let h = Harness::start().await;
    let api = UserApi::new(h.client(ApiFlavor::User));

    let err = api.add_comment(&comment("你是傻逼")).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    let err = api.add_comment(&comment("   ")).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(h.backend.recorded.lock().comments.is_empty());

    api.add_comment(&comment("红烧肉很好吃")).await.unwrap();
    let comments = h.backend.recorded.lock().comments.clone();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["dishId"], 7);
    assert_eq!(comments[0]["userName"], "小明");
}

#[tokio::test]
async fn test_captcha() {
    let h = Harness::start().await;
    let api = UserApi::new(h.client(ApiFlavor::User));

    let url = api.captcha_image_url();
    let prefix = format!("{}/captcha/image?t=", h.base_url);
    assert!(url.starts_with(&prefix));
    assert!(url[prefix.len()..].parse::<i64>().is_ok());

    api.verify_captcha("abcd").await.unwrap();
    let err = api.verify_captcha("zzzz").await.unwrap_err();
    assert_eq!(err.server_message(), Some("验证码错误"));
}
