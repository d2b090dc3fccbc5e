// shifts-client/tests/store_flow.rs
// Store actions against a mocked backend

use std::sync::Arc;

use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::{Value, json};
use shifts_client::models::RelatedRef;
use shifts_client::store::LOGIN_OK;
use shifts_client::{
    AppState, ClientConfig, ClientError, FileTokenStore, LoginRequest, MealStore,
    MemoryTokenStore, NetworkHttpClient, StaffStore, TokenStore, UserStore, View,
};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn http(server: &MockServer, tokens: Arc<dyn TokenStore>) -> Arc<NetworkHttpClient> {
    init_tracing();
    let config = ClientConfig::new(server.base_url());
    Arc::new(NetworkHttpClient::with_token_store(&config, tokens).unwrap())
}

fn staff_list_json() -> Value {
    json!([
        {"id": 1, "name": "佐藤", "role": {"id": 1, "name": "介護士"}, "notes": null},
        {"id": 2, "name": "鈴木", "role": {"id": 2, "name": "看護師"}, "notes": "夜勤可"}
    ])
}

#[tokio::test]
async fn login_persists_access_token() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/user/login/")
            .json_body(json!({"name": "alice", "password": "secret"}));
        then.status(200).json_body(json!({
            "code": 200,
            "message": "ログイン成功",
            "data": {
                "access": "tok123",
                "refresh": "ref456",
                "user": {"id": 1, "name": "alice", "email": null, "is_admin": false}
            }
        }));
    });

    let temp_dir = TempDir::new().unwrap();
    let tokens: Arc<dyn TokenStore> =
        Arc::new(FileTokenStore::new(temp_dir.path().join("token.json")));
    let store = UserStore::new(http(&server, tokens.clone()), tokens.clone());
    assert!(!store.is_logged_in());

    let result = store
        .login(&LoginRequest::new("alice", "secret"))
        .await
        .unwrap();

    assert_eq!(result, LOGIN_OK);
    assert_eq!(tokens.get_token().as_deref(), Some("tok123"));
    let state = store.state();
    assert_eq!(state.token.as_deref(), Some("tok123"));
    assert_eq!(state.refresh.as_deref(), Some("ref456"));
    assert_eq!(state.current_user.unwrap().name, "alice");
    mock.assert_calls(1);
}

#[tokio::test]
async fn login_with_bare_token_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/user/login/");
        then.status(200).json_body(json!({"access": "tok123"}));
    });

    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let store = UserStore::new(http(&server, tokens.clone()), tokens.clone());

    assert_eq!(
        store.login(&LoginRequest::new("alice", "secret")).await.unwrap(),
        LOGIN_OK
    );
    assert_eq!(tokens.get_token().as_deref(), Some("tok123"));
}

#[tokio::test]
async fn failed_login_keeps_previous_session() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/user/login/");
        then.status(401)
            .json_body(json!({"code": 401, "message": "認証失敗", "data": "No active account"}));
    });

    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token("old"));
    let store = UserStore::new(http(&server, tokens.clone()), tokens.clone());
    assert!(store.is_logged_in());

    let err = store
        .login(&LoginRequest::new("alice", "wrong"))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(tokens.get_token().as_deref(), Some("old"));
    assert_eq!(store.state().token.as_deref(), Some("old"));
}

#[tokio::test]
async fn logout_and_refresh() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/user/login/");
        then.status(200).json_body(json!({
            "code": 200, "message": "OK",
            "data": {"access": "a1", "refresh": "r1"}
        }));
    });
    let refresh = server.mock(|when, then| {
        when.method(POST)
            .path("/user/token/refresh/")
            .json_body(json!({"refresh": "r1"}));
        then.status(200)
            .json_body(json!({"code": 200, "message": "更新成功", "data": {"access": "a2"}}));
    });

    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let store = UserStore::new(http(&server, tokens.clone()), tokens.clone());

    // Nothing to refresh before login
    assert!(matches!(
        store.refresh_token().await.unwrap_err(),
        ClientError::Unauthorized
    ));

    store.login(&LoginRequest::new("bob", "pw")).await.unwrap();
    store.refresh_token().await.unwrap();
    assert_eq!(tokens.get_token().as_deref(), Some("a2"));
    assert_eq!(store.state().refresh.as_deref(), Some("r1"));
    refresh.assert_calls(1);

    store.logout().unwrap();
    assert!(tokens.get_token().is_none());
    assert!(!store.is_logged_in());
    assert!(store.state().refresh.is_none());
}

#[tokio::test]
async fn success_envelope_replaces_state() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/staff/staffs/");
        then.status(200).json_body(json!({
            "code": 200, "message": "OK", "data": staff_list_json()
        }));
    });

    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token("t"));
    let store = StaffStore::new(http(&server, tokens));
    let mut rx = store.subscribe();

    store.fetch_staff_list().await.unwrap();

    rx.changed().await.unwrap();
    let expected: Vec<shifts_client::models::Staff> =
        serde_json::from_value(staff_list_json()).unwrap();
    assert_eq!(store.state().staff_list, expected);
    assert_eq!(rx.borrow().staff_list, expected);
    mock.assert_calls(1);
}

#[tokio::test]
async fn failure_envelope_leaves_state_unchanged() {
    let server = MockServer::start();
    let mut good = server.mock(|when, then| {
        when.method(GET).path("/staff/staffs/");
        then.status(200).json_body(json!({
            "code": 200, "message": "OK", "data": staff_list_json()
        }));
    });

    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token("t"));
    let store = StaffStore::new(http(&server, tokens));
    store.fetch_staff_list().await.unwrap();
    let before = store.state();
    good.delete();

    server.mock(|when, then| {
        when.method(GET).path("/staff/staffs/");
        then.status(200).json_body(json!({
            "code": 400, "message": "バリデーションエラー", "data": {"name": ["必須"]}
        }));
    });

    let err = store.fetch_staff_list().await.unwrap_err();
    match err {
        ClientError::Api { code, message } => {
            assert_eq!(code, 400);
            assert_eq!(message, "バリデーションエラー");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(store.state(), before);
}

#[tokio::test]
async fn http_error_leaves_state_unchanged() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/staff/staffs/3/");
        then.status(404).json_body(json!({"detail": "Not found."}));
    });

    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token("t"));
    let store = StaffStore::new(http(&server, tokens));

    let err = store.fetch_staff_detail(3).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert_eq!(err.user_message(), "リクエスト先が見つかりません");
    assert!(store.state().staff_detail.is_none());
}

#[tokio::test]
async fn meal_count_scenario() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/meal/meal-orders/count/")
            .query_param("date", "2024-05-01");
        then.status(200)
            .json_body(json!({"朝食": 2, "昼食": 3, "夕食": 1}));
    });

    let temp_dir = TempDir::new().unwrap();
    let config = ClientConfig::new(server.base_url()).with_token_path(temp_dir.path().join("t.json"));
    let app = AppState::new(&config).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

    let count = app.meal.fetch_count(date).await.unwrap();

    assert_eq!(
        serde_json::to_value(count).unwrap(),
        json!({"朝食": 2, "昼食": 3, "夕食": 1})
    );
    assert_eq!(app.meal.state().counts.get(&date), Some(&count));
}

#[tokio::test]
async fn app_state_wires_stores_together() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/user/login/");
        then.status(200)
            .json_body(json!({"code": 200, "message": "OK", "data": {"access": "tok123"}}));
    });
    let guests = server.mock(|when, then| {
        when.method(GET)
            .path("/guest/guests/")
            .header("authorization", "Bearer tok123");
        then.status(200).json_body(json!({
            "code": 200, "message": "OK",
            "data": [{"id": 4, "name": "田中", "birthday": null, "contact": null, "notes": null}]
        }));
    });
    let generate = server.mock(|when, then| {
        when.method(POST).path("/meal/meal-orders/auto-generate/");
        then.status(200)
            .json_body(json!({"code": 200, "message": "OK", "data": null}));
    });

    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let token_path = temp_dir.path().join("auth").join("token.json");
    let config = ClientConfig::new(server.base_url()).with_token_path(&token_path);
    let app = AppState::new(&config).unwrap();

    app.user
        .login(&LoginRequest::new("alice", "secret"))
        .await
        .unwrap();
    app.guest.fetch_guest_list().await.unwrap();
    app.meal
        .auto_generate(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        .await
        .unwrap();

    assert_eq!(app.guest.state().guest_list[0].name, "田中");
    assert_eq!(app.router.resolve("/guest").view(), View::Guest);
    guests.assert_calls(1);
    generate.assert_calls(1);

    // A fresh application instance picks the token up from disk
    drop(app);
    let reopened = AppState::new(&config).unwrap();
    assert!(reopened.user.is_logged_in());
    assert_eq!(reopened.tokens.get_token().as_deref(), Some("tok123"));
}

#[tokio::test]
async fn meal_orders_as_rendered_by_backend() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/meal/meal-orders/");
        then.status(200).json_body(json!([
            {
                "id": 1,
                "date": "2024-05-01",
                "meal_type": {"id": 1, "name": "breakfast", "display_name": "朝食"},
                "guest": "田中",
                "staff": null,
                "ordered": true,
                "auto_generated": true,
                "note": null
            },
            {
                "id": 2,
                "date": "2024-05-01",
                "meal_type": {"id": 3, "name": "dinner", "display_name": "夕食"},
                "guest": null,
                "staff": "佐藤",
                "ordered": false,
                "auto_generated": false,
                "note": "減塩"
            }
        ]));
    });

    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token("t"));
    let store = MealStore::new(http(&server, tokens));

    store.fetch_meal_orders().await.unwrap();

    let orders = store.state().meal_orders;
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].guest, Some(RelatedRef::Name("田中".into())));
    assert_eq!(orders[1].staff.as_ref().and_then(RelatedRef::name), Some("佐藤"));
    assert!(orders[1].weekday.is_none());
    assert_eq!(orders[1].note.as_deref(), Some("減塩"));
}

#[tokio::test]
async fn night_shift_assignment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/staff/assign-night-shift/")
            .json_body(json!({"staff_id": 2, "night_date": "2024-05-10"}));
        then.status(201).json_body(json!({
            "message": "夜勤シフト 3 日分を登録しました。",
            "schedule": [
                {"date": "2024-05-10", "shift": "夜", "created": true},
                {"date": "2024-05-11", "shift": "明", "created": true},
                {"date": "2024-05-12", "shift": "休", "created": true}
            ]
        }));
    });

    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token("t"));
    let store = StaffStore::new(http(&server, tokens));
    let night = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

    let result = store.assign_night_shift(2, night).await.unwrap();

    assert_eq!(result.schedule.len(), 3);
    assert!(result.schedule.iter().all(|d| d.created));
    mock.assert_calls(1);
}

#[tokio::test]
async fn night_shift_rejected_with_error_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/staff/assign-night-shift/");
        then.status(400)
            .json_body(json!({"error": "データが不正です"}));
    });

    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token("t"));
    let store = StaffStore::new(http(&server, tokens));
    let night = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

    match store.assign_night_shift(99, night).await.unwrap_err() {
        ClientError::Status { status, message } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "データが不正です");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(store.state(), Default::default());
}
