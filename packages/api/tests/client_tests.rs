//! Integration tests for the HTTP client against a mock backend.

use api::{ApiError, ClientConfig, TaskDraft, TaskPriority, TaskStatus, TaskwellClient};
use tokio_test::assert_ok;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> TaskwellClient {
    TaskwellClient::with_config(ClientConfig {
        base_url: server.uri(),
    })
}

fn task_json(id: i64, title: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": "desc",
        "status": status,
        "priority": "MEDIUM",
        "dueDate": "2025-09-01T12:00:00",
        "category": "WORK",
        "createdAt": "2025-08-20T08:30:00",
        "updatedAt": "2025-08-20T08:30:00",
        "completedAt": null
    })
}

#[tokio::test]
async fn list_tasks_decodes_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            task_json(1, "Task One", "PENDING"),
            task_json(2, "Task Two", "COMPLETE"),
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let tasks = assert_ok!(client.list_tasks().await);
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].title, "Task One");
    assert_eq!(tasks[1].status, TaskStatus::Complete);
}

#[tokio::test]
async fn get_task_maps_404_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("No such task"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_task(99).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "No such task");
}

#[tokio::test]
async fn get_task_maps_403_to_forbidden() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/7"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_task(7).await.unwrap_err();
    assert!(err.is_forbidden());
    // Empty body falls back to the fixed message.
    assert_eq!(err.to_string(), "Failed to fetch task");
}

#[tokio::test]
async fn login_posts_form_encoded_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=alice"))
        .and(body_string_contains("password=Goodpass1%21"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_ok!(client.login("alice", "Goodpass1!").await);
}

#[tokio::test]
async fn register_surfaces_validation_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Username already taken"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .register(&api::NewUser {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "Goodpass1!".into(),
        })
        .await
        .unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Username already taken");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_task_sends_camel_case_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(body_string_contains("\"dueDate\""))
        .and(body_string_contains("\"status\":\"PENDING\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_json(3, "New", "PENDING")))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let draft = TaskDraft {
        title: "New".into(),
        description: None,
        status: TaskStatus::Pending,
        priority: TaskPriority::Low,
        due_date: Some(chrono::Utc::now()),
        category: None,
    };
    let created = assert_ok!(client.create_task(&draft).await);
    assert_eq!(created.id, 3);
}

#[tokio::test]
async fn complete_and_uncomplete_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks/5/complete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(5, "T", "COMPLETE")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/tasks/5/uncomplete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(5, "T", "PENDING")))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let completed = assert_ok!(client.complete_task(5).await);
    assert_eq!(completed.status, TaskStatus::Complete);
    let reopened = assert_ok!(client.uncomplete_task(5).await);
    assert_eq!(reopened.status, TaskStatus::Pending);
}

#[tokio::test]
async fn delete_task_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/4"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_ok!(client.delete_task(4).await);
}

#[tokio::test]
async fn list_categories_decodes_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/categories"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!(["WORK", "HOME", "WORK_TRAVEL"])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let categories = assert_ok!(client.list_categories().await);
    assert_eq!(categories, vec!["WORK", "HOME", "WORK_TRAVEL"]);
}

#[tokio::test]
async fn current_user_decodes_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "username": "alice",
            "email": "alice@example.com",
            "verified": true
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let user = assert_ok!(client.current_user().await);
    assert_eq!(user.username, "alice");
    assert!(user.verified);
}

#[tokio::test]
async fn current_user_maps_401_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.current_user().await.unwrap_err();
    assert!(err.is_unauthorized());
}
