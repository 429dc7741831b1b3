use enroll_core::UserStore;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::spawn_app;

fn jean_dupont() -> serde_json::Value {
    json!({
        "name": "Jean",
        "lastname": "Dupont",
        "mail": "jean@example.com",
        "password": "hunter22",
    })
}

#[tokio::test]
async fn valid_registration_returns_201_without_password() {
    let app = spawn_app().await;

    let response = app.post_user(&jean_dupont()).await;
    assert_eq!(response.status(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    let object = body.as_object().unwrap();

    assert_eq!(object["name"], "Jean");
    assert_eq!(object["lastname"], "Dupont");
    assert_eq!(object["mail"], "jean@example.com");
    assert!(!object.contains_key("password"));

    // the id is a generated UUID
    Uuid::parse_str(object["id"].as_str().unwrap()).unwrap();
}

#[tokio::test]
async fn created_user_is_fetchable_by_the_returned_id() {
    let app = spawn_app().await;

    let response = app.post_user(&jean_dupont()).await;
    let body: serde_json::Value = response.json().await.unwrap();
    let id = Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();

    let stored = app.user_store.get_user_by_id(&id).await.unwrap().unwrap();
    assert_eq!(stored.name.as_str(), "Jean");
    assert_eq!(stored.lastname.as_str(), "Dupont");
    assert_eq!(stored.mail.as_str(), "jean@example.com");
}

#[tokio::test]
async fn invalid_payloads_return_400_with_an_error_body() {
    let app = spawn_app().await;

    let cases = [
        (
            json!({"name": "Jea", "lastname": "Dupont", "mail": "jean@example.com", "password": "hunter22"}),
            "name under 4 characters",
        ),
        (
            json!({"name": "Jean", "lastname": "Dup", "mail": "jean@example.com", "password": "hunter22"}),
            "lastname under 4 characters",
        ),
        (
            json!({"name": "Jean", "lastname": "Dupont", "mail": "jean-example.com", "password": "hunter22"}),
            "mail without an @",
        ),
        (
            json!({"name": "Jean", "lastname": "Dupont", "mail": "jean@example", "password": "hunter22"}),
            "mail without a domain dot",
        ),
        (
            json!({"name": "Jean", "lastname": "Dupont", "mail": "jean@example.com", "password": "hunter2"}),
            "password under 8 characters",
        ),
    ];

    for (payload, description) in cases {
        let response = app.post_user(&payload).await;
        assert_eq!(response.status(), 400, "expected 400 for {description}");

        let body: serde_json::Value = response.json().await.unwrap();
        assert!(
            body["error"].as_str().is_some_and(|e| !e.is_empty()),
            "expected an error message for {description}"
        );
    }

    assert!(app.user_store.get_all_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn registering_the_same_mail_twice_returns_400_and_stores_once() {
    let app = spawn_app().await;

    let first = app.post_user(&jean_dupont()).await;
    assert_eq!(first.status(), 201);

    let second = app.post_user(&jean_dupont()).await;
    assert_eq!(second.status(), 400);

    let body: serde_json::Value = second.json().await.unwrap();
    assert!(body["error"].as_str().is_some());

    assert_eq!(app.user_store.get_all_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn missing_fields_return_400() {
    let app = spawn_app().await;

    let response = app
        .post_user(&json!({"name": "Jean", "lastname": "Dupont", "mail": "jean@example.com"}))
        .await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn malformed_json_body_returns_500() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(format!("{}/api/users", app.address))
        .header("content-type", "application/json")
        .body("not json at all")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().is_some());
}
