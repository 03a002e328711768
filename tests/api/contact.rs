use portfolio::config::RuntimeMode;
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

use crate::helper::{spawn_app, spawn_app_in, TestApp, OWNER_EMAIL};

const VALID_BODY: &str =
    r#"{"name": "Alice", "email": "alice@x.com", "subject": "Hi", "message": "Hello there"}"#;

const DELIVERY_FAILED: &str =
    "Failed to send message. Please try again later or contact me directly.";

async fn email_api_answers(app: &TestApp, status: u16, expected_calls: u64) {
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_calls)
        .mount(&app.email_server)
        .await;
}

#[tokio::test]
async fn contact_returns_200_for_a_complete_form() {
    let app = spawn_app().await;
    email_api_answers(&app, 200, 2).await;

    let response = app.post_contact(VALID_BODY).await;

    assert_eq!(200, response.status().as_u16());

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Message sent successfully! You will receive a confirmation email shortly."
        })
    );
}

#[tokio::test]
async fn contact_notifies_the_owner_before_acknowledging_the_visitor() {
    let app = spawn_app().await;
    email_api_answers(&app, 200, 2).await;

    app.post_contact(VALID_BODY).await;

    let sent = app.sent_emails().await;
    assert_eq!(sent.len(), 2);

    assert_eq!(sent[0]["To"], OWNER_EMAIL);
    assert_eq!(sent[0]["From"], OWNER_EMAIL);
    assert_eq!(sent[0]["Subject"], "Portfolio Contact: Hi");

    assert_eq!(sent[1]["To"], "alice@x.com");
    assert_eq!(sent[1]["From"], OWNER_EMAIL);
}

#[tokio::test]
async fn the_acknowledgment_echoes_the_visitor_message() {
    let app = spawn_app().await;
    email_api_answers(&app, 200, 2).await;

    let body = json!({
        "name": "Alice",
        "email": "alice@x.com",
        "subject": "Rates & <availability>",
        "message": "Are you free in March?\nThanks!",
    });
    app.post_contact(&body.to_string()).await;

    let sent = app.sent_emails().await;
    let html = sent[1]["HtmlBody"].as_str().unwrap();
    assert!(html.contains("Rates & <availability>"));
    assert!(html.contains("Are you free in March?\nThanks!"));
}

#[tokio::test]
async fn contact_returns_a_400_when_fields_are_missing() {
    let app = spawn_app().await;
    email_api_answers(&app, 200, 0).await;

    let test_cases = [
        (r#"{"email": "a@x.com", "subject": "Hi", "message": "Hi"}"#, "missing the name"),
        (r#"{"name": "Alice", "subject": "Hi", "message": "Hi"}"#, "missing the email"),
        (r#"{"name": "Alice", "email": "a@x.com", "message": "Hi"}"#, "missing the subject"),
        (r#"{"name": "Alice", "email": "a@x.com", "subject": "Hi"}"#, "missing the message"),
        ("{}", "missing every field"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app.post_contact(invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 when the payload was {}",
            error_message
        );

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "All fields are required" }));
    }
}

#[tokio::test]
async fn contact_returns_a_400_when_fields_are_falsy() {
    let app = spawn_app().await;
    email_api_answers(&app, 200, 0).await;

    let test_cases = [
        (r#"{"name": "", "email": "a@x.com", "subject": "Hi", "message": "Hi"}"#, "empty name"),
        (r#"{"name": "Alice", "email": "", "subject": "Hi", "message": "Hi"}"#, "empty email"),
        (r#"{"name": "Alice", "email": "a@x.com", "subject": null, "message": "Hi"}"#, "null subject"),
        (r#"{"name": "Alice", "email": "a@x.com", "subject": "Hi", "message": false}"#, "false message"),
        (r#"{"name": 0, "email": "a@x.com", "subject": "Hi", "message": "Hi"}"#, "zero name"),
    ];

    for (invalid_body, description) in test_cases {
        let response = app.post_contact(invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload had an {}.",
            description
        );
    }
}

#[tokio::test]
async fn contact_returns_a_500_with_details_when_the_email_api_fails() {
    let app = spawn_app_in(RuntimeMode::Development).await;
    email_api_answers(&app, 500, 1).await;

    let response = app.post_contact(VALID_BODY).await;

    assert_eq!(500, response.status().as_u16());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], DELIVERY_FAILED);
    assert!(body["details"]
        .as_str()
        .is_some_and(|details| details.contains("500")));
}

#[tokio::test]
async fn contact_hides_error_details_in_production() {
    let app = spawn_app_in(RuntimeMode::Production).await;
    email_api_answers(&app, 500, 1).await;

    let response = app.post_contact(VALID_BODY).await;

    assert_eq!(500, response.status().as_u16());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": DELIVERY_FAILED }));
}

#[tokio::test]
async fn contact_fails_when_only_the_acknowledgment_cannot_be_sent() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.email_server)
        .await;
    email_api_answers(&app, 500, 1).await;

    let response = app.post_contact(VALID_BODY).await;

    assert_eq!(500, response.status().as_u16());

    let sent = app.sent_emails().await;
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0]["To"], OWNER_EMAIL);
    assert_eq!(sent[1]["To"], "alice@x.com");
}

#[tokio::test]
async fn contact_returns_a_500_for_a_body_that_is_not_json() {
    let app = spawn_app().await;
    email_api_answers(&app, 200, 0).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", &app.addr))
        .header("Content-Type", "application/json")
        .body("name=Alice")
        .send()
        .await
        .expect("The request should succeed.");

    assert_eq!(500, response.status().as_u16());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], DELIVERY_FAILED);
}

#[tokio::test]
async fn contact_accepts_json_sent_as_plain_text() {
    let app = spawn_app().await;
    email_api_answers(&app, 200, 2).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", &app.addr))
        .header("Content-Type", "text/plain;charset=UTF-8")
        .body(VALID_BODY)
        .send()
        .await
        .expect("The request should succeed.");

    assert_eq!(200, response.status().as_u16());
    assert_eq!(app.sent_emails().await.len(), 2);
}

#[tokio::test]
async fn the_acknowledgment_offers_the_owner_phone_numbers() {
    let app = spawn_app().await;
    email_api_answers(&app, 200, 2).await;

    app.post_contact(VALID_BODY).await;

    let sent = app.sent_emails().await;
    let html = sent[1]["HtmlBody"].as_str().unwrap();
    assert!(html.contains("via WhatsApp (+15550100) or phone (+1 555 0100)"));
}
