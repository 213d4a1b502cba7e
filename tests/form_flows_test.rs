use curation_client::core::controller::{
    LOGIN_FAILED, PREFERENCES_UPDATED, SIGNUP_SUCCESS,
};
use curation_client::domain::model::PREFERENCE_COUNT_MESSAGE;
use curation_client::domain::ports::Page;
use curation_client::utils::error::GENERIC_ALERT;
use curation_client::{Controller, Credentials, Document, Event, HttpBackend, Outcome};
use httpmock::prelude::*;

fn checked(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn controller(server: &MockServer, location: &str) -> Controller<HttpBackend, Document> {
    let backend = HttpBackend::new(&server.base_url()).unwrap();
    Controller::new(backend, Document::at(location)).unwrap()
}

#[tokio::test]
async fn test_signup_success_navigates_to_login() {
    let server = MockServer::start();
    let signup_mock = server.mock(|when, then| {
        when.method(POST).path("/signup").json_body(serde_json::json!({
            "username": "alice",
            "password": "s3cret",
            "preferences": ["1", "2"]
        }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"success": true}));
    });

    let mut app = controller(&server, "/signup");
    let outcome = app
        .dispatch(Event::SubmitSignup {
            credentials: Credentials::new("alice", "s3cret"),
            checked: checked(&["1", "2"]),
        })
        .await;

    signup_mock.assert();
    assert_eq!(outcome, Outcome::Done);
    assert_eq!(app.page().location(), "/login");
    assert_eq!(app.page().last_alert(), Some(SIGNUP_SUCCESS));
}

#[tokio::test]
async fn test_signup_failure_shows_server_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/signup");
        then.status(200).json_body(serde_json::json!({
            "success": false,
            "message": "Username already exists. Please choose a different one."
        }));
    });

    let mut app = controller(&server, "/signup");
    let outcome = app
        .submit_signup(Credentials::new("alice", "pw"), &checked(&["3"]))
        .await;

    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(app.page().location(), "/signup");
    assert_eq!(
        app.page().last_alert(),
        Some("Error during signup: Username already exists. Please choose a different one.")
    );
}

#[tokio::test]
async fn test_signup_preference_count_blocks_request() {
    let server = MockServer::start();
    let signup_mock = server.mock(|when, then| {
        when.method(POST).path("/signup");
        then.status(200).json_body(serde_json::json!({"success": true}));
    });

    let mut app = controller(&server, "/signup");

    let none = app
        .submit_signup(Credentials::new("a", "b"), &[])
        .await;
    let four = app
        .submit_signup(Credentials::new("a", "b"), &checked(&["1", "2", "3", "4"]))
        .await;

    signup_mock.assert_hits(0);
    assert_eq!(none, Outcome::Rejected);
    assert_eq!(four, Outcome::Rejected);
    assert_eq!(
        app.page().alerts(),
        &[
            PREFERENCE_COUNT_MESSAGE.to_string(),
            PREFERENCE_COUNT_MESSAGE.to_string()
        ]
    );
    assert_eq!(app.page().location(), "/signup");
}

#[tokio::test]
async fn test_preferences_count_blocks_request() {
    let server = MockServer::start();
    let prefs_mock = server.mock(|when, then| {
        when.method(POST).path("/change_preferences");
        then.status(200).json_body(serde_json::json!({"success": true}));
    });

    let mut app = controller(&server, "/change_preferences");
    let outcome = app
        .dispatch(Event::SubmitPreferences {
            checked: checked(&["1", "2", "3", "4"]),
        })
        .await;

    prefs_mock.assert_hits(0);
    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(app.page().last_alert(), Some(PREFERENCE_COUNT_MESSAGE));
}

#[tokio::test]
async fn test_preferences_update_uses_default_message() {
    let server = MockServer::start();
    let prefs_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/change_preferences")
            .json_body(serde_json::json!({"preferences": ["2"]}));
        then.status(200).json_body(serde_json::json!({"success": true}));
    });

    let mut app = controller(&server, "/change_preferences");
    let outcome = app.submit_preferences(&checked(&["2"])).await;

    prefs_mock.assert();
    assert_eq!(outcome, Outcome::Done);
    assert_eq!(app.page().last_alert(), Some(PREFERENCES_UPDATED));
}

#[tokio::test]
async fn test_preferences_refusal_shows_server_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/change_preferences");
        then.status(200)
            .json_body(serde_json::json!({"success": false, "message": "User not logged in."}));
    });

    let mut app = controller(&server, "/change_preferences");
    let outcome = app.submit_preferences(&checked(&["1"])).await;

    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(app.page().last_alert(), Some("User not logged in."));
}

#[tokio::test]
async fn test_login_success_navigates_to_dashboard() {
    let server = MockServer::start();
    let login_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/login")
            .json_body(serde_json::json!({"username": "alice", "password": "pw"}));
        then.status(200).json_body(serde_json::json!({"success": true}));
    });

    let mut app = controller(&server, "/login");
    let outcome = app.submit_login(Credentials::new("alice", "pw")).await;

    login_mock.assert();
    assert_eq!(outcome, Outcome::Done);
    assert_eq!(app.page().location(), "/dashboard");
    assert!(app.page().alerts().is_empty());
}

#[tokio::test]
async fn test_login_failure_stays_and_alerts() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(200).json_body(serde_json::json!({
            "success": false,
            "message": "Invalid username or password."
        }));
    });

    let mut app = controller(&server, "/login");
    let outcome = app.submit_login(Credentials::new("alice", "wrong")).await;

    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(app.page().location(), "/login");
    assert!(app.page().history().is_empty());
    assert_eq!(app.page().last_alert(), Some(LOGIN_FAILED));
}

#[tokio::test]
async fn test_missing_route_alerts_generic_message() {
    // No mock registered: the server answers 404 with an empty body.
    let server = MockServer::start();

    let mut app = controller(&server, "/login");
    let outcome = app.submit_login(Credentials::new("alice", "pw")).await;

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(app.page().location(), "/login");
    assert_eq!(app.page().last_alert(), Some(GENERIC_ALERT));
}

#[tokio::test]
async fn test_non_json_reply_alerts_generic_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/signup");
        then.status(500).body("<h1>Internal Server Error</h1>");
    });

    let mut app = controller(&server, "/signup");
    let outcome = app
        .submit_signup(Credentials::new("a", "b"), &checked(&["1"]))
        .await;

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(app.page().last_alert(), Some(GENERIC_ALERT));
}

#[tokio::test]
async fn test_login_connection_refused_alerts_generic_message() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let backend = HttpBackend::new(&format!("http://127.0.0.1:{}", port)).unwrap();
    let mut app = Controller::new(backend, Document::at("/login")).unwrap();
    let outcome = app.submit_login(Credentials::new("alice", "pw")).await;

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(app.page().location(), "/login");
    assert!(app.page().history().is_empty());
    assert_eq!(app.page().last_alert(), Some(GENERIC_ALERT));
}
