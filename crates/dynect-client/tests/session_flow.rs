//! Wire-level tests for the login → list → logout sequence against a mock
//! API server.

use dynect_client::{DynectClient, DynectError, Session};
use dynect_core::{Credentials, Severity};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "5cba9dad0b8efef3380e87b6ad0aec20";

fn credentials() -> Credentials {
    Credentials::new("acme", "admin", "hunter2").unwrap()
}

fn client_for(server: &MockServer) -> DynectClient {
    DynectClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn success_body(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status": "success",
        "data": data,
        "msgs": [],
    }))
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/REST/Session/"))
        .respond_with(success_body(json!({ "token": TOKEN, "version": "3.7.13" })))
        .mount(server)
        .await;
}

async fn login(server: &MockServer) -> Session {
    client_for(server).login(&credentials()).await.unwrap()
}

#[tokio::test]
async fn login_posts_credentials_with_empty_token_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/REST/Session/"))
        .and(header("Content-Type", "application/json"))
        .and(header("Auth-Token", ""))
        .and(body_json(json!({
            "customer_name": "acme",
            "user_name": "admin",
            "password": "hunter2",
        })))
        .respond_with(success_body(json!({ "token": TOKEN })))
        .expect(1)
        .mount(&server)
        .await;

    let session = login(&server).await;
    assert_eq!(session.token(), TOKEN);
}

#[tokio::test]
async fn token_is_sent_verbatim_on_subsequent_calls() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/REST/Zone/"))
        .and(header("Auth-Token", TOKEN))
        .respond_with(success_body(json!([
            "/REST/Zone/example.com/",
            "/REST/Zone/test.org/",
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let session = login(&server).await;
    let zones = session.list_zones().await.unwrap();
    let names: Vec<&str> = zones.iter().map(dynect_core::Zone::name).collect();
    assert_eq!(names, ["example.com", "test.org"]);
}

#[tokio::test]
async fn login_failure_carries_diagnostics_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/REST/Session/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "failure",
            "data": null,
            "msgs": [
                {"LVL": "ERROR", "ERR_CD": "INVALID_DATA", "SOURCE": "API-B",
                 "INFO": "login: Bad or expired credentials"},
                {"LVL": "INFO", "ERR_CD": null, "SOURCE": "BLL",
                 "INFO": "login: There was a problem with your credentials"},
            ],
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login(&credentials())
        .await
        .unwrap_err();

    let msgs = err.messages();
    assert_eq!(msgs.len(), 2);
    assert_eq!(msgs[0].level, Severity::Error);
    assert_eq!(msgs[0].error_code.as_deref(), Some("INVALID_DATA"));
    assert_eq!(msgs[1].level, Severity::Info);
    assert_eq!(msgs[1].source, "BLL");
}

#[tokio::test]
async fn malformed_zone_path_is_a_data_error() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/REST/Zone/"))
        .respond_with(success_body(json!([
            "/REST/Zone/example.com/",
            "/REST/Zone/broken",
        ])))
        .mount(&server)
        .await;

    let session = login(&server).await;
    assert!(matches!(
        session.list_zones().await,
        Err(DynectError::InvalidZonePath(_))
    ));
}

#[tokio::test]
async fn list_nodes_scopes_the_request_to_the_zone() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/REST/Zone/"))
        .respond_with(success_body(json!(["/REST/Zone/example.com/"])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/REST/NodeList/example.com/"))
        .and(header("Auth-Token", TOKEN))
        .respond_with(success_body(json!(["example.com", "www.example.com"])))
        .expect(1)
        .mount(&server)
        .await;

    let session = login(&server).await;
    let zones = session.list_zones().await.unwrap();
    let nodes = session.list_nodes(&zones[0]).await.unwrap();
    assert_eq!(nodes, ["example.com", "www.example.com"]);
}

#[tokio::test]
async fn logout_deletes_the_session_once() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/REST/Session/"))
        .and(header("Auth-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {},
            "msgs": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = login(&server).await;
    session.logout().await.unwrap();
}

#[tokio::test]
async fn non_2xx_body_is_still_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/REST/Session/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "failure",
            "data": null,
            "msgs": [
                {"LVL": "ERROR", "ERR_CD": "MISSING_DATA", "SOURCE": "API-B",
                 "INFO": "customer_name: required field missing"},
            ],
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login(&credentials())
        .await
        .unwrap_err();

    assert!(err.is_api_failure());
    assert_eq!(err.messages()[0].error_code.as_deref(), Some("MISSING_DATA"));
}

#[tokio::test]
async fn unparseable_body_is_a_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/REST/Session/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway error</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login(&credentials())
        .await
        .unwrap_err();

    assert!(matches!(err, DynectError::Json(_)));
}

#[tokio::test]
async fn success_without_token_is_missing_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/REST/Session/"))
        .respond_with(success_body(json!(null)))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login(&credentials())
        .await
        .unwrap_err();

    assert!(matches!(err, DynectError::MissingData { .. }));
}
