//! Shared mock-server helpers for the command integration tests

#![allow(dead_code)]

use gh_cli::Client;
use gh_config::ApiEndpoints;

use serde_json::{Value, json};
use wiremock::{
    Mock, MockBuilder, MockServer, ResponseTemplate,
    matchers::{body_partial_json, body_string_contains, method, path},
};

pub const OWNER_ID: &str = "an ID";
pub const PROJECT_ID: &str = "an ID";
pub const ITEM_ID: &str = "item ID";

/// Client whose GraphQL and REST endpoints point at the mock server
pub fn client(server: &MockServer) -> Client {
    Client::new(ApiEndpoints::from_base(&server.uri()), Some("auth-token"))
}

/// `POST /graphql` whose body contains `fragment`
pub fn graphql(fragment: impl Into<String>) -> MockBuilder {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains(fragment))
}

/// 200 response wrapping `data` in a GraphQL envelope
pub fn data(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

pub async fn mount_user_login(server: &MockServer, login: &str) {
    graphql("query UserLogin(")
        .and(body_partial_json(json!({ "variables": { "login": login } })))
        .respond_with(data(json!({ "user": { "id": OWNER_ID, "login": login } })))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_org_login(server: &MockServer, login: &str) {
    graphql("query OrgLogin(")
        .and(body_partial_json(json!({ "variables": { "login": login } })))
        .respond_with(data(json!({ "organization": { "id": OWNER_ID, "login": login } })))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_viewer_login(server: &MockServer) {
    graphql("query ViewerLogin {")
        .respond_with(data(json!({ "viewer": { "id": OWNER_ID } })))
        .expect(1)
        .mount(server)
        .await;
}

/// Owner-scoped `<operation>` query for project 1 with zero-sized pages
pub async fn mount_project(server: &MockServer, operation: &str, root: &str, login: Option<&str>) {
    let mut variables = json!({
        "number": 1,
        "firstItems": 0,
        "afterItems": null,
        "firstFields": 0,
        "afterFields": null
    });
    if let Some(login) = login {
        variables["login"] = json!(login);
    }

    graphql(format!("query {operation}("))
        .and(body_partial_json(json!({ "variables": variables })))
        .respond_with(data(json!({ root: { "projectV2": { "id": PROJECT_ID } } })))
        .expect(1)
        .mount(server)
        .await;
}

/// Fails the test on drop if any login-based owner query is issued
pub async fn forbid_login_queries(server: &MockServer) {
    for operation in ["query UserLogin(", "query OrgLogin("] {
        graphql(operation)
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(server)
            .await;
    }
}
