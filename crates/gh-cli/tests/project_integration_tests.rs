//! Integration tests for the project commands using wiremock mock server

mod common;

use common::{
    ITEM_ID, OWNER_ID, PROJECT_ID, client, data, forbid_login_queries, graphql, mount_org_login,
    mount_project, mount_user_login, mount_viewer_login,
};

use gh_cli::project::{
    CopyOpts, FieldCreateOpts, FieldDataType, ItemArchiveOpts, run_archive_item, run_copy,
    run_create_field,
};
use gh_cli::queries::OwnerLogin;
use gh_cli::{CommandContext, CommandError, OutputFormat};
use gh_prompt::{Prompter, ScriptedAnswer, ScriptedPrompter};

use serde_json::{Value, json};
use wiremock::{
    MockServer, ResponseTemplate,
    matchers::{body_partial_json, body_string_contains},
};

const ARCHIVE_VARIABLES: &str = r#""variables":{"input":{"projectId":"an ID","itemId":"item ID"}}}"#;

fn archive_opts(owner: OwnerLogin, undo: bool) -> ItemArchiveOpts {
    ItemArchiveOpts {
        owner,
        number: Some(1),
        item_id: String::from(ITEM_ID),
        undo,
        format: None,
    }
}

async fn mount_archive(server: &MockServer, operation: &str, root: &str) {
    graphql(format!("mutation {operation}("))
        .and(body_string_contains(ARCHIVE_VARIABLES))
        .respond_with(data(json!({ root: { "item": { "id": ITEM_ID } } })))
        .expect(1)
        .mount(server)
        .await;
}

async fn run_archive(
    server: &MockServer,
    prompter: Option<&dyn Prompter>,
    opts: &ItemArchiveOpts,
) -> (Result<(), CommandError>, String) {
    let client = client(server);
    let mut out = Vec::new();
    let mut ctx = CommandContext {
        client: &client,
        prompter,
        out: &mut out,
        is_tty: false,
    };
    let result = run_archive_item(&mut ctx, opts).await;
    (result, String::from_utf8(out).unwrap())
}

// =========================================================================
// item-archive
// =========================================================================

#[tokio::test]
async fn test_archive_item_user() {
    let server = MockServer::start().await;
    mount_user_login(&server, "monalisa").await;
    mount_project(&server, "UserProject", "user", Some("monalisa")).await;
    mount_archive(&server, "ArchiveProjectItem", "archiveProjectV2Item").await;

    let opts = archive_opts(OwnerLogin::User(String::from("monalisa")), false);
    let (result, out) = run_archive(&server, None, &opts).await;

    result.unwrap();
    assert_eq!(out, "Archived item\n");
}

#[tokio::test]
async fn test_archive_item_org() {
    let server = MockServer::start().await;
    mount_org_login(&server, "github").await;
    mount_project(&server, "OrgProject", "organization", Some("github")).await;
    mount_archive(&server, "ArchiveProjectItem", "archiveProjectV2Item").await;

    let opts = archive_opts(OwnerLogin::Org(String::from("github")), false);
    let (result, out) = run_archive(&server, None, &opts).await;

    result.unwrap();
    assert_eq!(out, "Archived item\n");
}

#[tokio::test]
async fn test_archive_item_me_uses_viewer_only() {
    let server = MockServer::start().await;
    forbid_login_queries(&server).await;
    mount_viewer_login(&server).await;
    mount_project(&server, "ViewerProject", "viewer", None).await;
    mount_archive(&server, "ArchiveProjectItem", "archiveProjectV2Item").await;

    let opts = archive_opts(OwnerLogin::Viewer, false);
    let (result, out) = run_archive(&server, None, &opts).await;

    result.unwrap();
    assert_eq!(out, "Archived item\n");

    let requests = server.received_requests().await.unwrap();
    let project_query = requests
        .iter()
        .map(|r| serde_json::from_slice::<Value>(&r.body).unwrap())
        .find(|body| body["query"].as_str().unwrap().starts_with("query ViewerProject("))
        .unwrap();
    assert!(project_query["variables"].get("login").is_none());
}

#[tokio::test]
async fn test_unarchive_item_user() {
    let server = MockServer::start().await;
    mount_user_login(&server, "monalisa").await;
    mount_project(&server, "UserProject", "user", Some("monalisa")).await;
    mount_archive(&server, "UnarchiveProjectItem", "unarchiveProjectV2Item").await;

    let opts = archive_opts(OwnerLogin::User(String::from("monalisa")), true);
    let (result, out) = run_archive(&server, None, &opts).await;

    result.unwrap();
    assert_eq!(out, "Unarchived item\n");
}

#[tokio::test]
async fn test_unarchive_item_org() {
    let server = MockServer::start().await;
    mount_org_login(&server, "github").await;
    mount_project(&server, "OrgProject", "organization", Some("github")).await;
    mount_archive(&server, "UnarchiveProjectItem", "unarchiveProjectV2Item").await;

    let opts = archive_opts(OwnerLogin::Org(String::from("github")), true);
    let (result, out) = run_archive(&server, None, &opts).await;

    result.unwrap();
    assert_eq!(out, "Unarchived item\n");
}

#[tokio::test]
async fn test_archive_item_json_output() {
    let server = MockServer::start().await;
    mount_user_login(&server, "monalisa").await;
    mount_project(&server, "UserProject", "user", Some("monalisa")).await;
    graphql("mutation ArchiveProjectItem(")
        .respond_with(data(json!({
            "archiveProjectV2Item": {
                "item": {
                    "id": ITEM_ID,
                    "type": "DRAFT_ISSUE",
                    "content": { "__typename": "DraftIssue", "title": "a title", "body": "" }
                }
            }
        })))
        .mount(&server)
        .await;

    let mut opts = archive_opts(OwnerLogin::User(String::from("monalisa")), false);
    opts.format = Some(OutputFormat::Json);
    let (result, out) = run_archive(&server, None, &opts).await;

    result.unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        json!({ "id": ITEM_ID, "title": "a title", "body": "", "type": "DraftIssue" })
    );
}

#[tokio::test]
async fn test_archive_item_owner_not_found() {
    let server = MockServer::start().await;
    graphql("query UserLogin(")
        .respond_with(data(json!({ "user": null })))
        .mount(&server)
        .await;

    let opts = archive_opts(OwnerLogin::User(String::from("ghost")), false);
    let (result, out) = run_archive(&server, None, &opts).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("NOT_FOUND"));
    assert!(err.to_string().contains("ghost"));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_archive_item_graphql_errors() {
    let server = MockServer::start().await;
    graphql("query UserLogin(")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [
                { "message": "Could not resolve to a User" },
                { "message": "rate limited" }
            ]
        })))
        .mount(&server)
        .await;

    let opts = archive_opts(OwnerLogin::User(String::from("ghost")), false);
    let (result, _) = run_archive(&server, None, &opts).await;

    let err = result.unwrap_err();
    assert!(
        err.to_string()
            .starts_with("GraphQL: Could not resolve to a User, rate limited")
    );
}

#[tokio::test]
async fn test_archive_item_http_error() {
    let server = MockServer::start().await;
    graphql("query UserLogin(")
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials"
        })))
        .mount(&server)
        .await;

    let opts = archive_opts(OwnerLogin::User(String::from("monalisa")), false);
    let (result, _) = run_archive(&server, None, &opts).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Bad credentials"));
    assert!(err.to_string().contains("401"));
}

// =========================================================================
// Owner and project prompting
// =========================================================================

#[tokio::test]
async fn test_archive_item_without_owner_non_interactive() {
    let server = MockServer::start().await;

    let mut opts = archive_opts(OwnerLogin::Unspecified, false);
    opts.number = None;
    let (result, _) = run_archive(&server, None, &opts).await;

    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "owner is required when not running interactively"
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_archive_item_without_number_non_interactive() {
    let server = MockServer::start().await;
    mount_user_login(&server, "monalisa").await;

    let mut opts = archive_opts(OwnerLogin::User(String::from("monalisa")), false);
    opts.number = None;
    let (result, _) = run_archive(&server, None, &opts).await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "project number is required when not running interactively"
    );
}

#[tokio::test]
async fn test_archive_item_prompts_for_owner_and_project() {
    let server = MockServer::start().await;
    graphql("query ViewerLoginAndOrgs(")
        .and(body_partial_json(json!({ "variables": { "first": 100 } })))
        .respond_with(data(json!({
            "viewer": {
                "id": "viewer ID",
                "login": "monalisa",
                "organizations": {
                    "nodes": [
                        { "id": "no ID", "login": "readonly", "viewerCanCreateProjects": false },
                        { "id": OWNER_ID, "login": "github", "viewerCanCreateProjects": true }
                    ],
                    "pageInfo": { "hasNextPage": false, "endCursor": null }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    graphql("query OrgProjects(")
        .and(body_partial_json(json!({ "variables": { "login": "github", "first": 100 } })))
        .respond_with(data(json!({
            "organization": {
                "projectsV2": {
                    "nodes": [
                        { "id": "other ID", "number": 2, "title": "Backlog" },
                        { "id": PROJECT_ID, "number": 1, "title": "Roadmap" }
                    ]
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_archive(&server, "ArchiveProjectItem", "archiveProjectV2Item").await;

    // viewer is listed first, so "github" is at index 1
    let prompter = ScriptedPrompter::new([ScriptedAnswer::Select(1), ScriptedAnswer::Select(1)]);
    let mut opts = archive_opts(OwnerLogin::Unspecified, false);
    opts.number = None;
    let (result, out) = run_archive(&server, Some(&prompter as &dyn Prompter), &opts).await;

    result.unwrap();
    assert_eq!(out, "Archived item\n");
    assert_eq!(
        prompter.asked(),
        vec![
            "Which owner would you like to use?",
            "Which project would you like to use?"
        ]
    );
}

#[tokio::test]
async fn test_archive_item_prompt_with_no_projects() {
    let server = MockServer::start().await;
    mount_user_login(&server, "monalisa").await;
    graphql("query UserProjects(")
        .respond_with(data(json!({ "user": { "projectsV2": { "nodes": [] } } })))
        .mount(&server)
        .await;

    let prompter = ScriptedPrompter::new(Vec::<ScriptedAnswer>::new());
    let mut opts = archive_opts(OwnerLogin::User(String::from("monalisa")), false);
    opts.number = None;
    let (result, _) = run_archive(&server, Some(&prompter as &dyn Prompter), &opts).await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "no projects found for monalisa"
    );
}

#[tokio::test]
async fn test_archive_item_prompt_failure_propagates() {
    let server = MockServer::start().await;
    graphql("query ViewerLoginAndOrgs(")
        .respond_with(data(json!({
            "viewer": {
                "id": "viewer ID",
                "login": "monalisa",
                "organizations": {
                    "nodes": [],
                    "pageInfo": { "hasNextPage": false, "endCursor": null }
                }
            }
        })))
        .mount(&server)
        .await;

    let prompter = ScriptedPrompter::new([ScriptedAnswer::Fail(String::from("stdin closed"))]);
    let opts = archive_opts(OwnerLogin::Unspecified, false);
    let (result, _) = run_archive(&server, Some(&prompter as &dyn Prompter), &opts).await;

    let err = result.unwrap_err();
    assert!(matches!(err, CommandError::Prompt { .. }));
    assert!(err.to_string().starts_with("could not prompt"));
}

// =========================================================================
// copy
// =========================================================================

fn copy_opts(format: Option<OutputFormat>) -> CopyOpts {
    CopyOpts {
        source: OwnerLogin::User(String::from("monalisa")),
        target: OwnerLogin::Org(String::from("github")),
        number: Some(1),
        title: String::from("a title"),
        include_draft_issues: false,
        format,
    }
}

async fn mount_copy(server: &MockServer) {
    mount_user_login(server, "monalisa").await;
    mount_org_login(server, "github").await;
    mount_project(server, "UserProject", "user", Some("monalisa")).await;
    graphql("mutation CopyProjectV2(")
        .and(body_partial_json(json!({
            "variables": {
                "input": {
                    "ownerId": OWNER_ID,
                    "projectId": PROJECT_ID,
                    "title": "a title",
                    "includeDraftIssues": false
                },
                "firstItems": 0,
                "afterItems": null,
                "firstFields": 0,
                "afterFields": null
            }
        })))
        .respond_with(data(json!({
            "copyProjectV2": {
                "projectV2": {
                    "id": "copy ID",
                    "number": 2,
                    "title": "a title",
                    "url": "http://a-url.com",
                    "public": false,
                    "closed": false,
                    "template": false,
                    "items": { "totalCount": 0 },
                    "fields": { "totalCount": 1 },
                    "owner": { "__typename": "Organization", "login": "github" }
                }
            }
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_copy_project_table_output() {
    let server = MockServer::start().await;
    mount_copy(&server).await;

    let client = client(&server);
    let mut out = Vec::new();
    let mut ctx = CommandContext {
        client: &client,
        prompter: None,
        out: &mut out,
        is_tty: false,
    };
    run_copy(&mut ctx, &copy_opts(None)).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Created project copy 'a title'\nhttp://a-url.com\n"
    );
}

#[tokio::test]
async fn test_copy_project_json_output() {
    let server = MockServer::start().await;
    mount_copy(&server).await;

    let client = client(&server);
    let mut out = Vec::new();
    let mut ctx = CommandContext {
        client: &client,
        prompter: None,
        out: &mut out,
        is_tty: false,
    };
    run_copy(&mut ctx, &copy_opts(Some(OutputFormat::Json)))
        .await
        .unwrap();

    let value: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["number"], 2);
    assert_eq!(value["title"], "a title");
    assert_eq!(value["owner"], json!({ "type": "Organization", "login": "github" }));
    assert_eq!(value["fields"], json!({ "totalCount": 1 }));
}

// =========================================================================
// field-create
// =========================================================================

fn field_opts(data_type: FieldDataType, options: &[&str]) -> FieldCreateOpts {
    FieldCreateOpts {
        owner: OwnerLogin::User(String::from("monalisa")),
        number: Some(1),
        name: String::from("a name"),
        data_type,
        single_select_options: options.iter().map(|o| String::from(*o)).collect(),
        format: None,
    }
}

#[tokio::test]
async fn test_create_field_text() {
    let server = MockServer::start().await;
    mount_user_login(&server, "monalisa").await;
    mount_project(&server, "UserProject", "user", Some("monalisa")).await;
    graphql("mutation CreateField(")
        .and(body_string_contains(
            r#""variables":{"input":{"projectId":"an ID","dataType":"TEXT","name":"a name"}}"#,
        ))
        .respond_with(data(json!({
            "createProjectV2Field": {
                "projectV2Field": { "__typename": "ProjectV2Field", "id": "Field ID", "name": "a name" }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut out = Vec::new();
    let mut ctx = CommandContext {
        client: &client,
        prompter: None,
        out: &mut out,
        is_tty: false,
    };
    run_create_field(&mut ctx, &field_opts(FieldDataType::Text, &[]))
        .await
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Created field\n");
}

#[tokio::test]
async fn test_create_field_single_select_json() {
    let server = MockServer::start().await;
    mount_user_login(&server, "monalisa").await;
    mount_project(&server, "UserProject", "user", Some("monalisa")).await;
    graphql("mutation CreateField(")
        .and(body_partial_json(json!({
            "variables": {
                "input": {
                    "projectId": PROJECT_ID,
                    "dataType": "SINGLE_SELECT",
                    "name": "a name",
                    "singleSelectOptions": [
                        { "name": "one", "color": "GRAY" },
                        { "name": "two", "color": "GRAY" }
                    ]
                }
            }
        })))
        .respond_with(data(json!({
            "createProjectV2Field": {
                "projectV2Field": {
                    "__typename": "ProjectV2SingleSelectField",
                    "id": "Field ID",
                    "name": "a name",
                    "options": [
                        { "id": "opt1", "name": "one" },
                        { "id": "opt2", "name": "two" }
                    ]
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut out = Vec::new();
    let mut opts = field_opts(FieldDataType::SingleSelect, &["one", "two"]);
    opts.format = Some(OutputFormat::Json);
    let mut ctx = CommandContext {
        client: &client,
        prompter: None,
        out: &mut out,
        is_tty: false,
    };
    run_create_field(&mut ctx, &opts).await.unwrap();

    let value: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "Field ID",
            "name": "a name",
            "type": "ProjectV2SingleSelectField",
            "options": [
                { "id": "opt1", "name": "one" },
                { "id": "opt2", "name": "two" }
            ]
        })
    );
}
