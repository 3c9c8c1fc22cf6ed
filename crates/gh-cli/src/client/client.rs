use crate::{CliClientResult, ClientError};

use gh_config::ApiEndpoints;

use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const USER_AGENT_VALUE: &str = concat!("gh-cli/", env!("CARGO_PKG_VERSION"));
const REST_ACCEPT: &str = "application/vnd.github+json";

/// Variables for documents that take none; serializes as `{}`
#[derive(Debug, Serialize)]
pub struct NoVariables {}

#[derive(Serialize)]
struct GraphQlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: &'a V,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorItem>,
}

#[derive(Deserialize)]
struct GraphQlErrorItem {
    message: String,
}

/// HTTP client for the platform's GraphQL and REST APIs
pub struct Client {
    pub endpoints: ApiEndpoints,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `endpoints` - GraphQL and REST base URLs for the target host
    /// * `token` - Optional token sent as a bearer `Authorization` header
    pub fn new(endpoints: ApiEndpoints, token: Option<&str>) -> Self {
        Self {
            endpoints,
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request with auth and user agent headers
    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .request(method, url)
            .header(USER_AGENT, USER_AGENT_VALUE);

        if let Some(ref token) = self.token {
            req = req.header(AUTHORIZATION, format!("bearer {token}"));
        }

        req
    }

    // =========================================================================
    // GraphQL
    // =========================================================================

    /// Run a named GraphQL query and decode its `data`
    pub async fn query<V, T>(&self, operation: &str, document: &str, variables: &V) -> CliClientResult<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        debug!("graphql query {operation}");
        self.graphql(document, variables).await
    }

    /// Run a named GraphQL mutation and decode its `data`
    pub async fn mutate<V, T>(&self, operation: &str, document: &str, variables: &V) -> CliClientResult<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        debug!("graphql mutation {operation}");
        self.graphql(document, variables).await
    }

    async fn graphql<V, T>(&self, document: &str, variables: &V) -> CliClientResult<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = GraphQlRequest {
            query: document,
            variables,
        };
        let req = self
            .request(Method::POST, &self.endpoints.graphql)
            .json(&body);

        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_str(),
                error_message(&text).unwrap_or_else(|| status.to_string()),
            ));
        }

        let parsed: GraphQlResponse<T> = serde_json::from_str(&text)?;
        if !parsed.errors.is_empty() {
            return Err(ClientError::graphql(
                parsed.errors.iter().map(|e| e.message.as_str()),
            ));
        }

        parsed
            .data
            .ok_or_else(|| ClientError::api_error("NO_DATA", "GraphQL response contained no data"))
    }

    // =========================================================================
    // REST
    // =========================================================================

    /// Send a REST request relative to the REST endpoint.
    ///
    /// Empty success bodies (204) decode to `Value::Null`.
    pub async fn rest<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> CliClientResult<Value> {
        let url = rest_url(&self.endpoints.rest, path);
        debug!("rest {method} {url}");

        let mut req = self.request(method, &url).header(ACCEPT, REST_ACCEPT);
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_str(),
                error_message(&text).unwrap_or_else(|| status.to_string()),
            ));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Join a REST base (ending in '/') with a path, absolute URLs pass through
pub(crate) fn rest_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Pull `message` out of an error body, if it is JSON
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(String::from)
}
