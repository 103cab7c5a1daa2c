//! GraphQL content backend client.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use folio_types::{ContentQuery, ContentRecords};
use reqwest::{Client, header};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};
use url::Url;

use crate::{ContentError, ContentSource};

/// Hostnames allowed to use plain HTTP.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Thin wrapper around a configured `reqwest::Client` for one GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphQlContentClient {
    endpoint: Url,
    http: Client,
    user_agent: String,
}

impl GraphQlContentClient {
    /// Builds a client for `endpoint`. Non-localhost endpoints must use HTTPS.
    pub fn new(endpoint: &str) -> Result<Self, ContentError> {
        let endpoint = validate_endpoint(endpoint)?;

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            endpoint,
            http,
            user_agent: format!("folio/{}; {}", env!("CARGO_PKG_VERSION"), env::consts::OS),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one GraphQL document and returns its `data` object.
    pub async fn query_data(&self, document: &str) -> Result<Value, ContentError> {
        debug!(endpoint = %self.endpoint, "posting content query");
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(header::USER_AGENT, &self.user_agent)
            .json(&json!({ "query": document }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "content backend rejected query");
            return Err(ContentError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        parse_response(&body)
    }
}

#[async_trait]
impl ContentSource for GraphQlContentClient {
    async fn fetch(&self, query: ContentQuery) -> Result<ContentRecords, ContentError> {
        let mut data = self.query_data(query.graphql()).await?;
        let field = query.root_field();
        let records = data
            .get_mut(field)
            .map(Value::take)
            .ok_or(ContentError::MissingField(field))?;
        Ok(ContentRecords::from_value(query, records)?)
    }

    fn describe(&self) -> String {
        format!("graphql {}", self.endpoint)
    }
}

/// Extracts `data` from a GraphQL response body, surfacing reported errors.
fn parse_response(body: &str) -> Result<Value, ContentError> {
    let response: GraphQlResponse = serde_json::from_str(body)?;
    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|error| error.message).collect();
        return Err(ContentError::GraphQl(messages.join("; ")));
    }
    response.data.ok_or(ContentError::MissingField("data"))
}

/// Validates the endpoint URL.
///
/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS
fn validate_endpoint(endpoint: &str) -> Result<Url, ContentError> {
    let invalid = |reason: String| ContentError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };
    let parsed = Url::parse(endpoint.trim()).map_err(|error| invalid(error.to_string()))?;
    let host = parsed.host_str().ok_or_else(|| invalid("missing host".to_string()))?;

    if LOCALHOST_DOMAINS.iter().any(|allowed| host.eq_ignore_ascii_case(allowed)) {
        return Ok(parsed);
    }
    if parsed.scheme() != "https" {
        return Err(invalid(format!("must use https for non-localhost hosts; got '{}://'", parsed.scheme())));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_rules() {
        assert!(validate_endpoint("https://us-west-2.cdn.hygraph.com/content/abc/master").is_ok());
        assert!(validate_endpoint("http://localhost:4000/graphql").is_ok());
        assert!(validate_endpoint("http://127.0.0.1/graphql").is_ok());
        assert!(matches!(
            validate_endpoint("http://cdn.example.com/graphql"),
            Err(ContentError::InvalidEndpoint { .. })
        ));
        assert!(validate_endpoint("not a url").is_err());
    }

    #[test]
    fn response_errors_are_surfaced() {
        let body = r#"{ "data": null, "errors": [{ "message": "field 'works' unknown" }, { "message": "rate limited" }] }"#;
        match parse_response(body) {
            Err(ContentError::GraphQl(message)) => assert_eq!(message, "field 'works' unknown; rate limited"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn response_data_is_returned() {
        let body = r#"{ "data": { "codingskills": [{ "name": "Rust", "percentage": 90 }] } }"#;
        let data = parse_response(body).expect("data");
        let records = ContentRecords::from_value(ContentQuery::CodingSkills, data["codingskills"].clone()).expect("decode skills");
        assert_eq!(records.len(), 1);
    }
}
