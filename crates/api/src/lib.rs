//! Folio content-delivery client.
//!
//! Section renderers get their records through the [`ContentSource`] trait.
//! Two sources are provided:
//!
//! - [`GraphQlContentClient`] POSTs a typed [`ContentQuery`] to a GraphQL
//!   content backend and decodes the matching record list.
//! - [`StaticContent`] serves records from a JSON document keyed by the same
//!   root fields, for offline use and tests.
//!
//! The navigation core never sees any of this; fetch failures are delivered to
//! the renderer that asked for the records and nowhere else. There is no retry
//! policy: a failed query is simply asked again the next time its renderer is
//! mounted.
//!
//! # Example
//!
//! ```ignore
//! use folio_api::{ContentSource, GraphQlContentClient};
//! use folio_types::ContentQuery;
//!
//! let client = GraphQlContentClient::new("https://cdn.example.com/content/master")?;
//! let records = client.fetch(ContentQuery::Blogs).await?;
//! println!("{} blog posts", records.len());
//! ```

mod graphql;
mod static_content;

use std::sync::Arc;

use async_trait::async_trait;
use folio_types::{ContentConfig, ContentQuery, ContentRecords};
use thiserror::Error;
use tracing::debug;

pub use graphql::GraphQlContentClient;
pub use static_content::StaticContent;

/// Errors surfaced by content sources.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("content request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("content backend responded with status {0}")]
    Status(u16),
    #[error("content backend reported errors: {0}")]
    GraphQl(String),
    #[error("content response has no '{0}' field")]
    MissingField(&'static str),
    #[error("content decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("content file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A provider of typed content records.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetches the record set for one query.
    async fn fetch(&self, query: ContentQuery) -> Result<ContentRecords, ContentError>;

    /// Short description used in logs.
    fn describe(&self) -> String;
}

/// Builds the content source described by the site configuration.
///
/// A configured endpoint wins unless `offline` is set; otherwise the static
/// file is used, and without one an empty static source.
pub fn source_from_config(config: &ContentConfig, offline: bool) -> Result<Arc<dyn ContentSource>, ContentError> {
    if !offline && let Some(endpoint) = config.endpoint.as_deref() {
        debug!(endpoint, "using GraphQL content source");
        return Ok(Arc::new(GraphQlContentClient::new(endpoint)?));
    }
    let source = match config.static_path.as_deref() {
        Some(path) => StaticContent::from_path(path)?,
        None => StaticContent::default(),
    };
    debug!(source = %source.describe(), "using static content source");
    Ok(Arc::new(source))
}
