//! Content served from a local JSON document.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_types::{ContentQuery, ContentRecords};
use indexmap::IndexMap;
use serde_json::Value;

use crate::{ContentError, ContentSource};

/// Records keyed by the backend root field (`"works"`, `"blogs"`, ...).
///
/// Kinds missing from the document yield an empty record set.
#[derive(Debug, Clone, Default)]
pub struct StaticContent {
    origin: Option<PathBuf>,
    documents: IndexMap<String, Value>,
}

impl StaticContent {
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let content = fs::read_to_string(path)?;
        let documents: IndexMap<String, Value> = serde_json::from_str(&content)?;
        Ok(Self {
            origin: Some(path.to_path_buf()),
            documents,
        })
    }

    pub fn from_documents(documents: IndexMap<String, Value>) -> Self {
        Self { origin: None, documents }
    }
}

#[async_trait]
impl ContentSource for StaticContent {
    async fn fetch(&self, query: ContentQuery) -> Result<ContentRecords, ContentError> {
        match self.documents.get(query.root_field()) {
            Some(value) => Ok(ContentRecords::from_value(query, value.clone())?),
            None => Ok(ContentRecords::empty(query)),
        }
    }

    fn describe(&self) -> String {
        match &self.origin {
            Some(path) => format!("static {}", path.display()),
            None => "static (in-memory)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn documents() -> IndexMap<String, Value> {
        let mut documents = IndexMap::new();
        documents.insert(
            "works".to_string(),
            json!([{ "date": "2019 - Present", "title": "Engineer", "company": "Acme", "description": "Built things" }]),
        );
        documents.insert("blogs".to_string(), json!([{ "order": 1, "title": "Hello" }]));
        documents
    }

    #[tokio::test]
    async fn serves_records_by_root_field() {
        let source = StaticContent::from_documents(documents());
        let records = source.fetch(ContentQuery::WorkHistory).await.expect("work history");
        let ContentRecords::WorkHistory(works) = records else {
            panic!("expected work history");
        };
        assert_eq!(works[0].company, "Acme");
    }

    #[tokio::test]
    async fn missing_kind_is_empty() {
        let source = StaticContent::from_documents(documents());
        let records = source.fetch(ContentQuery::AboutClients).await.expect("about clients");
        assert!(records.is_empty());
        assert_eq!(records.query(), ContentQuery::AboutClients);
    }

    #[tokio::test]
    async fn malformed_records_fail_to_decode() {
        // Blog entries require a date.
        let source = StaticContent::from_documents(documents());
        assert!(matches!(source.fetch(ContentQuery::Blogs).await, Err(ContentError::Decode(_))));
    }
}
