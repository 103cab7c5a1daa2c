//! Application-level cache of content records, keyed by query.
//!
//! Renderers ask for their queries when they are mounted. A query that is
//! loaded or already in flight is not asked again; a failed one is retried on
//! the next mount.

use std::collections::HashMap;

use folio_types::{ContentQuery, ContentRecords};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum ContentState {
    Loading,
    Ready(ContentRecords),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct ContentCache {
    entries: HashMap<ContentQuery, ContentState>,
}

impl ContentCache {
    /// Marks `query` as loading and returns `true` when a fetch should be
    /// issued for it.
    pub fn request(&mut self, query: ContentQuery) -> bool {
        match self.entries.get(&query) {
            Some(ContentState::Loading | ContentState::Ready(_)) => false,
            Some(ContentState::Failed(_)) | None => {
                debug!(query = %query, "requesting content");
                self.entries.insert(query, ContentState::Loading);
                true
            }
        }
    }

    pub fn store(&mut self, query: ContentQuery, result: Result<ContentRecords, String>) {
        let state = match result {
            Ok(records) => {
                debug!(query = %query, records = records.len(), "content loaded");
                ContentState::Ready(records)
            }
            Err(error) => {
                warn!(query = %query, %error, "content fetch failed");
                ContentState::Failed(error)
            }
        };
        self.entries.insert(query, state);
    }

    pub fn get(&self, query: ContentQuery) -> Option<&ContentState> {
        self.entries.get(&query)
    }

    pub fn records(&self, query: ContentQuery) -> Option<&ContentRecords> {
        match self.entries.get(&query) {
            Some(ContentState::Ready(records)) => Some(records),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_queries_are_not_requested_again() {
        let mut cache = ContentCache::default();
        assert!(cache.request(ContentQuery::Blogs));
        assert!(!cache.request(ContentQuery::Blogs), "in flight");
        assert_eq!(cache.get(ContentQuery::Blogs), Some(&ContentState::Loading));

        cache.store(ContentQuery::Blogs, Ok(ContentRecords::empty(ContentQuery::Blogs)));
        assert!(!cache.request(ContentQuery::Blogs));
        assert!(cache.records(ContentQuery::Blogs).is_some());
    }

    #[test]
    fn failed_queries_are_retried() {
        let mut cache = ContentCache::default();
        cache.request(ContentQuery::WorkHistory);
        cache.store(ContentQuery::WorkHistory, Err("status 502".to_string()));
        assert_eq!(
            cache.get(ContentQuery::WorkHistory),
            Some(&ContentState::Failed("status 502".to_string()))
        );
        assert!(cache.request(ContentQuery::WorkHistory));
        assert_eq!(cache.get(ContentQuery::WorkHistory), Some(&ContentState::Loading));
    }
}
