use std::sync::Arc;

use super::{absorb, read_or_default, write_record};
use crate::error::{PersistError, Result};
use crate::store::{KeyValueStore, SEARCH_HISTORY_KEY, SEARCH_LOG_KEY};

/// Default number of recent searches kept
pub const DEFAULT_HISTORY_LIMIT: usize = 5;
/// Default number of entries kept in the analytics search log
pub const DEFAULT_SEARCH_LOG_LIMIT: usize = 200;

/// Recent search terms, most recent first, plus the raw search log
///
/// The history is bounded and de-duplicated. Every accepted search is also
/// appended to a separate bounded log so term frequencies stay meaningful.
#[derive(Clone)]
pub struct SearchHistoryRepository {
    store: Arc<dyn KeyValueStore>,
    max_items: usize,
    log_limit: usize,
}

impl SearchHistoryRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            max_items: DEFAULT_HISTORY_LIMIT,
            log_limit: DEFAULT_SEARCH_LOG_LIMIT,
        }
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn with_log_limit(mut self, log_limit: usize) -> Self {
        self.log_limit = log_limit;
        self
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Recent terms, most recent first
    pub fn list(&self) -> Vec<String> {
        read_or_default(self.store.as_ref(), SEARCH_HISTORY_KEY)
    }

    /// Every recorded search in chronological order, oldest first
    pub fn log(&self) -> Vec<String> {
        read_or_default(self.store.as_ref(), SEARCH_LOG_KEY)
    }

    /// Record `term` using the configured history bound
    pub fn add(&self, term: &str) {
        self.add_with_limit(term, self.max_items);
    }

    pub fn add_with_limit(&self, term: &str, max_items: usize) {
        if let Err((key, e)) = self.record(term, max_items) {
            absorb::<()>(key, "add", Err(e));
        }
    }

    /// Move `term` to the front of the history, truncate to `max_items` and
    /// append it to the search log. Blank terms are ignored.
    ///
    /// On error neither record changes.
    pub fn try_add_with_limit(&self, term: &str, max_items: usize) -> Result<()> {
        self.record(term, max_items).map_err(|(_, e)| e)
    }

    /// Log first, then history. A failed history write puts the previous log
    /// back. Errors carry the key of the record that failed.
    fn record(&self, term: &str, max_items: usize) -> std::result::Result<(), (&'static str, PersistError)> {
        let term = term.trim();
        if term.is_empty() {
            tracing::debug!("ignoring blank search term");
            return Ok(());
        }

        let mut history = self.list();
        history.retain(|existing| existing != term);
        history.insert(0, term.to_string());
        history.truncate(max_items);

        let previous_log = self.store.get(SEARCH_LOG_KEY);
        let mut log = self.log();
        log.push(term.to_string());
        if log.len() > self.log_limit {
            let excess = log.len() - self.log_limit;
            log.drain(..excess);
        }

        write_record(self.store.as_ref(), SEARCH_LOG_KEY, &log).map_err(|e| (SEARCH_LOG_KEY, e))?;

        if let Err(e) = write_record(self.store.as_ref(), SEARCH_HISTORY_KEY, &history) {
            let restored = match &previous_log {
                Ok(Some(raw)) => self.store.set(SEARCH_LOG_KEY, raw),
                Ok(None) => self.store.remove(SEARCH_LOG_KEY),
                // unreadable before, nothing to restore
                Err(_) => Ok(()),
            };
            if let Err(restore_err) = restored {
                tracing::warn!(key = SEARCH_LOG_KEY, error = %restore_err, "could not restore search log");
            }
            return Err((SEARCH_HISTORY_KEY, e));
        }
        Ok(())
    }

    /// Forget the history and the search log
    pub fn clear(&self) {
        absorb(SEARCH_HISTORY_KEY, "clear", self.try_clear());
    }

    pub fn try_clear(&self) -> Result<()> {
        self.store.remove(SEARCH_HISTORY_KEY)?;
        self.store.remove(SEARCH_LOG_KEY)
    }
}
