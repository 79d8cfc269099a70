//! Experiment-list state for the paginated experiments view.
//!
//! DESIGN
//! ======
//! All mutations go through the transition methods below, and the page
//! loader is their only caller. Each transition carries the issue number
//! handed out by `begin_request`, so a response that arrives after a newer
//! request was issued is discarded instead of overwriting fresher data
//! (last-issued-wins).

#[cfg(test)]
#[path = "experiments_test.rs"]
mod experiments_test;

use crate::net::types::Experiment;

/// Shared list state for the experiments table.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentsState {
    /// Experiments on the current page.
    pub items: Vec<Experiment>,
    /// True while a page request is in flight.
    pub loading: bool,
    /// Page of the most recently committed fetch, 1-based.
    pub page: u64,
    /// Total number of experiments across all pages.
    pub total: u64,
    /// Message from the most recent failed fetch, cleared on the next request.
    pub error: Option<String>,
    /// Issue number of the most recent `begin_request`.
    pub last_issued: u64,
}

impl Default for ExperimentsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            page: 1,
            total: 0,
            error: None,
            last_issued: 0,
        }
    }
}

impl ExperimentsState {
    /// Mark a new page request as in flight and return its issue number.
    ///
    /// Loaded rows stay visible while the request runs; only the loading
    /// flag and error banner change.
    pub fn begin_request(&mut self) -> u64 {
        self.last_issued += 1;
        self.loading = true;
        self.error = None;
        self.last_issued
    }

    /// Commit a successful page response.
    ///
    /// Returns `false` (leaving the state untouched) when `issue` is not
    /// the most recently issued request.
    pub fn commit_page(&mut self, issue: u64, page: u64, items: Vec<Experiment>, total: u64) -> bool {
        if issue != self.last_issued {
            return false;
        }
        self.items = items;
        self.total = total;
        self.page = page;
        self.loading = false;
        self.error = None;
        true
    }

    /// Record a failed page request.
    ///
    /// Previously committed `items`/`total`/`page` are kept so the view can
    /// show the error next to the last good data. Stale failures are
    /// ignored the same way stale commits are.
    pub fn fail_request(&mut self, issue: u64, message: String) -> bool {
        if issue != self.last_issued {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }
}
