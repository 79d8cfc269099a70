//! Page loader bridging page-request intents to the experiments API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `request_page` is the single entry point through which the view asks for
//! data. It validates the page number, flips the list state to loading,
//! performs the fetch off the render path, and commits the outcome through
//! the state's issue-checked transitions. The view itself never mutates
//! `ExperimentsState`.

#[cfg(test)]
#[path = "page_loader_test.rs"]
mod page_loader_test;

use leptos::prelude::RwSignal;
#[cfg(feature = "hydrate")]
use leptos::prelude::Update;

use crate::state::experiments::ExperimentsState;

/// Request one page of experiments and commit the result into `experiments`.
///
/// Fire-and-forget: the fetch runs as a local async task. Page `0` is
/// rejected without touching state or the network. Responses for requests
/// that have since been superseded are discarded by the state transitions,
/// so the most recently requested page always wins.
pub fn request_page(experiments: RwSignal<ExperimentsState>, page: u64) {
    if !is_valid_page(page) {
        leptos::logging::warn!("ignoring experiments request for page {page}");
        return;
    }

    #[cfg(feature = "hydrate")]
    {
        let Some(issue) = experiments.try_update(|s| s.begin_request()) else {
            return;
        };

        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_experiments(page).await {
                Ok(resp) => {
                    experiments.update(|s| {
                        s.commit_page(issue, page, resp.items, resp.total);
                    });
                }
                Err(message) => {
                    leptos::logging::warn!("experiments page {page} fetch failed: {message}");
                    experiments.update(|s| {
                        s.fail_request(issue, message);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // Server render stays idle; the client issues the real request
        // after hydration.
        let _ = experiments;
    }
}

/// Pages are 1-based; `0` is the only representable invalid request.
pub(crate) fn is_valid_page(page: u64) -> bool {
    page >= 1
}
