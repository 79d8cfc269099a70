//! Pagination control for the experiments table.
//!
//! DESIGN
//! ======
//! The control reports whatever page the user picked and leaves validation
//! to the page loader: previous on page 1 emits page 0, which the loader
//! rejects. Keeping the buttons live while a fetch is in flight means the
//! user can re-page immediately; stale responses are discarded upstream.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::state::experiments::ExperimentsState;

/// Records per page served by the experiments API.
pub const PAGE_SIZE: u64 = 10;

/// How many numbered page buttons to show at once.
const WINDOW: u64 = 5;

/// Number of pages needed for `total` records, never less than one.
pub fn page_count(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// The window of page numbers to render, centered on `current` and clamped
/// to `[1, count]`.
pub fn page_numbers(current: u64, count: u64) -> Vec<u64> {
    if count <= WINDOW {
        return (1..=count).collect();
    }
    let start = current.saturating_sub(WINDOW / 2).max(1).min(count - WINDOW + 1);
    (start..start + WINDOW).collect()
}

/// Page selector showing the current position within the experiment list.
///
/// Emits the selected page through `on_select`; never issues requests
/// itself.
#[component]
pub fn Pagination(experiments: RwSignal<ExperimentsState>, on_select: Callback<u64>) -> impl IntoView {
    let current = move || experiments.get().page;
    let count = move || page_count(experiments.get().total, PAGE_SIZE);

    view! {
        <nav class="pagination" aria-label="Experiment pages">
            <button class="pagination__step" on:click=move |_| on_select.run(current().saturating_sub(1))>
                "‹"
            </button>
            {move || {
                let active = current();
                page_numbers(active, count())
                    .into_iter()
                    .map(|n| {
                        view! {
                            <button
                                class="pagination__page"
                                class:pagination__page--active=(n == active)
                                on:click=move |_| on_select.run(n)
                            >
                                {n}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button class="pagination__step" on:click=move |_| on_select.run(current() + 1)>
                "›"
            </button>
            <span class="pagination__summary">
                {move || format!("Page {} of {} · {} experiments", current(), count(), experiments.get().total)}
            </span>
        </nav>
    }
}
