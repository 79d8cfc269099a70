//! Experiments page listing tracked experiments with expandable run rows.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It requests the first page of experiments
//! once on mount, re-requests through the page loader when the user
//! paginates, and renders everything else as a pure function of
//! `ExperimentsState`.

#[cfg(test)]
#[path = "experiments_test.rs"]
mod experiments_test;

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::pagination::Pagination;
use crate::components::run_table::RunTable;
use crate::net::page_loader::request_page;
use crate::net::types::Experiment;
use crate::state::experiments::ExperimentsState;

fn experiment_href(id: i64) -> String {
    format!("/experiments/{id}")
}

/// Flip one experiment's expansion without touching the others.
fn toggle_expansion(expanded: &mut HashSet<i64>, id: i64) {
    if !expanded.insert(id) {
        expanded.remove(&id);
    }
}

/// Experiments page — paginated table of experiments, each row expandable
/// into its runs.
#[component]
pub fn ExperimentsPage() -> impl IntoView {
    let experiments = expect_context::<RwSignal<ExperimentsState>>();
    let expanded = RwSignal::new(HashSet::<i64>::new());

    // Request the first page once per mount.
    let requested_first = RwSignal::new(false);
    Effect::new(move || {
        if requested_first.get() {
            return;
        }
        request_page(experiments, 1);
        requested_first.set(true);
    });

    let on_page_select = Callback::new(move |page: u64| request_page(experiments, page));

    view! {
        <div class="experiments-page">
            <Title text="Experiments"/>
            <Meta name="description" content="Tracked experiments and their runs."/>

            <header class="experiments-page__header">
                <h1>"Experiments"</h1>
            </header>

            <Show when=move || experiments.get().error.is_some()>
                <p class="experiments-page__error">
                    {move || experiments.get().error.unwrap_or_default()}
                </p>
            </Show>

            <div
                class="experiments-page__table-wrap"
                class:experiments-page__table-wrap--loading=move || experiments.get().loading
            >
                <table class="experiments-page__table">
                    <thead>
                        <tr>
                            <th class="experiments-page__expand-col"></th>
                            <th>"Name"</th>
                            <th>"# of runs"</th>
                            <th>"Version"</th>
                            <th>"Author"</th>
                            <th>"Date"</th>
                            <th>"Tags"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            experiments
                                .get()
                                .items
                                .into_iter()
                                .map(|experiment| {
                                    view! { <ExperimentRow experiment=experiment expanded=expanded/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <Show when=move || experiments.get().loading>
                    <div class="experiments-page__loading">
                        <p>"Loading experiments..."</p>
                    </div>
                </Show>
            </div>

            <Pagination experiments=experiments on_select=on_page_select/>
        </div>
    }
}

/// One experiment row plus its conditional expansion row.
#[component]
fn ExperimentRow(experiment: Experiment, expanded: RwSignal<HashSet<i64>>) -> impl IntoView {
    let Experiment { id, name, version, author, created_at, tags, runs } = experiment;
    let run_count = runs.len();
    let href = experiment_href(id);
    let is_expanded = move || expanded.get().contains(&id);

    let badges = tags
        .into_iter()
        .map(|tag| view! { <span class="experiments-page__tag">{tag}</span> })
        .collect::<Vec<_>>();

    view! {
        <tr class="experiments-page__row">
            <td class="experiments-page__expand-col">
                <button
                    class="experiments-page__expand"
                    on:click=move |_| expanded.update(|set| toggle_expansion(set, id))
                    aria-label="Toggle runs"
                >
                    {move || if is_expanded() { "−" } else { "+" }}
                </button>
            </td>
            <td>
                <a href=href>{name}</a>
            </td>
            <td>{run_count}</td>
            <td>{version}</td>
            <td>{author}</td>
            <td>{created_at}</td>
            <td>{badges}</td>
        </tr>
        <Show when=is_expanded>
            <tr class="experiments-page__expansion">
                <td colspan="7">
                    <RunTable runs=runs.clone()/>
                </td>
            </tr>
        </Show>
    }
}
