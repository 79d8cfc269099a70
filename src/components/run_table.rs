//! Nested table of runs shown under an expanded experiment row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Metrics and parameters arrive as nested collections on each run; this
//! component flattens them into `name: value` lines so the expansion reads
//! like a summary rather than raw payloads.

#[cfg(test)]
#[path = "run_table_test.rs"]
mod run_table_test;

use leptos::prelude::*;

use crate::net::types::Run;

fn run_href(uuid: &str) -> String {
    format!("/runs/{uuid}")
}

fn run_label(uuid: &str) -> String {
    format!("Run [{uuid}]")
}

/// Render a named value as a single `name: value` line. String values are
/// shown bare, everything else in its JSON form.
fn kv_line(name: &str, value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => format!("{name}: {text}"),
        other => format!("{name}: {other}"),
    }
}

/// Table of runs for one experiment.
///
/// An experiment without runs renders the header row over an empty body.
#[component]
pub fn RunTable(runs: Vec<Run>) -> impl IntoView {
    view! {
        <table class="run-table">
            <thead>
                <tr>
                    <th>"Run id"</th>
                    <th>"Metrics"</th>
                    <th>"Parameters"</th>
                    <th>"# measurements"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {runs
                    .into_iter()
                    .map(|run| {
                        let metrics = run
                            .metrics
                            .iter()
                            .map(|m| view! { <div class="run-table__metric">{kv_line(&m.name, &m.value)}</div> })
                            .collect::<Vec<_>>();
                        let parameters = run
                            .parameters
                            .iter()
                            .map(|p| view! { <div class="run-table__parameter">{kv_line(&p.name, &p.value)}</div> })
                            .collect::<Vec<_>>();
                        view! {
                            <tr class="run-table__row">
                                <td>
                                    <a href=run_href(&run.uuid)>{run_label(&run.uuid)}</a>
                                </td>
                                <td>{metrics}</td>
                                <td>{parameters}</td>
                                <td>{run.measurements.len()}</td>
                                <td>
                                    // Placeholder action; run deletion is not wired up in
                                    // this view.
                                    <button class="run-table__delete" title="Delete run">
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
