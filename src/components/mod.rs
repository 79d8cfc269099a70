//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render table chrome and interaction surfaces while reading
//! shared state handed down from the pages.

pub mod pagination;
pub mod run_table;
