//! Networking modules for the experiments API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `page_loader` bridges page-request intents to
//! those calls and the shared list state, and `types` defines the wire
//! schema.

pub mod api;
pub mod page_loader;
pub mod types;
