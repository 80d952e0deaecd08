//! HTTP surface of the prefs preference engine.
//!
//! Exposes organization and user preferences over a small JSON API. The
//! caller's organization and user are taken from the `X-Org-Id` and
//! `X-User-Id` request headers.

#![forbid(unsafe_code)]

pub mod app;
pub mod extract;
pub mod handler;
pub mod prelude;
pub mod routes;
pub mod types;

pub use prefs_core::preferences;
pub use prefs_types::{error, pref_adapter};

pub use crate::app::{App, AppBuilder, AppState, init_logging};

// vim: ts=4
