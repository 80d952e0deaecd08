//! Shared types, adapter traits, and error types for the prefs engine.
//!
//! This crate holds everything the resolution core, the storage adapters and
//! the HTTP server have to agree on. Keeping it separate lets adapter crates
//! compile without pulling in the core or the server.

#![forbid(unsafe_code)]

pub mod error;
pub mod pref_adapter;
pub mod prelude;
pub mod types;

// vim: ts=4
