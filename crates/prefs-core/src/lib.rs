//! Preference resolution and validation engine.
//!
//! Holds the schema registry built from a static definition set, the
//! validation rules applied before a write is accepted, and the scope
//! resolution that turns default, organization and user values into one
//! effective value. Persistence is delegated to a
//! [`PreferenceAdapter`](prefs_types::pref_adapter::PreferenceAdapter).

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod preferences;
pub mod prelude;

pub use preferences::{FrozenPreferencesRegistry, PreferenceService};

// vim: ts=4
