//! Preference subsystem: schema registry, validation and scope resolution
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): definitions, value domains and result views
//! - **Registry** (`registry.rs`): definitions by key, frozen after startup
//! - **Validator** (`validator.rs`): type and domain checks for writes
//! - **Resolver** (`resolver.rs`): default -> org -> user precedence and sanitization
//! - **Definitions** (`definitions.rs`): JSON definition sources
//! - **Service** (`service.rs`): PreferenceService on top of a PreferenceAdapter
//!
//! # Scopes
//!
//! A preference may be enabled at organization scope, user scope, or both.
//! A user read sees the user value if one is stored, otherwise the
//! organization value (only when the preference is enabled at org scope),
//! otherwise the default.

pub mod definitions;
pub mod registry;
pub mod resolver;
pub mod service;
pub mod types;
pub mod validator;

pub use definitions::{builtin_definitions, load_definitions, parse_definitions};
pub use registry::{FrozenPreferencesRegistry, PreferencesRegistry};
pub use service::PreferenceService;
pub use types::{
	Domain, EffectivePreference, PreferenceDefinition, PreferenceDefinitionBuilder,
	PreferenceView, ValueRange,
};

// vim: ts=4
