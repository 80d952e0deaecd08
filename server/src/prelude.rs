pub use crate::app::App;
pub use prefs_types::prelude::*;

// vim: ts=4
