//! API envelope types

use serde::{Deserialize, Serialize};

use prefs_types::types::PrefValue;

/// Successful response body: `{"data": ...}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
	pub data: T,
}

impl<T> ApiResponse<T> {
	pub fn new(data: T) -> Self {
		Self { data }
	}
}

/// Body of a preference update
#[derive(Debug, Deserialize)]
pub struct UpdatePreferenceRequest {
	pub preference_value: PrefValue,
}

// vim: ts=4
