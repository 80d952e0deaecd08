//! Adapter that persists preference values per organization and per user.
//!
//! Rows are keyed by `(preference key, scope instance id)`. Implementations own
//! the lifecycle of the rows: the core only reads and upserts them, removal
//! happens when the owning organization or user is deleted.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait PreferenceAdapter: Debug + Send + Sync {
	// Organization scope
	//********************
	/// Reads the organization level value of a preference, `None` if not set
	async fn read_org_preference(&self, key: &str, org_id: &OrgId) -> PrResult<Option<PrefValue>>;

	/// Inserts or replaces the organization level value of a preference
	async fn upsert_org_preference(
		&self,
		key: &str,
		org_id: &OrgId,
		value: &PrefValue,
	) -> PrResult<()>;

	/// Lists all values stored for an organization, keyed by preference key
	async fn list_org_preferences(&self, org_id: &OrgId) -> PrResult<HashMap<String, PrefValue>>;

	// User scope
	//************
	async fn read_user_preference(
		&self,
		key: &str,
		user_id: &UserId,
	) -> PrResult<Option<PrefValue>>;

	async fn upsert_user_preference(
		&self,
		key: &str,
		user_id: &UserId,
		value: &PrefValue,
	) -> PrResult<()>;

	async fn list_user_preferences(&self, user_id: &UserId)
	-> PrResult<HashMap<String, PrefValue>>;
}

// vim: ts=4
