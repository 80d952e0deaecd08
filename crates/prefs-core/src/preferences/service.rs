//! Preference service - resolves, validates and persists preference values
//!
//! Glues the frozen registry, the scope resolver and the preference adapter
//! together. Nothing is cached: every read goes to the adapter.

use std::collections::HashMap;
use std::sync::Arc;

use prefs_types::pref_adapter::PreferenceAdapter;

use crate::prelude::*;

use super::registry::FrozenPreferencesRegistry;
use super::resolver;
use super::types::{EffectivePreference, PreferenceView};

/// Preference service - main interface for reading and writing preferences
#[derive(Debug, Clone)]
pub struct PreferenceService {
	registry: Arc<FrozenPreferencesRegistry>,
	adapter: Arc<dyn PreferenceAdapter>,
}

impl PreferenceService {
	pub fn new(registry: Arc<FrozenPreferencesRegistry>, adapter: Arc<dyn PreferenceAdapter>) -> Self {
		Self { registry, adapter }
	}

	/// Get the organization level value (org -> default)
	pub async fn get_org_preference(&self, org_id: &OrgId, key: &str) -> PrResult<EffectivePreference> {
		let def = self.registry.get(key)?;
		if !resolver::enabled_for_scope(def, PrefScope::Org) {
			return Err(Error::Forbidden { key: key.to_string(), scope: PrefScope::Org });
		}

		let stored = self.adapter.read_org_preference(key, org_id).await?;
		let value = resolver::org_value(def, stored.as_ref())?;
		Ok(EffectivePreference { key: def.key.clone(), value })
	}

	/// Validate and store an organization level value
	pub async fn set_org_preference(
		&self,
		org_id: &OrgId,
		key: &str,
		value: PrefValue,
	) -> PrResult<EffectivePreference> {
		let def = self.registry.get(key)?;
		let value = resolver::accept_write(def, PrefScope::Org, value)
			.inspect_err(|err| warn!("Rejected org preference '{}' for org {}: {}", key, org_id, err))?;

		self.adapter.upsert_org_preference(key, org_id, &value).await?;
		info!("Preference '{}' updated for org {}", key, org_id);

		Ok(EffectivePreference { key: def.key.clone(), value })
	}

	/// Get the effective user level value (user -> org -> default)
	pub async fn get_user_preference(
		&self,
		org_id: &OrgId,
		user_id: &UserId,
		key: &str,
	) -> PrResult<EffectivePreference> {
		let def = self.registry.get(key)?;
		if !resolver::enabled_for_scope(def, PrefScope::User) {
			return Err(Error::Forbidden { key: key.to_string(), scope: PrefScope::User });
		}

		let read_org = async {
			if resolver::enabled_for_scope(def, PrefScope::Org) {
				self.adapter.read_org_preference(key, org_id).await
			} else {
				Ok(None)
			}
		};
		let (org, user) =
			tokio::try_join!(read_org, self.adapter.read_user_preference(key, user_id))?;

		let value = resolver::user_value(def, org.as_ref(), user.as_ref())?;
		Ok(EffectivePreference { key: def.key.clone(), value })
	}

	/// Validate and store a user level value
	pub async fn set_user_preference(
		&self,
		user_id: &UserId,
		key: &str,
		value: PrefValue,
	) -> PrResult<EffectivePreference> {
		let def = self.registry.get(key)?;
		let value = resolver::accept_write(def, PrefScope::User, value)
			.inspect_err(|err| warn!("Rejected user preference '{}' for user {}: {}", key, user_id, err))?;

		self.adapter.upsert_user_preference(key, user_id, &value).await?;
		info!("Preference '{}' updated for user {}", key, user_id);

		Ok(EffectivePreference { key: def.key.clone(), value })
	}

	/// List every preference enabled at organization scope with its value
	pub async fn list_org_preferences(&self, org_id: &OrgId) -> PrResult<Vec<PreferenceView>> {
		let org_values = self.adapter.list_org_preferences(org_id).await?;
		debug!("Listing org preferences for {}: {} stored", org_id, org_values.len());
		Ok(resolver::list_all(PrefScope::Org, &self.registry, &org_values, None))
	}

	/// List every preference enabled at user scope with its effective value
	pub async fn list_user_preferences(
		&self,
		org_id: &OrgId,
		user_id: &UserId,
	) -> PrResult<Vec<PreferenceView>> {
		let (org_values, user_values): (HashMap<String, PrefValue>, HashMap<String, PrefValue>) = tokio::try_join!(
			self.adapter.list_org_preferences(org_id),
			self.adapter.list_user_preferences(user_id)
		)?;
		debug!(
			"Listing user preferences for {}: {} org and {} user values stored",
			user_id,
			org_values.len(),
			user_values.len()
		);
		Ok(resolver::list_all(PrefScope::User, &self.registry, &org_values, Some(&user_values)))
	}
}

// vim: ts=4
