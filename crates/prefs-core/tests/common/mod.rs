//! Common test utilities and helpers
//!
//! In-memory preference adapter that counts writes, plus definition fixtures.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use prefs_core::preferences::{FrozenPreferencesRegistry, PreferenceDefinition, PreferenceService};
use prefs_types::pref_adapter::PreferenceAdapter;
use prefs_types::prelude::*;

#[derive(Debug, Default)]
pub struct MemoryAdapter {
	org: Mutex<HashMap<(String, OrgId), PrefValue>>,
	user: Mutex<HashMap<(String, UserId), PrefValue>>,
	writes: AtomicUsize,
	fail: bool,
}

impl MemoryAdapter {
	/// Adapter whose every call fails with a store error
	pub fn failing() -> Self {
		Self { fail: true, ..Self::default() }
	}

	pub fn writes(&self) -> usize {
		self.writes.load(Ordering::SeqCst)
	}

	/// Put a raw value into the org table, bypassing validation
	pub fn seed_org(&self, key: &str, org_id: &OrgId, value: PrefValue) {
		self.org.lock().insert((key.to_string(), org_id.clone()), value);
	}

	/// Put a raw value into the user table, bypassing validation
	pub fn seed_user(&self, key: &str, user_id: &UserId, value: PrefValue) {
		self.user.lock().insert((key.to_string(), user_id.clone()), value);
	}

	fn check(&self) -> PrResult<()> {
		if self.fail { Err(Error::StoreError("connection refused".into())) } else { Ok(()) }
	}
}

#[async_trait]
impl PreferenceAdapter for MemoryAdapter {
	async fn read_org_preference(&self, key: &str, org_id: &OrgId) -> PrResult<Option<PrefValue>> {
		self.check()?;
		Ok(self.org.lock().get(&(key.to_string(), org_id.clone())).cloned())
	}

	async fn upsert_org_preference(&self, key: &str, org_id: &OrgId, value: &PrefValue) -> PrResult<()> {
		self.check()?;
		self.writes.fetch_add(1, Ordering::SeqCst);
		self.org.lock().insert((key.to_string(), org_id.clone()), value.clone());
		Ok(())
	}

	async fn list_org_preferences(&self, org_id: &OrgId) -> PrResult<HashMap<String, PrefValue>> {
		self.check()?;
		Ok(self
			.org
			.lock()
			.iter()
			.filter(|((_, id), _)| id == org_id)
			.map(|((key, _), value)| (key.clone(), value.clone()))
			.collect())
	}

	async fn read_user_preference(&self, key: &str, user_id: &UserId) -> PrResult<Option<PrefValue>> {
		self.check()?;
		Ok(self.user.lock().get(&(key.to_string(), user_id.clone())).cloned())
	}

	async fn upsert_user_preference(&self, key: &str, user_id: &UserId, value: &PrefValue) -> PrResult<()> {
		self.check()?;
		self.writes.fetch_add(1, Ordering::SeqCst);
		self.user.lock().insert((key.to_string(), user_id.clone()), value.clone());
		Ok(())
	}

	async fn list_user_preferences(&self, user_id: &UserId) -> PrResult<HashMap<String, PrefValue>> {
		self.check()?;
		Ok(self
			.user
			.lock()
			.iter()
			.filter(|((_, id), _)| id == user_id)
			.map(|((key, _), value)| (key.clone(), value.clone()))
			.collect())
	}
}

pub fn definitions() -> Vec<PreferenceDefinition> {
	vec![
		PreferenceDefinition::builder("MAX_ALERTS")
			.name("Maximum alerts")
			.value_type(ValueType::Integer)
			.default(10)
			.range(1, 100)
			.scope(PrefScope::Org)
			.build()
			.expect("MAX_ALERTS"),
		PreferenceDefinition::builder("WELCOME_DONE")
			.value_type(ValueType::Boolean)
			.default(false)
			.allowed_values([PrefValue::Bool(true), PrefValue::Bool(false)])
			.scope(PrefScope::User)
			.build()
			.expect("WELCOME_DONE"),
		PreferenceDefinition::builder("THEME")
			.default("light")
			.allowed_values([PrefValue::from("light"), PrefValue::from("dark"), PrefValue::from("system")])
			.scopes([PrefScope::Org, PrefScope::User])
			.build()
			.expect("THEME"),
		PreferenceDefinition::builder("LOGS_PAGE_SIZE")
			.default(100)
			.range(10, 1000)
			.scopes([PrefScope::Org, PrefScope::User])
			.build()
			.expect("LOGS_PAGE_SIZE"),
	]
}

pub fn create_test_service() -> (PreferenceService, Arc<MemoryAdapter>) {
	let adapter = Arc::new(MemoryAdapter::default());
	let registry = Arc::new(FrozenPreferencesRegistry::load(definitions()).expect("registry"));
	(PreferenceService::new(registry, adapter.clone()), adapter)
}

pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::DEBUG).try_init();
}

// vim: ts=4
