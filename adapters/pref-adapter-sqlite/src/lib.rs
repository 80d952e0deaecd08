//! SQLite implementation of the preference adapter

#![forbid(unsafe_code)]

use async_trait::async_trait;
use std::{collections::HashMap, path::Path};

use sqlx::sqlite::{self, SqlitePool};

use prefs::{pref_adapter::PreferenceAdapter, prelude::*};

mod preference;
mod schema;

use preference::{ORG, USER};

#[derive(Debug)]
pub struct PrefAdapterSqlite {
	db: SqlitePool,
}

impl PrefAdapterSqlite {
	/// Open (or create) the database file at `path`
	pub async fn new(path: impl AsRef<Path>) -> PrResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.foreign_keys(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DbError: {:#?}", err))
			.map_err(|err| Error::StoreError(err.to_string()))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DbError: {:#?}", err))
			.map_err(|err| Error::StoreError(err.to_string()))?;

		info!("Preference database opened at {}", path.as_ref().display());
		Ok(Self { db })
	}

	/// Delete an organization together with its preference values
	pub async fn delete_org(&self, org_id: &OrgId) -> PrResult<bool> {
		preference::delete_owner(&self.db, ORG, org_id.as_str()).await
	}

	/// Delete a user together with its preference values
	pub async fn delete_user(&self, user_id: &UserId) -> PrResult<bool> {
		preference::delete_owner(&self.db, USER, user_id.as_str()).await
	}
}

#[async_trait]
impl PreferenceAdapter for PrefAdapterSqlite {
	// Organization scope
	//********************
	async fn read_org_preference(&self, key: &str, org_id: &OrgId) -> PrResult<Option<PrefValue>> {
		preference::read(&self.db, ORG, key, org_id.as_str()).await
	}

	async fn upsert_org_preference(
		&self,
		key: &str,
		org_id: &OrgId,
		value: &PrefValue,
	) -> PrResult<()> {
		preference::upsert(&self.db, ORG, key, org_id.as_str(), value).await
	}

	async fn list_org_preferences(&self, org_id: &OrgId) -> PrResult<HashMap<String, PrefValue>> {
		preference::list(&self.db, ORG, org_id.as_str()).await
	}

	// User scope
	//************
	async fn read_user_preference(
		&self,
		key: &str,
		user_id: &UserId,
	) -> PrResult<Option<PrefValue>> {
		preference::read(&self.db, USER, key, user_id.as_str()).await
	}

	async fn upsert_user_preference(
		&self,
		key: &str,
		user_id: &UserId,
		value: &PrefValue,
	) -> PrResult<()> {
		preference::upsert(&self.db, USER, key, user_id.as_str(), value).await
	}

	async fn list_user_preferences(
		&self,
		user_id: &UserId,
	) -> PrResult<HashMap<String, PrefValue>> {
		preference::list(&self.db, USER, user_id.as_str()).await
	}
}

// vim: ts=4
