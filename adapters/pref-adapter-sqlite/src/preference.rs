//! Preference value store
//!
//! Organization and user values live in two tables of the same shape, keyed
//! by `(preference_id, owner id)`. Values are kept in a text column as JSON,
//! except booleans which are written as `1` / `0`.

use std::collections::HashMap;

use sqlx::{Row, SqlitePool};

use prefs::prelude::*;

/// Table layout of one scope
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScopeTable {
	table: &'static str,
	owner_column: &'static str,
	owner_table: &'static str,
}

pub(crate) const ORG: ScopeTable =
	ScopeTable { table: "org_preference", owner_column: "org_id", owner_table: "organizations" };

pub(crate) const USER: ScopeTable =
	ScopeTable { table: "user_preference", owner_column: "user_id", owner_table: "users" };

fn db_error(err: sqlx::Error) -> Error {
	warn!("DB: {:#?}", err);
	Error::StoreError(err.to_string())
}

/// Textual form of a value
pub(crate) fn encode(value: &PrefValue) -> PrResult<String> {
	match value {
		PrefValue::Bool(b) => Ok(if *b { "1" } else { "0" }.to_string()),
		value => serde_json::to_string(value).map_err(|err| Error::StoreError(err.to_string())),
	}
}

/// Value of a stored text. Text that is not JSON is returned as a plain string.
pub(crate) fn decode(text: String) -> PrefValue {
	serde_json::from_str(&text).unwrap_or(PrefValue::String(text))
}

/// Read a single preference value
pub(crate) async fn read(
	db: &SqlitePool,
	scope: ScopeTable,
	key: &str,
	owner_id: &str,
) -> PrResult<Option<PrefValue>> {
	let query = format!(
		"SELECT preference_value FROM {} WHERE preference_id = ? AND {} = ?",
		scope.table, scope.owner_column
	);
	let row = sqlx::query(&query)
		.bind(key)
		.bind(owner_id)
		.fetch_optional(db)
		.await
		.map_err(db_error)?;

	let Some(row) = row else { return Ok(None) };
	let value: Option<String> = row.try_get("preference_value").map_err(db_error)?;
	Ok(value.map(decode))
}

/// Insert or replace a preference value, registering the owner if needed
pub(crate) async fn upsert(
	db: &SqlitePool,
	scope: ScopeTable,
	key: &str,
	owner_id: &str,
	value: &PrefValue,
) -> PrResult<()> {
	let value = encode(value)?;
	let mut tx = db.begin().await.map_err(db_error)?;

	sqlx::query(&format!("INSERT OR IGNORE INTO {} (id) VALUES (?)", scope.owner_table))
		.bind(owner_id)
		.execute(&mut *tx)
		.await
		.map_err(db_error)?;

	let query = format!(
		"INSERT INTO {table} (preference_id, preference_value, {owner}) VALUES (?, ?, ?)
		ON CONFLICT (preference_id, {owner}) DO UPDATE SET preference_value = excluded.preference_value",
		table = scope.table,
		owner = scope.owner_column
	);
	sqlx::query(&query)
		.bind(key)
		.bind(value)
		.bind(owner_id)
		.execute(&mut *tx)
		.await
		.map_err(db_error)?;

	tx.commit().await.map_err(db_error)
}

/// List all values of an owner
pub(crate) async fn list(
	db: &SqlitePool,
	scope: ScopeTable,
	owner_id: &str,
) -> PrResult<HashMap<String, PrefValue>> {
	let query = format!(
		"SELECT preference_id, preference_value FROM {} WHERE {} = ?",
		scope.table, scope.owner_column
	);
	let rows = sqlx::query(&query).bind(owner_id).fetch_all(db).await.map_err(db_error)?;

	let mut values = HashMap::new();
	for row in rows {
		let key: String = row.try_get("preference_id").map_err(db_error)?;
		let value: Option<String> = row.try_get("preference_value").map_err(db_error)?;
		if let Some(value) = value {
			values.insert(key, decode(value));
		}
	}
	Ok(values)
}

/// Delete an owner; its preference rows go with it
pub(crate) async fn delete_owner(db: &SqlitePool, scope: ScopeTable, owner_id: &str) -> PrResult<bool> {
	let res = sqlx::query(&format!("DELETE FROM {} WHERE id = ?", scope.owner_table))
		.bind(owner_id)
		.execute(db)
		.await
		.map_err(db_error)?;
	Ok(res.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_encode() {
		assert_eq!(encode(&PrefValue::Bool(true)).unwrap(), "1");
		assert_eq!(encode(&PrefValue::Bool(false)).unwrap(), "0");
		assert_eq!(encode(&PrefValue::Int(50)).unwrap(), "50");
		assert_eq!(encode(&PrefValue::Float(0.25)).unwrap(), "0.25");
		assert_eq!(encode(&PrefValue::from("dark")).unwrap(), "\"dark\"");
	}

	#[test]
	fn test_decode() {
		assert_eq!(decode("1".into()), PrefValue::Int(1));
		assert_eq!(decode("4.0".into()), PrefValue::Float(4.0));
		assert_eq!(decode("\"dark\"".into()), PrefValue::from("dark"));
		// Rows written by other tools may hold bare text
		assert_eq!(decode("dark".into()), PrefValue::from("dark"));
	}
}

// vim: ts=4
