//! Database schema initialization
//!
//! Preference rows reference their owning organization or user, so deleting
//! the owner cascades to its preference values.

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables and indexes
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Owners
	//********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS organizations (
		id text NOT NULL,
		created_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS users (
		id text NOT NULL,
		created_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Preferences
	//*************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS org_preference (
		preference_id text NOT NULL,
		preference_value text,
		org_id text NOT NULL,
		PRIMARY KEY(preference_id, org_id),
		FOREIGN KEY(org_id)
			REFERENCES organizations(id)
			ON UPDATE CASCADE
			ON DELETE CASCADE
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_org_preference_org ON org_preference(org_id)")
		.execute(&mut *tx)
		.await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS user_preference (
		preference_id text NOT NULL,
		preference_value text,
		user_id text NOT NULL,
		PRIMARY KEY(preference_id, user_id),
		FOREIGN KEY(user_id)
			REFERENCES users(id)
			ON UPDATE CASCADE
			ON DELETE CASCADE
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_user_preference_user ON user_preference(user_id)")
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;
	Ok(())
}

// vim: ts=4
