use std::{env, path, sync::Arc};

use prefs::prelude::*;
use prefs_pref_adapter_sqlite::PrefAdapterSqlite;

pub struct Config {
	pub listen: String,
	pub db_dir: path::PathBuf,
	pub definitions: Option<path::PathBuf>,
	pub log_filter: String,
}

impl Config {
	fn from_env() -> Self {
		Config {
			listen: env::var("PREFS_LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
			db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or_else(|_| "./data".to_string())),
			definitions: env::var("PREFS_DEFINITIONS").ok().filter(|p| !p.is_empty()).map(path::PathBuf::from),
			log_filter: env::var("PREFS_LOG").unwrap_or_else(|_| "info".to_string()),
		}
	}
}

async fn run(config: Config) -> PrResult<()> {
	prefs::init_logging(&config.log_filter)?;

	tokio::fs::create_dir_all(&config.db_dir).await.map_err(|err| {
		Error::ConfigError(format!("Cannot create DB_DIR {}: {}", config.db_dir.display(), err))
	})?;
	let pref_adapter = Arc::new(PrefAdapterSqlite::new(config.db_dir.join("prefs.db")).await?);

	let mut builder = prefs::AppBuilder::new();
	builder.listen(config.listen).pref_adapter(pref_adapter);
	if let Some(definitions) = config.definitions {
		builder.definitions(definitions);
	}
	builder.run().await
}

#[tokio::main]
async fn main() {
	if let Err(err) = run(Config::from_env()).await {
		eprintln!("prefs: {}", err);
		std::process::exit(1);
	}
}

// vim: ts=4
