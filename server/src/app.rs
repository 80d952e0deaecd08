//! App builder - constructs and runs the preference server

use std::{path::Path, sync::Arc};

use tracing_subscriber::EnvFilter;

use prefs_core::preferences::{
	PreferenceService, PreferencesRegistry, builtin_definitions, load_definitions,
};
use prefs_types::pref_adapter::PreferenceAdapter;

use crate::prelude::*;
use crate::routes;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	pub definitions: Option<Box<Path>>,
}

#[derive(Debug)]
pub struct AppState {
	pub opts: AppBuilderOpts,
	pub preferences: PreferenceService,
}

pub type App = Arc<AppState>;

/// Install the global log subscriber. `filter` applies when `RUST_LOG` is not set.
pub fn init_logging(filter: &str) -> PrResult<()> {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.try_init()
		.map_err(|err| Error::ConfigError(format!("Cannot initialize logging: {}", err)))
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	pref_adapter: Option<Arc<dyn PreferenceAdapter>>,
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:8080".into(),
				definitions: None,
			},
			pref_adapter: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	/// Load preference definitions from a file instead of the built-in set
	pub fn definitions(&mut self, path: impl Into<Box<Path>>) -> &mut Self {
		self.opts.definitions = Some(path.into());
		self
	}

	// Adapters
	pub fn pref_adapter(&mut self, pref_adapter: Arc<dyn PreferenceAdapter>) -> &mut Self {
		self.pref_adapter = Some(pref_adapter);
		self
	}

	/// Build the application state without starting the server
	pub async fn build(self) -> PrResult<App> {
		let Some(pref_adapter) = self.pref_adapter else {
			error!("FATAL: No preference adapter configured");
			return Err(Error::ConfigError("No preference adapter configured".to_string()));
		};

		let definitions = match &self.opts.definitions {
			Some(path) => load_definitions(path).await,
			None => builtin_definitions(),
		}
		.inspect_err(|err| error!("FATAL: Cannot load preference definitions: {}", err))?;

		let mut registry = PreferencesRegistry::new();
		for def in definitions {
			registry.register(def)?;
		}
		info!("Registered {} preferences", registry.len());

		let registry = Arc::new(registry.freeze());
		let preferences = PreferenceService::new(registry, pref_adapter);

		Ok(Arc::new(AppState { opts: self.opts, preferences }))
	}

	pub async fn run(self) -> PrResult<()> {
		info!("prefs V{}", VERSION);

		let app = self.build().await?;
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

// vim: ts=4
