//! Preference schema registry
//!
//! Definitions are registered into a mutable [`PreferencesRegistry`] during
//! startup, then frozen into a [`FrozenPreferencesRegistry`] which is shared
//! read-only for the lifetime of the process.

use std::collections::HashMap;

use crate::prelude::*;

use super::types::PreferenceDefinition;

/// Mutable registry used during app initialization
#[derive(Debug, Default)]
pub struct PreferencesRegistry {
	definitions: Vec<PreferenceDefinition>,
	index: HashMap<String, usize>,
}

impl PreferencesRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a new preference definition
	pub fn register(&mut self, def: PreferenceDefinition) -> PrResult<()> {
		if self.index.contains_key(&def.key) {
			return Err(Error::SchemaError(format!(
				"duplicate preference key in the preferences: {}",
				def.key
			)));
		}

		debug!("Registering preference: {}", def.key);
		self.index.insert(def.key.clone(), self.definitions.len());
		self.definitions.push(def);
		Ok(())
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FrozenPreferencesRegistry {
		info!("Freezing preferences registry with {} definitions", self.definitions.len());
		FrozenPreferencesRegistry { definitions: self.definitions, index: self.index }
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

/// Immutable registry shared by all requests
#[derive(Debug)]
pub struct FrozenPreferencesRegistry {
	definitions: Vec<PreferenceDefinition>,
	index: HashMap<String, usize>,
}

impl FrozenPreferencesRegistry {
	/// Build a registry from an ordered list of definitions, rejecting duplicate keys
	pub fn load(definitions: impl IntoIterator<Item = PreferenceDefinition>) -> PrResult<Self> {
		let mut registry = PreferencesRegistry::new();
		for def in definitions {
			registry.register(def)?;
		}
		Ok(registry.freeze())
	}

	/// Get a preference definition by key
	pub fn get(&self, key: &str) -> PrResult<&PreferenceDefinition> {
		self.index
			.get(key)
			.and_then(|&idx| self.definitions.get(idx))
			.ok_or_else(|| Error::NotFound(key.to_string()))
	}

	/// List all definitions in registration order
	pub fn list(&self) -> impl Iterator<Item = &PreferenceDefinition> {
		self.definitions.iter()
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}


// vim: ts=4
