//! Preference types and definitions
//!
//! Core types for the preference subsystem: the immutable definition loaded
//! at startup, its value domain, and the derived views returned to callers.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

use super::validator;

/// Inclusive numeric range for integer preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
	pub min: i64,
	pub max: i64,
}

impl ValueRange {
	pub fn contains(&self, value: i64) -> bool {
		self.min <= value && value <= self.max
	}
}

/// Set of values a preference accepts besides its type
#[derive(Debug, Clone, PartialEq)]
pub enum Domain {
	/// Enumerated allowed values (`usesDiscreteValues = true`)
	Discrete(Vec<PrefValue>),
	/// Inclusive range, only enforced for integer preferences
	Range(ValueRange),
}

/// Preference definition - immutable metadata for each preference
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceDefinition {
	/// Unique key (e.g., "MAX_ALERTS")
	pub key: String,

	/// Human-readable name
	pub name: String,

	/// Human-readable description
	pub description: String,

	pub value_type: ValueType,

	/// Value used when nothing is stored at any scope
	pub default: PrefValue,

	pub domain: Domain,

	/// Scopes where this preference can be read and written
	pub allowed_scopes: Vec<PrefScope>,
}

impl PreferenceDefinition {
	/// Create a builder for constructing a PreferenceDefinition
	pub fn builder(key: impl Into<String>) -> PreferenceDefinitionBuilder {
		PreferenceDefinitionBuilder::new(key)
	}

	pub fn enabled_for_scope(&self, scope: PrefScope) -> bool {
		self.allowed_scopes.contains(&scope)
	}

	pub fn uses_discrete_values(&self) -> bool {
		matches!(self.domain, Domain::Discrete(_))
	}

	/// Allowed values, empty unless the domain is discrete
	pub fn allowed_values(&self) -> &[PrefValue] {
		match &self.domain {
			Domain::Discrete(values) => values,
			_ => &[],
		}
	}

	pub fn range(&self) -> Option<ValueRange> {
		match self.domain {
			Domain::Range(range) => Some(range),
			_ => None,
		}
	}
}

/// Builder for PreferenceDefinition with fluent API
pub struct PreferenceDefinitionBuilder {
	key: String,
	name: Option<String>,
	description: String,
	value_type: Option<ValueType>,
	default: Option<PrefValue>,
	uses_discrete_values: bool,
	allowed_values: Vec<PrefValue>,
	range: Option<ValueRange>,
	allowed_scopes: Vec<PrefScope>,
}

impl PreferenceDefinitionBuilder {
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			name: None,
			description: String::new(),
			value_type: None,
			default: None,
			uses_discrete_values: false,
			allowed_values: Vec::new(),
			range: None,
			allowed_scopes: Vec::new(),
		}
	}

	/// Set the display name (defaults to the key)
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	/// Set the value type (defaults to the type of the default value)
	pub fn value_type(mut self, value_type: ValueType) -> Self {
		self.value_type = Some(value_type);
		self
	}

	/// Set the default value (required)
	pub fn default(mut self, value: impl Into<PrefValue>) -> Self {
		self.default = Some(value.into());
		self
	}

	/// Switch between the discrete and the range domain
	pub fn discrete(mut self, uses_discrete_values: bool) -> Self {
		self.uses_discrete_values = uses_discrete_values;
		self
	}

	/// Set the allowed values and switch to the discrete domain
	pub fn allowed_values(mut self, values: impl IntoIterator<Item = PrefValue>) -> Self {
		self.allowed_values = values.into_iter().collect();
		self.uses_discrete_values = true;
		self
	}

	pub fn range(mut self, min: i64, max: i64) -> Self {
		self.range = Some(ValueRange { min, max });
		self
	}

	/// Add a scope where the preference can be set
	pub fn scope(mut self, scope: PrefScope) -> Self {
		if !self.allowed_scopes.contains(&scope) {
			self.allowed_scopes.push(scope);
		}
		self
	}

	pub fn scopes(self, scopes: impl IntoIterator<Item = PrefScope>) -> Self {
		scopes.into_iter().fold(self, PreferenceDefinitionBuilder::scope)
	}

	/// Build the PreferenceDefinition, checking its invariants
	pub fn build(self) -> PrResult<PreferenceDefinition> {
		if self.key.is_empty() {
			return Err(Error::SchemaError("preference key must not be empty".into()));
		}
		if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
			return Err(Error::SchemaError(format!("preference '{}' has an empty name", self.key)));
		}
		let default = self.default.ok_or_else(|| {
			Error::SchemaError(format!("preference '{}' has no default value", self.key))
		})?;
		if self.allowed_scopes.is_empty() {
			return Err(Error::SchemaError(format!(
				"preference '{}' is not enabled at any scope",
				self.key
			)));
		}
		let value_type = self.value_type.unwrap_or_else(|| default.value_type());

		let domain = if self.uses_discrete_values {
			let allowed = self
				.allowed_values
				.into_iter()
				.map(|value| validator::coerce(&self.key, value_type, value))
				.collect::<PrResult<Vec<_>>>()
				.map_err(|err| {
					Error::SchemaError(format!(
						"allowed values of '{}' are invalid: {}",
						self.key, err
					))
				})?;
			Domain::Discrete(allowed)
		} else {
			match self.range {
				Some(range) if range.min > range.max => {
					return Err(Error::SchemaError(format!(
						"preference '{}' has an empty range [{}, {}]",
						self.key, range.min, range.max
					)));
				}
				Some(range) => Domain::Range(range),
				None => {
					return Err(Error::SchemaError(format!(
						"preference '{}' uses no discrete values but has no range",
						self.key
					)));
				}
			}
		};

		let mut def = PreferenceDefinition {
			name: self.name.unwrap_or_else(|| self.key.clone()),
			key: self.key,
			description: self.description,
			value_type,
			default,
			domain,
			allowed_scopes: self.allowed_scopes,
		};

		// The default must pass the same rule as any written value
		def.default = validator::validate(&def, def.default.clone()).map_err(|err| {
			Error::SchemaError(format!("default value of '{}' is invalid: {}", def.key, err))
		})?;

		Ok(def)
	}
}

/// Definition as it appears in the JSON definition asset
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionRecord {
	key: String,
	#[serde(default)]
	name: Option<String>,
	#[serde(default)]
	description: String,
	value_type: ValueType,
	default_value: PrefValue,
	#[serde(default)]
	uses_discrete_values: bool,
	#[serde(default)]
	allowed_values: Option<Vec<PrefValue>>,
	#[serde(default)]
	range: Option<ValueRange>,
	allowed_scopes: Vec<PrefScope>,
}

impl TryFrom<DefinitionRecord> for PreferenceDefinition {
	type Error = Error;

	fn try_from(rec: DefinitionRecord) -> PrResult<Self> {
		let mut builder = PreferenceDefinition::builder(rec.key)
			.description(rec.description)
			.value_type(rec.value_type)
			.default(rec.default_value)
			.discrete(rec.uses_discrete_values)
			.scopes(rec.allowed_scopes);
		if let Some(name) = rec.name {
			builder = builder.name(name);
		}
		if rec.uses_discrete_values {
			builder = builder.allowed_values(rec.allowed_values.unwrap_or_default());
		}
		if let Some(range) = rec.range {
			builder = builder.range(range.min, range.max);
		}
		builder.build()
	}
}

/// Effective value of a single preference, returned by reads and writes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectivePreference {
	#[serde(rename = "preference_id")]
	pub key: String,
	#[serde(rename = "preference_value")]
	pub value: PrefValue,
}

/// Definition fields together with the resolved value, used for listings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceView {
	pub key: String,
	pub name: String,
	pub description: String,
	pub value_type: ValueType,
	pub default_value: PrefValue,
	pub uses_discrete_values: bool,
	pub allowed_values: Vec<PrefValue>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub range: Option<ValueRange>,
	pub allowed_scopes: Vec<PrefScope>,
	pub value: PrefValue,
}

impl PreferenceView {
	pub fn new(def: &PreferenceDefinition, value: PrefValue) -> Self {
		Self {
			key: def.key.clone(),
			name: def.name.clone(),
			description: def.description.clone(),
			value_type: def.value_type,
			default_value: def.default.clone(),
			uses_discrete_values: def.uses_discrete_values(),
			allowed_values: def.allowed_values().to_vec(),
			range: def.range(),
			allowed_scopes: def.allowed_scopes.clone(),
			value,
		}
	}
}


// vim: ts=4
