//! Definition sources
//!
//! Preference definitions come from a JSON asset: either the one embedded in
//! the binary or an external file given at startup. Any malformed entry is a
//! schema error, which is fatal for the process.

use std::path::Path;

use crate::prelude::*;

use super::types::{DefinitionRecord, PreferenceDefinition};

const BUILTIN_DEFINITIONS: &str = include_str!("preferences.json");

/// Parse a JSON array of preference definitions
pub fn parse_definitions(json: &str) -> PrResult<Vec<PreferenceDefinition>> {
	let records: Vec<DefinitionRecord> = serde_json::from_str(json).map_err(|err| {
		Error::SchemaError(format!("error in unmarshalling preferences: {}", err))
	})?;
	records.into_iter().map(PreferenceDefinition::try_from).collect()
}

/// Read and parse a definition file
pub async fn load_definitions(path: impl AsRef<Path>) -> PrResult<Vec<PreferenceDefinition>> {
	let path = path.as_ref();
	let json = tokio::fs::read_to_string(path).await.map_err(|err| {
		Error::SchemaError(format!(
			"error in reading preferences from {}: {}",
			path.display(),
			err
		))
	})?;
	let definitions = parse_definitions(&json)?;
	info!("Loaded {} preference definitions from {}", definitions.len(), path.display());
	Ok(definitions)
}

/// Definitions shipped with the binary
pub fn builtin_definitions() -> PrResult<Vec<PreferenceDefinition>> {
	parse_definitions(BUILTIN_DEFINITIONS)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::preferences::{Domain, FrozenPreferencesRegistry, ValueRange};

	#[test]
	fn test_builtin_definitions_load() {
		let defs = builtin_definitions().unwrap();
		let registry = FrozenPreferencesRegistry::load(defs).unwrap();

		let max_alerts = registry.get("MAX_ALERTS").unwrap();
		assert_eq!(max_alerts.default, PrefValue::Int(10));
		assert_eq!(max_alerts.allowed_scopes, vec![PrefScope::Org]);

		let rate = registry.get("TRACE_SAMPLING_RATE").unwrap();
		assert_eq!(rate.domain, Domain::Range(ValueRange { min: 0, max: 1 }));

		let timezone = registry.get("TIMEZONE").unwrap();
		assert!(timezone.uses_discrete_values());
		assert!(timezone.allowed_values().is_empty());
		assert_eq!(rate.default, PrefValue::Float(1.0));
	}

	#[test]
	fn test_malformed_json() {
		assert!(matches!(parse_definitions("{not json"), Err(Error::SchemaError(_))));
		assert!(matches!(parse_definitions(r#"[{"key": "A"}]"#), Err(Error::SchemaError(_))));
	}

	#[test]
	fn test_invalid_default_rejected() {
		let json = r#"[{
			"key": "MAX_ALERTS",
			"valueType": "integer",
			"defaultValue": "ten",
			"range": {"min": 1, "max": 100},
			"allowedScopes": ["org"]
		}]"#;
		assert!(matches!(parse_definitions(json), Err(Error::SchemaError(_))));
	}

	#[test]
	fn test_unknown_scope_rejected() {
		let json = r#"[{
			"key": "THEME",
			"valueType": "string",
			"defaultValue": "light",
			"allowedScopes": ["team"]
		}]"#;
		assert!(matches!(parse_definitions(json), Err(Error::SchemaError(_))));
	}

	#[test]
	fn test_null_allowed_values() {
		let json = r#"[{
			"key": "TIMEZONE",
			"valueType": "string",
			"defaultValue": "UTC",
			"usesDiscreteValues": true,
			"allowedValues": null,
			"allowedScopes": ["user"]
		}]"#;
		let defs = parse_definitions(json).unwrap();
		assert!(defs[0].uses_discrete_values());
		assert!(defs[0].allowed_values().is_empty());
	}

	#[tokio::test]
	async fn test_missing_file() {
		let res = load_definitions("/nonexistent/preferences.json").await;
		assert!(matches!(res, Err(Error::SchemaError(_))));
	}
}

// vim: ts=4
