//! Scope resolution
//!
//! Computes effective preference values from the default and the values
//! stored at organization and user scope. Precedence is user > org > default.
//! Everything here is pure: the caller fetches the stored rows and persists
//! accepted writes.

use std::collections::HashMap;

use crate::prelude::*;

use super::registry::FrozenPreferencesRegistry;
use super::types::{PreferenceDefinition, PreferenceView};
use super::validator;

pub fn enabled_for_scope(def: &PreferenceDefinition, scope: PrefScope) -> bool {
	def.enabled_for_scope(scope)
}

fn ensure_scope(def: &PreferenceDefinition, scope: PrefScope) -> PrResult<()> {
	if enabled_for_scope(def, scope) {
		Ok(())
	} else {
		Err(Error::Forbidden { key: def.key.clone(), scope })
	}
}

/// Canonical typed form of a stored value.
///
/// Booleans are persisted in a lossy textual form: the string `"1"` (which
/// the store may hand back as the integer `1`) means `true`, anything else
/// means `false`. A stored `Bool` keeps its value, so sanitizing twice is the
/// same as sanitizing once. Other types pass through unchanged.
pub fn sanitize(def: &PreferenceDefinition, value: PrefValue) -> PrefValue {
	if def.value_type != ValueType::Boolean {
		return value;
	}
	match value {
		PrefValue::Bool(b) => PrefValue::Bool(b),
		PrefValue::String(s) => PrefValue::Bool(s == "1"),
		PrefValue::Int(i) => PrefValue::Bool(i == 1),
		PrefValue::Float(_) => PrefValue::Bool(false),
	}
}

/// Effective organization value: the stored value, or the default
pub fn org_value(def: &PreferenceDefinition, org: Option<&PrefValue>) -> PrResult<PrefValue> {
	ensure_scope(def, PrefScope::Org)?;
	Ok(match org {
		Some(value) => sanitize(def, value.clone()),
		None => def.default.clone(),
	})
}

/// Effective user value: user value, else org value (if the preference is
/// enabled at org scope), else the default
pub fn user_value(
	def: &PreferenceDefinition,
	org: Option<&PrefValue>,
	user: Option<&PrefValue>,
) -> PrResult<PrefValue> {
	ensure_scope(def, PrefScope::User)?;
	Ok(sanitize(def, select(def, org, user)))
}

fn select(def: &PreferenceDefinition, org: Option<&PrefValue>, user: Option<&PrefValue>) -> PrefValue {
	let mut value = &def.default;
	if let Some(org) = org
		&& enabled_for_scope(def, PrefScope::Org)
	{
		value = org;
	}
	if let Some(user) = user {
		value = user;
	}
	value.clone()
}

/// Check a candidate value for a write at the given scope.
///
/// Returns the accepted value (integral floats coerced for integer
/// preferences). It is what gets stored, and it is not sanitized.
pub fn accept_write(
	def: &PreferenceDefinition,
	scope: PrefScope,
	value: PrefValue,
) -> PrResult<PrefValue> {
	ensure_scope(def, scope)?;
	validator::validate(def, value)
}

/// Resolve every definition enabled at `scope`, in registry order.
///
/// `user_values` is only consulted for user scope. Definitions not enabled at
/// the scope are left out.
pub fn list_all(
	scope: PrefScope,
	registry: &FrozenPreferencesRegistry,
	org_values: &HashMap<String, PrefValue>,
	user_values: Option<&HashMap<String, PrefValue>>,
) -> Vec<PreferenceView> {
	registry
		.list()
		.filter(|def| enabled_for_scope(def, scope))
		.map(|def| {
			let org = org_values.get(&def.key);
			let value = match scope {
				PrefScope::Org => org.map_or_else(|| def.default.clone(), |v| sanitize(def, v.clone())),
				PrefScope::User => {
					let user = user_values.and_then(|values| values.get(&def.key));
					sanitize(def, select(def, org, user))
				}
			};
			PreferenceView::new(def, value)
		})
		.collect()
}


// vim: ts=4
