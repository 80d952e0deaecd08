//! Preference value validation
//!
//! A candidate value is accepted when:
//! - its type matches the definition (an integral float is accepted for an
//!   integer preference and coerced to an integer)
//! - it is one of the allowed values, for discrete preferences with a
//!   non-empty allowed set
//! - it lies within the inclusive range, for non-discrete integer preferences
//!
//! Float, string and boolean preferences get no range check.

use crate::prelude::*;

use super::types::{Domain, PreferenceDefinition};

/// Validate a candidate value, returning the accepted (coerced) value
pub fn validate(def: &PreferenceDefinition, value: PrefValue) -> PrResult<PrefValue> {
	let value = coerce(&def.key, def.value_type, value)?;
	check_domain(def, &value)?;
	Ok(value)
}

/// Check that a value is of the expected type, coercing where lossless
pub(crate) fn coerce(key: &str, expected: ValueType, value: PrefValue) -> PrResult<PrefValue> {
	match (expected, value) {
		(ValueType::Integer, PrefValue::Float(x)) => match integral(x) {
			Some(i) => Ok(PrefValue::Int(i)),
			None => Err(Error::TypeMismatch {
				key: key.to_string(),
				expected,
				got: ValueType::Float,
			}),
		},
		(expected, value) if value.value_type() == expected => Ok(value),
		(expected, value) => Err(Error::TypeMismatch {
			key: key.to_string(),
			expected,
			got: value.value_type(),
		}),
	}
}

fn check_domain(def: &PreferenceDefinition, value: &PrefValue) -> PrResult<()> {
	match &def.domain {
		Domain::Discrete(allowed) if !allowed.is_empty() && !allowed.contains(value) => {
			Err(Error::Domain { key: def.key.clone(), allowed: allowed.clone() })
		}
		Domain::Range(range) => match value {
			PrefValue::Int(i) if !range.contains(*i) => {
				Err(Error::Range { key: def.key.clone(), min: range.min, max: range.max })
			}
			_ => Ok(()),
		},
		_ => Ok(()),
	}
}

/// Integer value of an integral float, `None` if it has a fractional part or
/// does not fit into an i64
fn integral(x: f64) -> Option<i64> {
	if x.is_finite() && x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64 {
		Some(x as i64)
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn max_alerts() -> PreferenceDefinition {
		PreferenceDefinition::builder("MAX_ALERTS")
			.default(10)
			.range(1, 100)
			.scope(PrefScope::Org)
			.build()
			.unwrap()
	}

	fn theme() -> PreferenceDefinition {
		PreferenceDefinition::builder("THEME")
			.default("light")
			.allowed_values([PrefValue::from("light"), PrefValue::from("dark")])
			.scopes([PrefScope::Org, PrefScope::User])
			.build()
			.unwrap()
	}

	#[test]
	fn test_integer_in_range() {
		let def = max_alerts();
		assert_eq!(validate(&def, PrefValue::Int(50)).unwrap(), PrefValue::Int(50));
		assert_eq!(validate(&def, PrefValue::Int(1)).unwrap(), PrefValue::Int(1));
		assert_eq!(validate(&def, PrefValue::Int(100)).unwrap(), PrefValue::Int(100));
	}

	#[test]
	fn test_integer_out_of_range() {
		let def = max_alerts();
		for v in [0, 101, 150, -5] {
			match validate(&def, PrefValue::Int(v)) {
				Err(Error::Range { min, max, .. }) => {
					assert_eq!((min, max), (1, 100));
				}
				res => panic!("expected range error for {}, got {:?}", v, res),
			}
		}
	}

	#[test]
	fn test_integral_float_is_coerced() {
		let def = max_alerts();
		assert_eq!(validate(&def, PrefValue::Float(4.0)).unwrap(), PrefValue::Int(4));
		assert!(matches!(validate(&def, PrefValue::Float(150.0)), Err(Error::Range { .. })));
	}

	#[test]
	fn test_fractional_float_is_type_mismatch() {
		let def = max_alerts();
		match validate(&def, PrefValue::Float(4.5)) {
			Err(Error::TypeMismatch { expected, got, .. }) => {
				assert_eq!(expected, ValueType::Integer);
				assert_eq!(got, ValueType::Float);
			}
			res => panic!("expected type mismatch, got {:?}", res),
		}
		assert!(matches!(validate(&def, PrefValue::Float(f64::NAN)), Err(Error::TypeMismatch { .. })));
		assert!(matches!(validate(&def, PrefValue::Float(1e300)), Err(Error::TypeMismatch { .. })));
	}

	#[test]
	fn test_wrong_type() {
		let def = max_alerts();
		assert!(matches!(validate(&def, PrefValue::from("50")), Err(Error::TypeMismatch { .. })));
		assert!(matches!(validate(&def, PrefValue::Bool(true)), Err(Error::TypeMismatch { .. })));

		let def = theme();
		assert!(matches!(validate(&def, PrefValue::Int(1)), Err(Error::TypeMismatch { .. })));
	}

	#[test]
	fn test_discrete_values() {
		let def = theme();
		assert_eq!(validate(&def, PrefValue::from("dark")).unwrap(), PrefValue::from("dark"));
		match validate(&def, PrefValue::from("blue")) {
			Err(Error::Domain { allowed, .. }) => {
				assert_eq!(allowed, vec![PrefValue::from("light"), PrefValue::from("dark")]);
			}
			res => panic!("expected domain error, got {:?}", res),
		}
	}

	#[test]
	fn test_discrete_integer_values() {
		let def = PreferenceDefinition::builder("REFRESH_INTERVAL")
			.value_type(ValueType::Integer)
			.default(30)
			.allowed_values([PrefValue::Int(0), PrefValue::Int(30), PrefValue::Int(60)])
			.scope(PrefScope::User)
			.build()
			.unwrap();
		assert_eq!(validate(&def, PrefValue::Float(60.0)).unwrap(), PrefValue::Int(60));
		assert!(matches!(validate(&def, PrefValue::Int(45)), Err(Error::Domain { .. })));
	}

	#[test]
	fn test_discrete_with_empty_set_accepts_any_value_of_type() {
		let def = PreferenceDefinition::builder("TIMEZONE")
			.default("UTC")
			.discrete(true)
			.scope(PrefScope::User)
			.build()
			.unwrap();
		assert!(validate(&def, PrefValue::from("Europe/Budapest")).is_ok());
	}

	#[test]
	fn test_no_range_check_for_floats() {
		let def = PreferenceDefinition::builder("SAMPLING_RATE")
			.value_type(ValueType::Float)
			.default(0.5)
			.range(0, 1)
			.scope(PrefScope::Org)
			.build()
			.unwrap();
		assert_eq!(validate(&def, PrefValue::Float(7.5)).unwrap(), PrefValue::Float(7.5));
		assert!(matches!(validate(&def, PrefValue::from("0.5")), Err(Error::TypeMismatch { .. })));
	}

	#[test]
	fn test_integer_for_float_is_type_mismatch() {
		let def = PreferenceDefinition::builder("SAMPLING_RATE")
			.default(0.5)
			.range(0, 1)
			.scope(PrefScope::Org)
			.build()
			.unwrap();
		match validate(&def, PrefValue::Int(3)) {
			Err(Error::TypeMismatch { expected, got, .. }) => {
				assert_eq!(expected, ValueType::Float);
				assert_eq!(got, ValueType::Integer);
			}
			res => panic!("expected type mismatch, got {:?}", res),
		}
	}

	#[test]
	fn test_no_range_check_for_booleans() {
		let def = PreferenceDefinition::builder("WELCOME_DONE")
			.default(false)
			.range(5, 10)
			.scope(PrefScope::User)
			.build()
			.unwrap();
		assert_eq!(validate(&def, PrefValue::Bool(true)).unwrap(), PrefValue::Bool(true));
		assert!(matches!(validate(&def, PrefValue::from("1")), Err(Error::TypeMismatch { .. })));
		assert!(matches!(validate(&def, PrefValue::Int(1)), Err(Error::TypeMismatch { .. })));
	}
}

// vim: ts=4
