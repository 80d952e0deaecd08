//! Common types used throughout the prefs engine.

use serde::{Deserialize, Serialize};
use std::fmt;

// OrgId //
//*******//
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrgId(pub Box<str>);

impl OrgId {
	pub fn new(id: impl Into<Box<str>>) -> Self {
		OrgId(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for OrgId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for OrgId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for OrgId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(OrgId(String::deserialize(deserializer)?.into()))
	}
}

// UserId //
//********//
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub Box<str>);

impl UserId {
	pub fn new(id: impl Into<Box<str>>) -> Self {
		UserId(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for UserId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for UserId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for UserId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(UserId(String::deserialize(deserializer)?.into()))
	}
}

// PrefScope //
//***********//
/// Level at which a preference value can be overridden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrefScope {
	#[serde(rename = "org")]
	Org,
	#[serde(rename = "user")]
	User,
}

impl fmt::Display for PrefScope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PrefScope::Org => write!(f, "org"),
			PrefScope::User => write!(f, "user"),
		}
	}
}

// ValueType //
//***********//
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
	#[serde(rename = "integer")]
	Integer,
	#[serde(rename = "float")]
	Float,
	#[serde(rename = "string")]
	String,
	#[serde(rename = "boolean")]
	Boolean,
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ValueType::Integer => "integer",
			ValueType::Float => "float",
			ValueType::String => "string",
			ValueType::Boolean => "boolean",
		})
	}
}

// PrefValue //
//***********//
/// A preference value as it crosses the API boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)] // Type is checked against the PreferenceDefinition, not tagged
pub enum PrefValue {
	Bool(bool), // Must be before Int
	Int(i64),
	Float(f64),
	String(String),
}

impl PrefValue {
	/// Runtime type of this value
	pub fn value_type(&self) -> ValueType {
		match self {
			PrefValue::Bool(_) => ValueType::Boolean,
			PrefValue::Int(_) => ValueType::Integer,
			PrefValue::Float(_) => ValueType::Float,
			PrefValue::String(_) => ValueType::String,
		}
	}
}

impl fmt::Display for PrefValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PrefValue::Bool(b) => write!(f, "{}", b),
			PrefValue::Int(i) => write!(f, "{}", i),
			PrefValue::Float(x) => write!(f, "{}", x),
			PrefValue::String(s) => write!(f, "{:?}", s),
		}
	}
}

impl From<bool> for PrefValue {
	fn from(b: bool) -> Self {
		PrefValue::Bool(b)
	}
}

impl From<i32> for PrefValue {
	fn from(i: i32) -> Self {
		PrefValue::Int(i64::from(i))
	}
}

impl From<i64> for PrefValue {
	fn from(i: i64) -> Self {
		PrefValue::Int(i)
	}
}

impl From<f64> for PrefValue {
	fn from(x: f64) -> Self {
		PrefValue::Float(x)
	}
}

impl From<&str> for PrefValue {
	fn from(s: &str) -> Self {
		PrefValue::String(s.to_string())
	}
}

impl From<String> for PrefValue {
	fn from(s: String) -> Self {
		PrefValue::String(s)
	}
}


// vim: ts=4
