//! Error type shared by the core, the adapters and the server

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::types::{PrefScope, PrefValue, ValueType};

pub type PrResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Unknown preference key
	NotFound(String),
	/// Preference cannot be read or written at this scope
	Forbidden { key: String, scope: PrefScope },
	/// Caller identity is missing from the request
	Unauthenticated,

	// bad input
	TypeMismatch { key: String, expected: ValueType, got: ValueType },
	Domain { key: String, allowed: Vec<PrefValue> },
	Range { key: String, min: i64, max: i64 },

	/// Broken definition set, fatal at startup
	SchemaError(String),
	/// Failure reported by the preference store
	StoreError(String),
	ConfigError(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	/// Type, domain and range failures are all reported as bad input
	pub fn is_bad_input(&self) -> bool {
		matches!(self, Error::TypeMismatch { .. } | Error::Domain { .. } | Error::Range { .. })
	}

	fn code(&self) -> &'static str {
		match self {
			Error::NotFound(_) => "E-PREF-NOTFOUND",
			Error::Forbidden { .. } => "E-PREF-FORBIDDEN",
			Error::Unauthenticated => "E-AUTH-NOID",
			Error::TypeMismatch { .. } => "E-PREF-BADTYPE",
			Error::Domain { .. } => "E-PREF-NOTALLOWED",
			Error::Range { .. } => "E-PREF-RANGE",
			Error::StoreError(_) => "E-STORE",
			Error::SchemaError(_) | Error::ConfigError(_) | Error::Io(_) => "E-INTERNAL",
		}
	}

	fn status(&self) -> StatusCode {
		match self {
			Error::NotFound(_) => StatusCode::NOT_FOUND,
			Error::Forbidden { .. } => StatusCode::FORBIDDEN,
			Error::Unauthenticated => StatusCode::UNAUTHORIZED,
			e if e.is_bad_input() => StatusCode::BAD_REQUEST,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound(key) => write!(f, "no such preference key: {}", key),
			Error::Forbidden { key, scope } => {
				write!(f, "preference is not enabled at {} scope: {}", scope, key)
			}
			Error::Unauthenticated => write!(f, "caller identity is missing"),
			Error::TypeMismatch { key, expected, got } => write!(
				f,
				"the preference value is not of expected type: {} (preference {}, got {})",
				expected, key, got
			),
			Error::Domain { key, allowed } => {
				let allowed: Vec<String> = allowed.iter().map(ToString::to_string).collect();
				write!(
					f,
					"the preference value is not in the list of allowed values for {}: [{}]",
					key,
					allowed.join(", ")
				)
			}
			Error::Range { key, min, max } => write!(
				f,
				"the preference value is not in the range specified for {}, min: {}, max: {}",
				key, min, max
			),
			Error::SchemaError(msg) => write!(f, "preference schema error: {}", msg),
			Error::StoreError(msg) => write!(f, "preference store error: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let status = self.status();
		let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
			tracing::warn!("Internal error: {}", self);
			"Internal server error".to_string()
		} else {
			self.to_string()
		};

		let body = serde_json::json!({
			"error": {
				"code": self.code(),
				"message": message,
			}
		});
		(status, Json(body)).into_response()
	}
}


// vim: ts=4
