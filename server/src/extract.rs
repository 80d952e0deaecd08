//! Caller identity extractors
//!
//! Identity is taken verbatim from request headers. Authenticating the
//! caller is the job of whatever sits in front of this server.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::prelude::*;

pub const ORG_ID_HEADER: &str = "x-org-id";
pub const USER_ID_HEADER: &str = "x-user-id";

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
	parts
		.headers
		.get(name)
		.and_then(|value| value.to_str().ok())
		.map(str::trim)
		.filter(|value| !value.is_empty())
}

// OrgCaller //
//***********//
/// Organization of the caller
#[derive(Debug, Clone)]
pub struct OrgCaller(pub OrgId);

impl<S> FromRequestParts<S> for OrgCaller
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let Some(org_id) = header(parts, ORG_ID_HEADER) else {
			debug!("Missing {} header", ORG_ID_HEADER);
			return Err(Error::Unauthenticated);
		};
		Ok(OrgCaller(OrgId::new(org_id)))
	}
}

// UserCaller //
//************//
/// User of the caller, together with the organization the user belongs to
#[derive(Debug, Clone)]
pub struct UserCaller {
	pub org_id: OrgId,
	pub user_id: UserId,
}

impl<S> FromRequestParts<S> for UserCaller
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		match (header(parts, ORG_ID_HEADER), header(parts, USER_ID_HEADER)) {
			(Some(org_id), Some(user_id)) => {
				Ok(UserCaller { org_id: OrgId::new(org_id), user_id: UserId::new(user_id) })
			}
			_ => {
				debug!("Missing {} or {} header", ORG_ID_HEADER, USER_ID_HEADER);
				Err(Error::Unauthenticated)
			}
		}
	}
}

// vim: ts=4
