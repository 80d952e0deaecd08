//! Preference handlers

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};

use prefs_core::preferences::{EffectivePreference, PreferenceView};

use crate::{
	extract::{OrgCaller, UserCaller},
	prelude::*,
	types::{ApiResponse, UpdatePreferenceRequest},
};

/// GET /api/org/preferences - List every preference settable by the organization
pub async fn list_org_preferences(
	State(app): State<App>,
	OrgCaller(org_id): OrgCaller,
) -> PrResult<(StatusCode, Json<ApiResponse<Vec<PreferenceView>>>)> {
	let views = app.preferences.list_org_preferences(&org_id).await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(views))))
}

/// GET /api/org/preferences/{key}
pub async fn get_org_preference(
	State(app): State<App>,
	OrgCaller(org_id): OrgCaller,
	Path(key): Path<String>,
) -> PrResult<(StatusCode, Json<ApiResponse<EffectivePreference>>)> {
	let pref = app.preferences.get_org_preference(&org_id, &key).await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(pref))))
}

/// PUT /api/org/preferences/{key}
pub async fn update_org_preference(
	State(app): State<App>,
	OrgCaller(org_id): OrgCaller,
	Path(key): Path<String>,
	Json(req): Json<UpdatePreferenceRequest>,
) -> PrResult<(StatusCode, Json<ApiResponse<EffectivePreference>>)> {
	let pref = app.preferences.set_org_preference(&org_id, &key, req.preference_value).await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(pref))))
}

/// GET /api/user/preferences - List every preference settable by the user,
/// with effective values
pub async fn list_user_preferences(
	State(app): State<App>,
	caller: UserCaller,
) -> PrResult<(StatusCode, Json<ApiResponse<Vec<PreferenceView>>>)> {
	let views = app.preferences.list_user_preferences(&caller.org_id, &caller.user_id).await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(views))))
}

/// GET /api/user/preferences/{key}
pub async fn get_user_preference(
	State(app): State<App>,
	caller: UserCaller,
	Path(key): Path<String>,
) -> PrResult<(StatusCode, Json<ApiResponse<EffectivePreference>>)> {
	let pref = app.preferences.get_user_preference(&caller.org_id, &caller.user_id, &key).await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(pref))))
}

/// PUT /api/user/preferences/{key}
pub async fn update_user_preference(
	State(app): State<App>,
	caller: UserCaller,
	Path(key): Path<String>,
	Json(req): Json<UpdatePreferenceRequest>,
) -> PrResult<(StatusCode, Json<ApiResponse<EffectivePreference>>)> {
	let pref = app.preferences.set_user_preference(&caller.user_id, &key, req.preference_value).await?;
	Ok((StatusCode::OK, Json(ApiResponse::new(pref))))
}

// vim: ts=4
