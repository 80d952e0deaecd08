use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::prelude::*;

pub fn init(app: App) -> Router {
	Router::new()
		.route("/api/org/preferences", get(handler::list_org_preferences))
		.route(
			"/api/org/preferences/{key}",
			get(handler::get_org_preference).put(handler::update_org_preference),
		)
		.route("/api/user/preferences", get(handler::list_user_preferences))
		.route(
			"/api/user/preferences/{key}",
			get(handler::get_user_preference).put(handler::update_user_preference),
		)
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
