// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use mocfinder_server_config::ServerConfig;
use mocfinder_server_rebrickable::RebrickableClient;
use utoipa::OpenApi;

use crate::{api_docs::ApiDoc, routes};

/// Shared, immutable per-process state.
#[derive(Clone)]
pub struct AppState {
	/// `None` when no API key is configured; the proxy then answers 500.
	pub rebrickable_client: Option<Arc<RebrickableClient>>,
}

/// Build the state from configuration.
pub fn create_app_state(config: &ServerConfig) -> AppState {
	let rebrickable_client = match &config.rebrickable.api_key {
		Some(api_key) => match RebrickableClient::new(api_key.clone()) {
			Ok(client) => {
				tracing::info!(
					base_url = %config.rebrickable.base_url,
					"Rebrickable configured, creating client"
				);
				Some(Arc::new(
					client
						.with_base_url(config.rebrickable.base_url.clone())
						.with_page_size(config.rebrickable.page_size),
				))
			}
			Err(e) => {
				tracing::warn!(error = %e, "Failed to create Rebrickable client");
				None
			}
		},
		None => {
			tracing::info!("Rebrickable not configured");
			None
		}
	};

	AppState { rebrickable_client }
}

pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/", get(routes::home::home_page))
		.route("/health", get(routes::health::health_check))
		.route(
			"/api/rebrickable-proxy",
			get(routes::rebrickable::proxy_rebrickable),
		)
		.route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
		.with_state(state)
}
