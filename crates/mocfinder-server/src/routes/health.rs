// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	/// Serving, but the proxy cannot reach Rebrickable without an API key.
	Degraded,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub rebrickable_configured: bool,
	pub version: String,
}

#[utoipa::path(
	get,
	path = "/health",
	responses(
		(status = 200, description = "Server is up", body = HealthResponse)
	),
	tag = "health"
)]
/// GET /health - Liveness plus upstream configuration status.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	let rebrickable_configured = state.rebrickable_client.is_some();
	let status = if rebrickable_configured {
		HealthStatus::Healthy
	} else {
		HealthStatus::Degraded
	};

	(
		StatusCode::OK,
		Json(HealthResponse {
			status,
			rebrickable_configured,
			version: env!("CARGO_PKG_VERSION").to_string(),
		}),
	)
}
