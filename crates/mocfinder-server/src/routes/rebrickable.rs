// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Rebrickable alternates proxy HTTP handler.

use async_trait::async_trait;
use axum::{
	body::to_bytes,
	extract::{RawQuery, State},
	http::{header, StatusCode},
	response::{IntoResponse, Response},
};
use mocfinder_web::{ProxyReply, ProxyTransport, TransportError};
use utoipa::IntoParams;

use crate::{
	api::AppState,
	error::{ServerError, SET_NUMBER_REQUIRED_MESSAGE},
	routes::first_query_value,
};

/// Query parameters accepted by the proxy. Anything else, including a
/// client-supplied `key`, is ignored; a repeated `set_num` uses the first.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProxyParams {
	/// LEGO set number, e.g. `10305-1`.
	pub set_num: Option<String>,
}

#[utoipa::path(
	get,
	path = "/api/rebrickable-proxy",
	params(ProxyParams),
	responses(
		(status = 200, description = "Alternate builds JSON, relayed verbatim from Rebrickable"),
		(status = 400, description = "Missing set number", body = crate::error::ErrorResponse),
		(status = 500, description = "API key missing or unexpected failure", body = crate::error::ErrorResponse),
		(status = "default", description = "Rebrickable error, with its status and body in details", body = crate::error::ErrorResponse)
	),
	tag = "rebrickable"
)]
/// GET /api/rebrickable-proxy - Look up alternate builds for a set.
pub async fn proxy_rebrickable(
	State(state): State<AppState>,
	RawQuery(query): RawQuery,
) -> Response {
	let set_num = first_query_value(query.as_deref(), "set_num");
	lookup_alternates(&state, set_num.as_deref()).await
}

/// Shared by the HTTP route and the server-rendered home page.
pub async fn lookup_alternates(state: &AppState, set_num: Option<&str>) -> Response {
	match fetch(state, set_num).await {
		Ok(body) => (
			StatusCode::OK,
			[(header::CONTENT_TYPE, "application/json")],
			body,
		)
			.into_response(),
		Err(e) => e.into_response(),
	}
}

async fn fetch(state: &AppState, set_num: Option<&str>) -> Result<String, ServerError> {
	let set_num = set_num.map(str::trim).unwrap_or_default();
	if set_num.is_empty() {
		tracing::warn!("proxy_rebrickable: missing set number");
		return Err(ServerError::BadRequest(SET_NUMBER_REQUIRED_MESSAGE.into()));
	}

	let client = state.rebrickable_client.as_ref().ok_or_else(|| {
		tracing::error!("proxy_rebrickable: Rebrickable API key not configured");
		ServerError::MissingApiKey
	})?;

	let payload = client.fetch_alternates(set_num).await.map_err(|e| {
		tracing::error!(set_num = %set_num, error = %e, "proxy_rebrickable: lookup failed");
		ServerError::from(e)
	})?;

	let body = payload.into_string();
	tracing::info!(
		set_num = %set_num,
		bytes = body.len(),
		"proxy_rebrickable: returning alternates"
	);
	Ok(body)
}

/// Runs query form submissions against the proxy logic without a network hop.
#[derive(Clone)]
pub struct LocalProxyTransport {
	state: AppState,
}

impl LocalProxyTransport {
	pub fn new(state: AppState) -> Self {
		Self { state }
	}
}

#[async_trait]
impl ProxyTransport for LocalProxyTransport {
	async fn get_alternates(&self, set_num: &str) -> Result<ProxyReply, TransportError> {
		let response = lookup_alternates(&self.state, Some(set_num)).await;
		let status = response.status().as_u16();
		let body = to_bytes(response.into_body(), usize::MAX)
			.await
			.map_err(|e| TransportError::Other(e.to_string()))?;
		Ok(ProxyReply {
			status,
			body: body.to_vec(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn unconfigured() -> AppState {
		AppState { rebrickable_client: None }
	}

	#[tokio::test]
	async fn blank_set_number_is_rejected_before_key_check() {
		let reply = LocalProxyTransport::new(unconfigured())
			.get_alternates("  ")
			.await
			.unwrap();
		assert_eq!(reply.status, 400);
		assert_eq!(reply.body, br#"{"error":"Set number is required"}"#.to_vec());
	}

	#[tokio::test]
	async fn missing_key_is_internal_error() {
		let reply = LocalProxyTransport::new(unconfigured())
			.get_alternates("10305-1")
			.await
			.unwrap();
		assert_eq!(reply.status, 500);
		assert_eq!(
			reply.body,
			br#"{"error":"Internal server error: API key missing"}"#.to_vec()
		);
	}

	proptest! {
		#[test]
		fn whitespace_set_number_is_400_through_router(ws in "[ \t\r\n]*") {
			use axum::{body::Body, http::Request};
			use tower::ServiceExt;

			let encoded: String = url::form_urlencoded::byte_serialize(ws.as_bytes()).collect();
			let uri = format!("/api/rebrickable-proxy?set_num={encoded}");
			let rt = tokio::runtime::Runtime::new().unwrap();
			let status = rt.block_on(async {
				crate::api::create_router(unconfigured())
					.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
					.await
					.unwrap()
					.status()
			});
			prop_assert_eq!(status, StatusCode::BAD_REQUEST);
		}

		#[test]
		fn any_non_blank_set_number_without_key_is_500(set_num in "[A-Za-z0-9-]{1,12}") {
			let rt = tokio::runtime::Runtime::new().unwrap();
			let status = rt.block_on(async {
				lookup_alternates(&unconfigured(), Some(&set_num)).await.status()
			});
			prop_assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		}
	}
}
