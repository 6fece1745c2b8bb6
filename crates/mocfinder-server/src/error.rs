// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use mocfinder_server_rebrickable::RebrickableError;
use serde::Serialize;
use utoipa::ToSchema;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const MISSING_API_KEY_MESSAGE: &str = "Internal server error: API key missing";
pub const SET_NUMBER_REQUIRED_MESSAGE: &str = "Set number is required";

/// Errors surfaced by the proxy routes.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Invalid request input.
	#[error("{0}")]
	BadRequest(String),

	/// No Rebrickable credential is configured.
	#[error("Internal server error: API key missing")]
	MissingApiKey,

	/// Rebrickable answered with a non-success status.
	#[error("Error fetching data from Rebrickable: {status_text}")]
	Upstream {
		status: u16,
		status_text: String,
		body: String,
	},

	/// Anything else that went wrong while handling the request.
	#[error("{0}")]
	Internal(String),
}

impl From<RebrickableError> for ServerError {
	fn from(e: RebrickableError) -> Self {
		match e {
			RebrickableError::Api {
				status,
				status_text,
				body,
			} => ServerError::Upstream {
				status,
				status_text,
				body,
			},
			other => ServerError::Internal(other.to_string()),
		}
	}
}

/// Error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
	pub error: String,
	/// Upstream response body, verbatim, for upstream failures.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<String>,
}

impl ErrorResponse {
	pub fn new(error: impl Into<String>) -> Self {
		Self {
			error: error.into(),
			details: None,
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let message = self.to_string();
		let (status, body) = match self {
			ServerError::BadRequest(_) => (StatusCode::BAD_REQUEST, ErrorResponse::new(message)),
			ServerError::MissingApiKey => (
				StatusCode::INTERNAL_SERVER_ERROR,
				ErrorResponse::new(message),
			),
			ServerError::Upstream { status, body, .. } => (
				StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
				ErrorResponse {
					error: message,
					details: Some(body),
				},
			),
			ServerError::Internal(msg) => {
				let error = if msg.trim().is_empty() {
					INTERNAL_ERROR_MESSAGE.to_string()
				} else {
					msg
				};
				(StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(error))
			}
		};

		(status, Json(body)).into_response()
	}
}
