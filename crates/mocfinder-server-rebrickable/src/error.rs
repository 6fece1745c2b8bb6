// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Rebrickable client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RebrickableError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// The configured base URL cannot carry a path.
	#[error("Invalid Rebrickable base URL: {0}")]
	InvalidUrl(String),

	/// Upstream answered 2xx with a body that is not JSON.
	#[error("Invalid response from Rebrickable: {0}")]
	InvalidResponse(String),

	/// Upstream answered with a non-success status.
	#[error("Rebrickable API error: {status} {status_text}")]
	Api {
		status: u16,
		/// Canonical reason phrase, e.g. `Not Found`. Empty for unknown codes.
		status_text: String,
		/// Raw body text; not necessarily JSON.
		body: String,
	},
}
