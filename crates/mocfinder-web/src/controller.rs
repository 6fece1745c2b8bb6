// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Query form state machine.
//!
//! ```text
//! Idle ──submit(blank)──────────────▶ Error("Please enter a LEGO set number.")
//! Idle ──submit(set)──▶ Loading ──2xx────────▶ Success(response)
//!                               └─non-2xx/failure─▶ Error(message)
//! ```
//!
//! Every submission starts from a clean slate: entering `Loading` drops the
//! previous results and the previous error. `submit` borrows the controller
//! mutably for the whole round-trip, so one controller never has two
//! searches in flight.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::SearchResponse;
use crate::query::SearchQuery;
use crate::transport::{ProxyReply, ProxyTransport, TransportError};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a LEGO set number.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
	#[default]
	Idle,
	Loading,
	Error(String),
	Success(SearchResponse),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
	error: Option<String>,
}

#[derive(Debug, Default)]
pub struct SearchController {
	input: String,
	query: Option<SearchQuery>,
	state: SearchState,
}

impl SearchController {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_input(input: impl Into<String>) -> Self {
		Self {
			input: input.into(),
			..Self::default()
		}
	}

	pub fn set_input(&mut self, input: impl Into<String>) {
		self.input = input.into();
	}

	/// The text currently in the input box, as typed.
	pub fn input(&self) -> &str {
		&self.input
	}

	/// The last accepted submission.
	pub fn query(&self) -> Option<&SearchQuery> {
		self.query.as_ref()
	}

	pub fn state(&self) -> &SearchState {
		&self.state
	}

	pub fn is_loading(&self) -> bool {
		matches!(self.state, SearchState::Loading)
	}

	/// Validate the input and enter `Loading`.
	///
	/// Returns the query to send, or `None` when the input is blank, in which
	/// case the state is already `Error` and nothing must be sent.
	pub fn begin(&mut self) -> Option<SearchQuery> {
		match SearchQuery::parse(&self.input) {
			Ok(query) => {
				self.state = SearchState::Loading;
				self.query = Some(query.clone());
				Some(query)
			}
			Err(_) => {
				self.state = SearchState::Error(EMPTY_INPUT_MESSAGE.to_string());
				None
			}
		}
	}

	/// Apply the outcome of the request started by [`begin`](Self::begin).
	pub fn finish(&mut self, outcome: Result<ProxyReply, TransportError>) -> &SearchState {
		if !self.is_loading() {
			debug!("ignoring proxy outcome with no search in flight");
			return &self.state;
		}

		self.state = match outcome {
			Ok(reply) if reply.is_success() => match serde_json::from_slice(&reply.body) {
				Ok(response) => SearchState::Success(response),
				Err(e) => {
					warn!(error = %e, "proxy returned an unreadable body");
					SearchState::Error(format!("Invalid response from server: {e}"))
				}
			},
			Ok(reply) => {
				let message = error_message(&reply);
				warn!(status = reply.status, message = %message, "search failed");
				SearchState::Error(message)
			}
			Err(e) => {
				warn!(error = %e, "search request failed");
				let message = e.to_string();
				SearchState::Error(if message.is_empty() {
					UNKNOWN_ERROR_MESSAGE.to_string()
				} else {
					message
				})
			}
		};
		&self.state
	}

	/// Run one full submission against `transport`.
	pub async fn submit<T>(&mut self, transport: &T) -> &SearchState
	where
		T: ProxyTransport + ?Sized,
	{
		let Some(query) = self.begin() else {
			return &self.state;
		};
		let outcome = transport.get_alternates(query.as_str()).await;
		self.finish(outcome)
	}
}

/// Prefer the proxy's own `error` field; fall back to the status code.
fn error_message(reply: &ProxyReply) -> String {
	serde_json::from_slice::<ErrorBody>(&reply.body)
		.ok()
		.and_then(|b| b.error)
		.filter(|e| !e.is_empty())
		.unwrap_or_else(|| format!("HTTP error! Status: {}", reply.status))
}
