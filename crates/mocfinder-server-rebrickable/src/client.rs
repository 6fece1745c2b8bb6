// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Rebrickable API client implementation.

use mocfinder_common_secret::SecretString;
use reqwest::{header::AUTHORIZATION, Client};
use tracing::{debug, error, instrument, trace};
use url::Url;

use crate::error::RebrickableError;
use crate::types::AlternatesPayload;

pub const DEFAULT_BASE_URL: &str = "https://rebrickable.com/api/v3";
pub const DEFAULT_PAGE_SIZE: u32 = 1000;
const MAX_PAGE_SIZE: u32 = 1000;

/// Client for the Rebrickable "alternate builds of a set" resource.
///
/// Holds the API key; callers never see it. One request per lookup, no
/// retries and no pagination beyond the first page.
#[derive(Debug, Clone)]
pub struct RebrickableClient {
	http_client: Client,
	api_key: SecretString,
	base_url: String,
	page_size: u32,
}

impl RebrickableClient {
	pub fn new(api_key: SecretString) -> Result<Self, RebrickableError> {
		Ok(Self {
			http_client: mocfinder_common_http::new_client()?,
			api_key,
			base_url: DEFAULT_BASE_URL.to_string(),
			page_size: DEFAULT_PAGE_SIZE,
		})
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Sets the page size; clamped to 1..=1000.
	pub fn with_page_size(mut self, page_size: u32) -> Self {
		self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
		self
	}

	pub fn page_size(&self) -> u32 {
		self.page_size
	}

	/// `{base}/lego/sets/{set_num}/alternates/?page_size=N`, with the set
	/// number percent-encoded as one path segment.
	pub fn alternates_url(&self, set_num: &str) -> Result<Url, RebrickableError> {
		let mut url = Url::parse(&self.base_url)
			.map_err(|e| RebrickableError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

		url.path_segments_mut()
			.map_err(|_| RebrickableError::InvalidUrl(self.base_url.clone()))?
			.pop_if_empty()
			.extend(["lego", "sets", set_num, "alternates", ""]);

		url.query_pairs_mut()
			.append_pair("page_size", &self.page_size.to_string());

		Ok(url)
	}

	/// Fetches the alternate builds for `set_num` and returns the body
	/// verbatim once it is known to be JSON.
	#[instrument(skip(self), fields(page_size = self.page_size))]
	pub async fn fetch_alternates(
		&self,
		set_num: &str,
	) -> Result<AlternatesPayload, RebrickableError> {
		let url = self.alternates_url(set_num)?;
		debug!(url = %url, "Sending alternates request to Rebrickable");

		let response = self
			.http_client
			.get(url)
			.header(AUTHORIZATION, format!("key {}", self.api_key.expose()))
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return RebrickableError::Timeout;
				}
				error!(error = %e, "Network error during Rebrickable request");
				RebrickableError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Rebrickable");

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			error!(status = status.as_u16(), body = %body, "Rebrickable API error");
			return Err(RebrickableError::Api {
				status: status.as_u16(),
				status_text: status.canonical_reason().unwrap_or_default().to_string(),
				body,
			});
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			RebrickableError::Network(e)
		})?;
		trace!(body = %body, "Response body");

		AlternatesPayload::from_json(body).map_err(|e| {
			error!(error = %e, "Rebrickable returned a non-JSON body");
			RebrickableError::InvalidResponse(format!("JSON parse error: {e}"))
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use mocfinder_common_secret::Secret;
	use proptest::prelude::*;
	use wiremock::matchers::{header, method, path, query_param};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn client(base_url: &str) -> RebrickableClient {
		RebrickableClient::new(Secret::new("rb-test-key".to_string()))
			.unwrap()
			.with_base_url(base_url)
	}

	#[test]
	fn url_has_trailing_slash_and_page_size() {
		let url = client(DEFAULT_BASE_URL).alternates_url("10305-1").unwrap();
		assert_eq!(
			url.as_str(),
			"https://rebrickable.com/api/v3/lego/sets/10305-1/alternates/?page_size=1000"
		);
	}

	#[test]
	fn url_encodes_set_number_as_one_segment() {
		let url = client("http://localhost/api/v3/")
			.alternates_url("a/b c")
			.unwrap();
		assert_eq!(url.path(), "/api/v3/lego/sets/a%2Fb%20c/alternates/");
	}

	#[test]
	fn invalid_base_url_is_reported() {
		let err = client("not a url").alternates_url("1").unwrap_err();
		assert!(matches!(err, RebrickableError::InvalidUrl(_)));
	}

	#[test]
	fn debug_does_not_leak_key() {
		let debug = format!("{:?}", client(DEFAULT_BASE_URL));
		assert!(!debug.contains("rb-test-key"));
	}

	proptest! {
		#[test]
		fn page_size_is_clamped(size in 0u32..10_000) {
			let c = client(DEFAULT_BASE_URL).with_page_size(size);
			prop_assert!(c.page_size() >= 1 && c.page_size() <= MAX_PAGE_SIZE);
		}
	}

	#[tokio::test]
	async fn success_body_is_returned_verbatim() {
		let server = MockServer::start().await;
		let body = r#"{"count":2,"next":null,"previous":null,"results":[{"set_num":"MOC-1"},{"set_num":"MOC-2"}]}"#;
		Mock::given(method("GET"))
			.and(path("/lego/sets/10305-1/alternates/"))
			.and(query_param("page_size", "1000"))
			.and(header("Authorization", "key rb-test-key"))
			.respond_with(ResponseTemplate::new(200).set_body_string(body))
			.expect(1)
			.mount(&server)
			.await;

		let payload = client(&server.uri())
			.fetch_alternates("10305-1")
			.await
			.unwrap();
		assert_eq!(payload.as_str(), body);
	}

	#[tokio::test]
	async fn trailing_newline_is_relayed() {
		let server = MockServer::start().await;
		let body = "{\"count\":0,\"next\":null,\"previous\":null,\"results\":[]}\n";
		Mock::given(method("GET"))
			.and(path("/lego/sets/75192-1/alternates/"))
			.respond_with(ResponseTemplate::new(200).set_body_string(body))
			.mount(&server)
			.await;

		let payload = client(&server.uri())
			.fetch_alternates("75192-1")
			.await
			.unwrap();
		assert_eq!(payload.into_string(), body);
	}

	#[tokio::test]
	async fn error_status_keeps_reason_and_text_body() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
			.mount(&server)
			.await;

		let err = client(&server.uri())
			.fetch_alternates("nope")
			.await
			.unwrap_err();
		match err {
			RebrickableError::Api {
				status,
				status_text,
				body,
			} => {
				assert_eq!(status, 404);
				assert_eq!(status_text, "Not Found");
				assert_eq!(body, "Not found");
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[tokio::test]
	async fn non_json_success_is_invalid_response() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
			.mount(&server)
			.await;

		let err = client(&server.uri())
			.fetch_alternates("10305-1")
			.await
			.unwrap_err();
		assert!(matches!(err, RebrickableError::InvalidResponse(_)));
	}

	#[tokio::test]
	async fn unreachable_upstream_is_network_error() {
		// Port 9 (discard) is not listening on test hosts.
		let err = client("http://127.0.0.1:9/api/v3")
			.fetch_alternates("10305-1")
			.await
			.unwrap_err();
		assert!(matches!(err, RebrickableError::Network(_)));
	}
}
