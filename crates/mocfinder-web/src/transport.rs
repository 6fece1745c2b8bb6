// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! How the query form reaches the proxy endpoint.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Path of the proxy endpoint, relative to the server root.
pub const PROXY_PATH: &str = "/api/rebrickable-proxy";

/// Raw reply from the proxy; interpretation is left to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyReply {
	pub status: u16,
	pub body: Vec<u8>,
}

impl ProxyReply {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

#[derive(Debug, Error)]
pub enum TransportError {
	#[error("{0}")]
	Network(#[from] reqwest::Error),

	#[error("invalid proxy URL: {0}")]
	InvalidUrl(#[from] url::ParseError),

	#[error("{0}")]
	Other(String),
}

/// Issues one proxy lookup for a set number.
#[async_trait]
pub trait ProxyTransport: Send + Sync {
	async fn get_alternates(&self, set_num: &str) -> Result<ProxyReply, TransportError>;
}

/// Talks to a running MOC Finder server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProxyTransport {
	http_client: Client,
	endpoint: Url,
}

impl HttpProxyTransport {
	/// `server_url` is the server root, e.g. `http://localhost:8080`.
	pub fn new(server_url: &str) -> Result<Self, TransportError> {
		let endpoint = Url::parse(server_url)?.join(PROXY_PATH)?;
		Ok(Self {
			http_client: mocfinder_common_http::new_client()?,
			endpoint,
		})
	}

	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}
}

#[async_trait]
impl ProxyTransport for HttpProxyTransport {
	async fn get_alternates(&self, set_num: &str) -> Result<ProxyReply, TransportError> {
		let mut url = self.endpoint.clone();
		url.query_pairs_mut().append_pair("set_num", set_num);
		debug!(url = %url, "querying proxy");

		let response = self.http_client.get(url).send().await?;
		let status = response.status().as_u16();
		let body = response.bytes().await?.to_vec();
		Ok(ProxyReply { status, body })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use wiremock::matchers::{method, path, query_param};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	#[test]
	fn endpoint_is_joined_to_root() {
		let transport = HttpProxyTransport::new("http://localhost:8080").unwrap();
		assert_eq!(
			transport.endpoint().as_str(),
			"http://localhost:8080/api/rebrickable-proxy"
		);
	}

	#[test]
	fn bad_server_url_is_rejected() {
		assert!(matches!(
			HttpProxyTransport::new("::nope"),
			Err(TransportError::InvalidUrl(_))
		));
	}

	#[tokio::test]
	async fn forwards_set_number_and_returns_raw_reply() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path(PROXY_PATH))
			.and(query_param("set_num", "10305-1"))
			.respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"x"}"#))
			.mount(&server)
			.await;

		let reply = HttpProxyTransport::new(&server.uri())
			.unwrap()
			.get_alternates("10305-1")
			.await
			.unwrap();
		assert_eq!(reply.status, 404);
		assert!(!reply.is_success());
		assert_eq!(reply.body, br#"{"error":"x"}"#.to_vec());
	}
}
