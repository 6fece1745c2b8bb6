// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client for MOC Finder.
//!
//! Both the proxy (talking to Rebrickable) and the CLI (talking to the proxy)
//! build their clients here so every outbound request carries the same
//! User-Agent. No timeout is set; requests use the platform defaults.

use reqwest::{Client, ClientBuilder};

/// Client builder preconfigured with the MOC Finder User-Agent.
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Build a client with the standard User-Agent.
pub fn new_client() -> Result<Client, reqwest::Error> {
	builder().build()
}

/// `mocfinder/{version}`, e.g. `mocfinder/0.1.0`.
pub fn user_agent() -> String {
	format!("mocfinder/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_carries_version() {
		let ua = user_agent();
		let (name, version) = ua.split_once('/').unwrap();
		assert_eq!(name, "mocfinder");
		assert_eq!(version, env!("CARGO_PKG_VERSION"));
	}

	#[test]
	fn client_builds() {
		assert!(new_client().is_ok());
	}
}
