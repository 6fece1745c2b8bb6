// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rebrickable upstream configuration section.

use mocfinder_common_secret::SecretString;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://rebrickable.com/api/v3";

/// Rebrickable caps `page_size` at 1000; one page of that size covers every
/// set's alternates, so no pagination is followed.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;
pub const MAX_PAGE_SIZE: u32 = 1000;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RebrickableConfigLayer {
	#[serde(default)]
	pub api_key: Option<SecretString>,
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub page_size: Option<u32>,
}

impl RebrickableConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.page_size.is_some() {
			self.page_size = other.page_size;
		}
	}

	pub fn finalize(self) -> RebrickableConfig {
		RebrickableConfig {
			api_key: self.api_key.filter(|k| !k.expose().is_empty()),
			base_url: self
				.base_url
				.map(|u| u.trim_end_matches('/').to_string())
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			page_size: self
				.page_size
				.unwrap_or(DEFAULT_PAGE_SIZE)
				.clamp(1, MAX_PAGE_SIZE),
		}
	}
}

#[derive(Debug, Clone)]
pub struct RebrickableConfig {
	/// Absent credential is not a startup failure; the proxy answers 500
	/// until it is configured.
	pub api_key: Option<SecretString>,
	pub base_url: String,
	pub page_size: u32,
}

impl Default for RebrickableConfig {
	fn default() -> Self {
		RebrickableConfigLayer::default().finalize()
	}
}

impl RebrickableConfig {
	pub fn is_configured(&self) -> bool {
		self.api_key.is_some()
	}
}
