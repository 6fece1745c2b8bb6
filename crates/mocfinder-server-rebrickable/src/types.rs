// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Payload type relayed by the proxy.

use serde::de::IgnoredAny;

/// The alternates JSON exactly as Rebrickable sent it.
///
/// The proxy only checks that the body is JSON; it never deserializes it
/// into typed results, so whatever upstream returns reaches the client as-is,
/// surrounding whitespace included.
#[derive(Debug, Clone)]
pub struct AlternatesPayload(String);

impl AlternatesPayload {
	pub fn from_json(body: impl Into<String>) -> Result<Self, serde_json::Error> {
		let body = body.into();
		serde_json::from_str::<IgnoredAny>(&body)?;
		Ok(Self(body))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}
}
