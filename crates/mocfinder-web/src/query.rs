// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Validated set-number input.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("set number is empty")]
pub struct EmptySetNumber;

/// A set number as submitted by the user, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
	set_number: String,
}

impl SearchQuery {
	pub fn parse(input: &str) -> Result<Self, EmptySetNumber> {
		let trimmed = input.trim();
		if trimmed.is_empty() {
			return Err(EmptySetNumber);
		}
		Ok(Self {
			set_number: trimmed.to_string(),
		})
	}

	pub fn as_str(&self) -> &str {
		&self.set_number
	}
}
