// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Typed view of the alternates JSON relayed by the proxy.

use serde::{Deserialize, Serialize};

/// One page of alternate builds for a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
	pub count: u64,
	#[serde(default)]
	pub next: Option<String>,
	#[serde(default)]
	pub previous: Option<String>,
	#[serde(default)]
	pub results: Vec<AlternateBuild>,
}

/// A community-designed alternate build (MOC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternateBuild {
	pub set_num: String,
	pub name: String,
	#[serde(default)]
	pub year: Option<i32>,
	pub num_parts: u32,
	#[serde(default)]
	pub moc_img_url: Option<String>,
	pub moc_url: String,
	pub designer_name: String,
	pub designer_url: String,
}
