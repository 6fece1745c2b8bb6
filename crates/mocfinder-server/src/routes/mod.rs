// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP route handlers.

pub mod health;
pub mod home;
pub mod rebrickable;

/// First value of `name` in a raw query string. Later repeats are ignored.
pub(crate) fn first_query_value(query: Option<&str>, name: &str) -> Option<String> {
	url::form_urlencoded::parse(query?.as_bytes())
		.find(|(key, _)| key == name)
		.map(|(_, value)| value.into_owned())
}
