// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server-rendered query form.

use axum::{
	extract::{RawQuery, State},
	response::Html,
};
use mocfinder_web::{render_page, SearchController};

use crate::{
	api::AppState,
	routes::{first_query_value, rebrickable::LocalProxyTransport},
};

/// GET / - The query form; submitting it reloads this page with `set_num`.
pub async fn home_page(
	State(state): State<AppState>,
	RawQuery(query): RawQuery,
) -> Html<String> {
	let Some(input) = first_query_value(query.as_deref(), "set_num") else {
		return Html(render_page(&SearchController::new()));
	};

	let mut controller = SearchController::with_input(input);
	controller.submit(&LocalProxyTransport::new(state)).await;
	Html(render_page(&controller))
}
