// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! OpenAPI documentation for mocfinder-server, served at `/api/openapi.json`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
	info(
		title = "MOC Finder API",
		version = "1.0.0",
		description = "Find community alternate builds (MOCs) for LEGO sets via the Rebrickable API.",
		license(name = "Proprietary"),
		contact(
			name = "Geoffrey Huntley",
			email = "ghuntley@ghuntley.com",
			url = "https://ghuntley.com"
		)
	),
	servers(
		(url = "/", description = "Local server")
	),
	tags(
		(name = "rebrickable", description = "Rebrickable alternates proxy"),
		(name = "health", description = "Health checks")
	),
	paths(
		crate::routes::rebrickable::proxy_rebrickable,
		crate::routes::health::health_check,
	),
	components(schemas(
		crate::error::ErrorResponse,
		crate::routes::health::HealthResponse,
		crate::routes::health::HealthStatus,
	))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn documents_json_routes() {
		let doc = ApiDoc::openapi();
		assert!(doc.paths.paths.contains_key("/api/rebrickable-proxy"));
		assert!(doc.paths.paths.contains_key("/health"));
	}
}
