// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! MOC Finder server.
//!
//! Serves the query form and a proxy that forwards set lookups to the
//! Rebrickable API with the server's API key attached.

pub mod api;
pub mod api_docs;
pub mod error;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use error::{ErrorResponse, ServerError};
pub use mocfinder_server_config::ServerConfig;
pub use routes::rebrickable::LocalProxyTransport;
