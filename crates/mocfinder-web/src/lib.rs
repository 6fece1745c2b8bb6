// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The MOC Finder query form.
//!
//! [`SearchController`] owns the input and the search state; a
//! [`ProxyTransport`] carries one submission to the proxy endpoint; the
//! [`render`] functions turn the current state into HTML or terminal text.

pub mod controller;
pub mod models;
pub mod query;
pub mod render;
pub mod transport;

pub use controller::{SearchController, SearchState, EMPTY_INPUT_MESSAGE, UNKNOWN_ERROR_MESSAGE};
pub use models::{AlternateBuild, SearchResponse};
pub use query::{EmptySetNumber, SearchQuery};
pub use render::{escape_html, render_page, render_text};
pub use transport::{HttpProxyTransport, ProxyReply, ProxyTransport, TransportError, PROXY_PATH};
