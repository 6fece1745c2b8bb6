// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Rebrickable API client for MOC Finder.
//!
//! Looks up community alternate builds ("MOCs") for a LEGO set number and
//! hands the upstream JSON back untouched, so the proxy can relay it.

pub mod client;
pub mod error;
pub mod types;

pub use client::{RebrickableClient, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use error::RebrickableError;
pub use types::AlternatesPayload;
