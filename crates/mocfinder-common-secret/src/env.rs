// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Loading secrets from the process environment.
//!
//! A secret named `VAR` can be given directly, or as a path in `VAR_FILE`
//! (Docker and Kubernetes mount secrets as files). The file form wins.

use std::path::PathBuf;
use std::{env, fs};

use thiserror::Error;

use crate::Secret;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Load `var` from the environment, preferring `{var}_FILE`.
///
/// Returns `Ok(None)` when neither is set or the value is empty. One
/// trailing newline is stripped from file contents before that check.
pub fn load_secret_env(var: &str) -> Result<Option<Secret<String>>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(path_str);
		let content = fs::read_to_string(&path).map_err(|source| SecretEnvError::Io {
			path: path.clone(),
			source,
		})?;
		let value = content.strip_suffix('\n').unwrap_or(&content);
		if value.is_empty() {
			return Ok(None);
		}
		return Ok(Some(Secret::new(value.to_string())));
	}

	Ok(env::var(var)
		.ok()
		.filter(|v| !v.is_empty())
		.map(Secret::new))
}
