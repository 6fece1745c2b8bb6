// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, a TOML file, and the environment.

use std::path::PathBuf;

use mocfinder_common_secret::load_secret_env;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{HttpConfigLayer, LoggingConfigLayer, RebrickableConfigLayer};

/// Name of the credential variable; `REBRICKABLE_API_KEY_FILE` is honoured too.
pub const API_KEY_ENV: &str = "REBRICKABLE_API_KEY";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file source. A missing file contributes nothing.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/mocfinder/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `MOCFINDER_SERVER_<FIELD>`, except the credential which keeps
/// the upstream's own name (`REBRICKABLE_API_KEY`).
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		Ok(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: env_var("MOCFINDER_SERVER_HOST"),
				port: env_parse("MOCFINDER_SERVER_PORT")?,
			}),
			logging: Some(LoggingConfigLayer {
				level: env_var("MOCFINDER_SERVER_LOG_LEVEL"),
			}),
			rebrickable: Some(RebrickableConfigLayer {
				api_key: load_secret_env(API_KEY_ENV)?,
				base_url: env_var("MOCFINDER_SERVER_REBRICKABLE_BASE_URL"),
				page_size: env_parse("MOCFINDER_SERVER_REBRICKABLE_PAGE_SIZE")?,
			}),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid {} value '{v}'", std::any::type_name::<T>()),
		}),
		None => Ok(None),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn precedence_orders_env_last() {
		assert!(Precedence::Defaults < Precedence::ConfigFile);
		assert!(Precedence::ConfigFile < Precedence::Environment);
	}

	#[test]
	fn missing_toml_is_empty_layer() {
		let layer = TomlSource::new("/nonexistent/mocfinder.toml").load().unwrap();
		assert!(layer.http.is_none());
	}

	#[test]
	fn toml_file_is_parsed() {
		let mut file = NamedTempFile::new().unwrap();
		write!(
			file,
			r#"
[http]
port = 9191

[rebrickable]
base_url = "http://127.0.0.1:1234/api/v3"
"#
		)
		.unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		assert_eq!(layer.http.unwrap().port, Some(9191));
		assert_eq!(
			layer.rebrickable.unwrap().base_url.as_deref(),
			Some("http://127.0.0.1:1234/api/v3")
		);
	}

	#[test]
	fn malformed_toml_reports_path() {
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "[http\nport = ").unwrap();
		let err = TomlSource::new(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}

	#[test]
	fn env_parse_rejects_garbage() {
		let name = "MOCFINDER_TEST_BAD_PORT";
		std::env::set_var(name, "eighty");
		let err = env_parse::<u16>(name).unwrap_err();
		assert!(err.to_string().contains(name));
		std::env::remove_var(name);
	}
}
