// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the MOC Finder server.
//!
//! Layers are merged from built-in defaults, an optional TOML file and the
//! environment (highest precedence), then finalized into [`ServerConfig`].
//!
//! ```ignore
//! let config = mocfinder_server_config::load_config()?;
//! println!("listening on {}", config.socket_addr());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, API_KEY_ENV,
};

use tracing::{debug, info, warn};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub logging: LoggingConfig,
	pub rebrickable: RebrickableConfig,
}

impl ServerConfig {
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration using `/etc/mocfinder/server.toml` as the file layer.
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	Ok(finalize(merged))
}

fn finalize(layer: ServerConfigLayer) -> ServerConfig {
	let http = layer.http.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();
	let rebrickable = layer.rebrickable.unwrap_or_default().finalize();

	if !rebrickable.is_configured() {
		warn!(
			var = API_KEY_ENV,
			"Rebrickable API key missing; proxy requests will fail until it is set"
		);
	}

	info!(
		host = %http.host,
		port = http.port,
		rebrickable_base_url = %rebrickable.base_url,
		rebrickable_configured = rebrickable.is_configured(),
		page_size = rebrickable.page_size,
		"Server configuration loaded"
	);

	ServerConfig {
		http,
		logging,
		rebrickable,
	}
}
