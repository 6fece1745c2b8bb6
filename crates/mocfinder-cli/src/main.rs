// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `mocfinder` - look up alternate builds through a MOC Finder server.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mocfinder_web::{render_text, HttpProxyTransport, SearchController, SearchState};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "mocfinder", version, about, long_about = None)]
struct Args {
	/// MOC Finder server URL
	#[arg(long, env = "MOCFINDER_SERVER_URL", default_value = "http://localhost:8080")]
	server_url: String,

	/// Log level (overrides RUST_LOG)
	#[arg(short, long)]
	log_level: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Find alternate builds for a LEGO set
	Search {
		/// Set number, e.g. 10305-1
		set_num: String,

		/// Print the raw results as JSON
		#[arg(long)]
		json: bool,
	},
	/// Show version information
	Version,
}

fn init_tracing(log_level: Option<&str>) {
	let filter = match log_level {
		Some(level) => EnvFilter::new(level),
		None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
	};

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr))
		.init();
}

/// Returns whether the search ended in a successful state.
async fn run_search(server_url: &str, set_num: &str, json: bool) -> Result<bool> {
	let transport = HttpProxyTransport::new(server_url)
		.with_context(|| format!("invalid server URL: {server_url}"))?;
	debug!(endpoint = %transport.endpoint(), "searching");

	let mut controller = SearchController::with_input(set_num);
	controller.submit(&transport).await;

	match controller.state() {
		SearchState::Success(response) if json => {
			println!("{}", serde_json::to_string_pretty(response)?);
		}
		SearchState::Error(_) => eprint!("{}", render_text(&controller)),
		_ => print!("{}", render_text(&controller)),
	}

	Ok(matches!(controller.state(), SearchState::Success(_)))
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing(args.log_level.as_deref());

	match args.command {
		Command::Version => {
			println!("mocfinder {}", env!("CARGO_PKG_VERSION"));
		}
		Command::Search { set_num, json } => {
			if !run_search(&args.server_url, &set_num, json).await? {
				std::process::exit(1);
			}
		}
	}

	Ok(())
}
