//! `mockjson-flow` - print Flow declarations for a fixture directory.
//!
//! ```text
//! mockjson-flow ./test/mocks > flow-typed/mocks.js
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use mockjson_core::{MockConfig, MockFactory};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mockjson-flow", version, about = "Print type declarations for JSON fixture mocks")]
struct Cli {
	/// Root fixture directory; one subdirectory per module
	directory: PathBuf,

	/// Write the declarations to a file instead of stdout
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Print the parsed descriptor tree as JSON instead of declarations
	#[arg(long)]
	json: bool,

	/// Reserved name for functions attached to the module itself
	#[arg(long)]
	marker: Option<String>,

	/// Log at debug level; RUST_LOG, when set, takes precedence
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> ExitCode {
	// A missing directory is a usage error; clap exits with status 2.
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!(error = %err, "failed to generate declarations");
			eprintln!("error: {:#}", err);
			ExitCode::FAILURE
		}
	}
}

fn init_tracing(verbose: bool) {
	let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
	let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
	let mut config = MockConfig::from_env();
	if let Some(marker) = &cli.marker {
		config = config.with_default_marker(marker.as_str());
	}
	debug!(directory = %cli.directory.display(), ?config, "loading fixtures");

	let factory = MockFactory::with_config(&cli.directory, config)
		.with_context(|| format!("failed to load fixtures from {}", cli.directory.display()))?;

	let rendered = if cli.json {
		serde_json::to_string_pretty(factory.tree())?
	} else {
		factory.to_flow_string()
	};

	match &cli.output {
		Some(path) => std::fs::write(path, rendered)
			.with_context(|| format!("failed to write {}", path.display()))?,
		None => println!("{}", rendered),
	}
	Ok(())
}
