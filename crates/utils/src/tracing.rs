// Copyright 2023 Ulvetanna Inc.

use std::{fs::File, io, path::PathBuf, sync::Mutex};

use ::tracing::Level;
use tracing_subscriber::{
	filter::LevelFilter, fmt::writer::BoxMakeWriter, layer::SubscriberExt,
	util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::env::{boolean_env_flag_set, env_value};

/// Environment variable holding the default log level.
pub const LOG_LEVEL_ENV: &str = "RMD160_LOG_LEVEL";
/// Boolean flag forcing the `DEBUG` level.
pub const LOG_DEBUG_ENV: &str = "RMD160_LOG_DEBUG";
/// Boolean flag enabling timestamps on every record.
pub const LOG_TIMESTAMP_ENV: &str = "RMD160_LOG_TIMESTAMP";
/// Path of a file that receives the log output instead of stderr.
pub const LOG_FILE_ENV: &str = "RMD160_LOG_FILE";

/// Settings for the process-wide tracing subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
	/// Default maximum level, overridden by `RUST_LOG` directives.
	pub level: Level,
	pub timestamps: bool,
	/// Write to this file instead of stderr.
	pub log_file: Option<PathBuf>,
}

impl Default for TracingConfig {
	fn default() -> Self {
		Self {
			level: Level::ERROR,
			timestamps: false,
			log_file: None,
		}
	}
}

impl TracingConfig {
	/// Build the configuration from the `RMD160_LOG_*` environment variables.
	///
	/// Unparseable levels fall back to the default.
	pub fn from_env() -> Self {
		let mut config = Self::default();
		if let Some(level) = env_value(LOG_LEVEL_ENV).and_then(|val| val.parse::<Level>().ok()) {
			config.level = level;
		}
		if boolean_env_flag_set(LOG_DEBUG_ENV) {
			config.level = Level::DEBUG;
		}
		config.timestamps = boolean_env_flag_set(LOG_TIMESTAMP_ENV);
		config.log_file = env_value(LOG_FILE_ENV).map(PathBuf::from);
		config
	}
}

/// Install a global subscriber according to `config`.
///
/// Installing a second subscriber is silently ignored, so this may be called from every test.
pub fn init_tracing_with(config: &TracingConfig) -> io::Result<()> {
	let writer = match &config.log_file {
		Some(path) => BoxMakeWriter::new(Mutex::new(File::create(path)?)),
		None => BoxMakeWriter::new(io::stderr),
	};

	let fmt_layer = tracing_subscriber::fmt::layer()
		.with_writer(writer)
		.with_ansi(config.log_file.is_none());
	let fmt_layer = if config.timestamps {
		fmt_layer.boxed()
	} else {
		fmt_layer.without_time().boxed()
	};

	let filter = EnvFilter::builder()
		.with_default_directive(LevelFilter::from_level(config.level).into())
		.from_env_lossy();

	let _ = tracing_subscriber::registry()
		.with(fmt_layer)
		.with(filter)
		.try_init();
	Ok(())
}

pub fn init_tracing() {
	let _ = init_tracing_with(&TracingConfig::from_env());
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config() {
		let config = TracingConfig::default();
		assert_eq!(config.level, Level::ERROR);
		assert!(!config.timestamps);
		assert!(config.log_file.is_none());
	}

	#[test]
	fn test_repeated_init_is_harmless() {
		let config = TracingConfig {
			level: Level::TRACE,
			..Default::default()
		};
		assert!(init_tracing_with(&config).is_ok());
		assert!(init_tracing_with(&config).is_ok());
		init_tracing();
	}
}
