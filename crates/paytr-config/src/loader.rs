//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, File};

/// Load settings from the config file, if present
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.build()?;

	s.try_deserialize()
}
