//! Configuration for the fixture context.
//!
//! Supports TOML configuration files and environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FixtureContextError, FixtureContextResult};
use crate::fixtures::DEFAULT_FIXTURES_DIR;

/// Environment variable overriding [`FixtureContextConfig::base_path`].
pub const BASE_PATH_ENV: &str = "REINHARDT_FIXTURES_BASE_PATH";

/// Environment variable overriding [`FixtureContextConfig::fixtures_dir`].
pub const FIXTURES_DIR_ENV: &str = "REINHARDT_FIXTURES_DIR";

/// Fixture context configuration.
///
/// ```toml
/// base_path = "/app/tests"
/// fixtures_dir = "fixtures"
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureContextConfig {
	/// Root against which relative fixture references are joined.
	pub base_path: Option<String>,

	/// Bundle-relative directory searched for bundle fixtures.
	pub fixtures_dir: String,
}

impl Default for FixtureContextConfig {
	fn default() -> Self {
		Self {
			base_path: None,
			fixtures_dir: DEFAULT_FIXTURES_DIR.to_string(),
		}
	}
}

impl FixtureContextConfig {
	/// Sets the base path.
	pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
		self.base_path = Some(base_path.into());
		self
	}

	/// Sets the bundle-relative fixtures directory.
	pub fn with_fixtures_dir(mut self, dir: impl Into<String>) -> Self {
		self.fixtures_dir = dir.into();
		self
	}

	/// Load configuration from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if file cannot be read or parsed.
	pub fn from_file(path: impl AsRef<Path>) -> FixtureContextResult<Self> {
		let content = std::fs::read_to_string(path.as_ref())?;
		Self::from_toml(&content)
	}

	/// Parse configuration from TOML string.
	pub fn from_toml(content: &str) -> FixtureContextResult<Self> {
		toml::from_str(content).map_err(|e| FixtureContextError::ConfigError(e.to_string()))
	}

	/// Applies [`BASE_PATH_ENV`] and [`FIXTURES_DIR_ENV`] on top of the current values.
	pub fn with_env_overrides(self) -> Self {
		self.with_overrides_from(|key| std::env::var(key).ok())
	}

	fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
		if let Some(base_path) = lookup(BASE_PATH_ENV) {
			self.base_path = Some(base_path);
		}

		if let Some(dir) = lookup(FIXTURES_DIR_ENV) {
			self.fixtures_dir = dir;
		}

		self
	}
}
