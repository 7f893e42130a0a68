//! Expansion of bundle and directory references into fixture files.

use std::path::{Path, PathBuf};

use super::FixtureFormat;
use crate::app::{Application, Bundle};
use crate::config::FixtureContextConfig;
use crate::error::{FixtureContextError, FixtureContextResult};

/// Locates fixture files for a scenario.
///
/// The fixture context delegates every filesystem concern to this trait:
/// bundle expansion, directory expansion, the final resolution pass, and the
/// directory probe used while classifying `/` references.
pub trait FixturesFinder: Send + Sync {
	/// Returns the fixture files shipped by `bundles` for `environment`.
	fn get_fixtures(
		&self,
		app: &dyn Application,
		bundles: &[Bundle],
		environment: &str,
	) -> FixtureContextResult<Vec<String>>;

	/// Returns the fixture files found in `directories`.
	fn get_fixtures_from_directory(
		&self,
		directories: &[String],
	) -> FixtureContextResult<Vec<String>>;

	/// Final resolution pass over the accumulated fixture paths.
	fn resolve_fixtures(
		&self,
		app: &dyn Application,
		fixtures: Vec<String>,
	) -> FixtureContextResult<Vec<String>>;

	/// Returns true if `path` names an existing directory.
	fn is_directory(&self, path: &str) -> bool {
		Path::new(path).is_dir()
	}
}

/// Default directory, relative to a bundle root, holding its fixtures.
pub const DEFAULT_FIXTURES_DIR: &str = "fixtures";

/// [`FixturesFinder`] backed by the local filesystem.
///
/// Only files with a recognized [`FixtureFormat`] extension are picked up,
/// and directories are listed without recursion. Files found in one
/// directory are returned sorted by path.
#[derive(Debug, Clone)]
pub struct FileSystemFinder {
	fixtures_dir: String,
}

impl Default for FileSystemFinder {
	fn default() -> Self {
		Self::new()
	}
}

impl FileSystemFinder {
	/// Creates a finder looking in `<bundle>/fixtures`.
	pub fn new() -> Self {
		Self {
			fixtures_dir: DEFAULT_FIXTURES_DIR.to_string(),
		}
	}

	/// Creates a finder from configuration.
	pub fn from_config(config: &FixtureContextConfig) -> Self {
		Self::new().with_fixtures_dir(config.fixtures_dir.clone())
	}

	/// Sets the bundle-relative fixtures directory.
	pub fn with_fixtures_dir(mut self, dir: impl Into<String>) -> Self {
		self.fixtures_dir = dir.into();
		self
	}

	/// Returns the bundle-relative fixtures directory.
	pub fn fixtures_dir(&self) -> &str {
		&self.fixtures_dir
	}

	fn fixture_files_in(&self, dir: &Path) -> FixtureContextResult<Vec<String>> {
		if !dir.is_dir() {
			return Ok(Vec::new());
		}

		let mut files: Vec<PathBuf> = Vec::new();
		for entry in std::fs::read_dir(dir)? {
			let path = entry?.path();
			if path.is_file() && FixtureFormat::from_path(&path).is_some() {
				files.push(path);
			}
		}
		files.sort();

		Ok(files.iter().map(|p| p.display().to_string()).collect())
	}

	fn resolve_one(&self, app: &dyn Application, fixture: String) -> FixtureContextResult<String> {
		let resolved = match fixture
			.strip_prefix('@')
			.and_then(|shorthand| shorthand.split_once('/'))
		{
			Some((bundle, relative)) => app
				.bundle(bundle)?
				.path()
				.join(relative)
				.display()
				.to_string(),
			None => fixture,
		};

		if !Path::new(&resolved).exists() {
			return Err(FixtureContextError::FixtureNotFound(resolved));
		}

		Ok(resolved)
	}
}

impl FixturesFinder for FileSystemFinder {
	fn get_fixtures(
		&self,
		_app: &dyn Application,
		bundles: &[Bundle],
		environment: &str,
	) -> FixtureContextResult<Vec<String>> {
		let mut files = Vec::new();

		for bundle in bundles {
			let root = bundle.path().join(&self.fixtures_dir);
			files.extend(self.fixture_files_in(&root)?);
			files.extend(self.fixture_files_in(&root.join(environment))?);
		}

		tracing::debug!(
			bundles = bundles.len(),
			environment,
			found = files.len(),
			"expanded bundle fixtures"
		);

		Ok(files)
	}

	fn get_fixtures_from_directory(
		&self,
		directories: &[String],
	) -> FixtureContextResult<Vec<String>> {
		let mut files = Vec::new();

		for directory in directories {
			files.extend(self.fixture_files_in(Path::new(directory))?);
		}

		tracing::debug!(
			directories = directories.len(),
			found = files.len(),
			"expanded directory fixtures"
		);

		Ok(files)
	}

	fn resolve_fixtures(
		&self,
		app: &dyn Application,
		fixtures: Vec<String>,
	) -> FixtureContextResult<Vec<String>> {
		fixtures
			.into_iter()
			.map(|fixture| self.resolve_one(app, fixture))
			.collect()
	}
}
