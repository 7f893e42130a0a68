//! Recording doubles for the fixture context collaborators.

use std::collections::HashMap;

use parking_lot::Mutex;
use reinhardt_fixture_context::prelude::*;
use serde_json::json;

/// Model id of the records produced by [`RecordingLoader`].
pub const FILE_MODEL: &str = "fixtures.File";

/// Persister remembering every record it was handed.
#[derive(Default)]
pub struct RecordingPersister {
	records: Mutex<Vec<FixtureRecord>>,
}

impl RecordingPersister {
	/// Paths of the files whose records reached this persister.
	pub fn paths(&self) -> Vec<String> {
		self.records
			.lock()
			.iter()
			.filter_map(|record| record.fields["path"].as_str().map(str::to_string))
			.collect()
	}
}

impl Persister for RecordingPersister {
	fn persist(&self, objects: &[FixtureRecord]) -> FixtureContextResult<()> {
		self.records.lock().extend_from_slice(objects);
		Ok(())
	}
}

/// ORM manager journaling persist and flush calls.
#[derive(Default)]
pub struct RecordingManager {
	journal: Mutex<Vec<String>>,
}

impl RecordingManager {
	/// Journal entries in call order.
	pub fn journal(&self) -> Vec<String> {
		self.journal.lock().clone()
	}
}

impl ObjectManager for RecordingManager {
	fn persist(&self, object: &FixtureRecord) -> FixtureContextResult<()> {
		let path = object.fields["path"].as_str().unwrap_or_default();
		self.journal.lock().push(format!("persist {}", path));
		Ok(())
	}

	fn flush(&self) -> FixtureContextResult<()> {
		self.journal.lock().push("flush".to_string());
		Ok(())
	}
}

/// Loader turning each fixture path into one record and persisting them as a batch.
#[derive(Default)]
pub struct RecordingLoader {
	calls: Mutex<Vec<Vec<String>>>,
	failure: Option<String>,
}

impl RecordingLoader {
	/// Creates a loader that always fails with `message`.
	pub fn failing(message: &str) -> Self {
		Self {
			failure: Some(message.to_string()),
			..Default::default()
		}
	}

	/// Fixture lists received, one entry per `load` call.
	pub fn calls(&self) -> Vec<Vec<String>> {
		self.calls.lock().clone()
	}
}

impl Loader for RecordingLoader {
	fn load(&self, persister: &dyn Persister, fixtures: &[String]) -> FixtureContextResult<()> {
		self.calls.lock().push(fixtures.to_vec());

		if let Some(message) = &self.failure {
			return Err(FixtureContextError::LoadError(message.clone()));
		}

		let records: Vec<FixtureRecord> = fixtures
			.iter()
			.map(|path| FixtureRecord::new(FILE_MODEL, json!({ "path": path })))
			.collect();
		persister.persist(&records)
	}
}

/// Finder with canned expansions that records what it was asked.
#[derive(Default)]
pub struct StubFinder {
	directories: Vec<String>,
	bundle_files: HashMap<String, Vec<String>>,
	directory_files: HashMap<String, Vec<String>>,
	/// `(bundle names, environment)` per `get_fixtures` call.
	pub bundle_calls: Mutex<Vec<(Vec<String>, String)>>,
	/// Directories per `get_fixtures_from_directory` call.
	pub directory_calls: Mutex<Vec<Vec<String>>>,
	/// Input of every `resolve_fixtures` call.
	pub resolve_calls: Mutex<Vec<Vec<String>>>,
}

impl StubFinder {
	/// Declares `path` an existing directory expanding to `files`.
	pub fn with_directory(mut self, path: &str, files: &[&str]) -> Self {
		self.directories.push(path.to_string());
		self.directory_files
			.insert(path.to_string(), files.iter().map(|f| f.to_string()).collect());
		self
	}

	/// Declares the fixture files of bundle `name`.
	pub fn with_bundle(mut self, name: &str, files: &[&str]) -> Self {
		self.bundle_files
			.insert(name.to_string(), files.iter().map(|f| f.to_string()).collect());
		self
	}
}

impl FixturesFinder for StubFinder {
	fn get_fixtures(
		&self,
		_app: &dyn Application,
		bundles: &[Bundle],
		environment: &str,
	) -> FixtureContextResult<Vec<String>> {
		self.bundle_calls.lock().push((
			bundles.iter().map(|b| b.name().to_string()).collect(),
			environment.to_string(),
		));

		Ok(bundles
			.iter()
			.flat_map(|b| self.bundle_files.get(b.name()).cloned().unwrap_or_default())
			.collect())
	}

	fn get_fixtures_from_directory(
		&self,
		directories: &[String],
	) -> FixtureContextResult<Vec<String>> {
		self.directory_calls.lock().push(directories.to_vec());

		Ok(directories
			.iter()
			.flat_map(|d| self.directory_files.get(d).cloned().unwrap_or_default())
			.collect())
	}

	fn resolve_fixtures(
		&self,
		_app: &dyn Application,
		fixtures: Vec<String>,
	) -> FixtureContextResult<Vec<String>> {
		self.resolve_calls.lock().push(fixtures.clone());
		Ok(fixtures)
	}

	fn is_directory(&self, path: &str) -> bool {
		self.directories.iter().any(|dir| dir == path)
	}
}
