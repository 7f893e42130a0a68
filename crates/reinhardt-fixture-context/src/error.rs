//! Error types for the fixture context.
//!
//! Every fallible operation in this crate returns [`FixtureContextResult`].
//! Collaborator implementations (finders, loaders, persisters) report their
//! own failures through the same enum so that they surface unchanged to the
//! scenario runner.

use thiserror::Error;

/// Errors that can occur while resolving or loading scenario fixtures.
#[derive(Debug, Error)]
pub enum FixtureContextError {
	/// No service is registered under the given identifier.
	#[error("Service not found: {0}")]
	ServiceNotFound(String),

	/// A persister argument had a shape that cannot be normalized.
	#[error(
		"Invalid persister type, expected `Persister` or `ObjectManager`. Got {actual} instead."
	)]
	InvalidPersister {
		/// Runtime type name of the rejected value.
		actual: String,
	},

	/// A resolution operation was invoked before `init` wired the collaborators.
	#[error("Fixture context is not initialized: call `init` before loading fixtures")]
	NotInitialized,

	/// The application has no bundle registered under the given name.
	#[error("Bundle not found: {0}")]
	BundleNotFound(String),

	/// A fixture path handed to the final resolution pass does not exist.
	#[error("Fixture file not found: {0}")]
	FixtureNotFound(String),

	/// A step table row carried no fixture reference.
	#[error("Fixture table row {0} is empty")]
	EmptyTableRow(usize),

	/// The loader failed to load the resolved fixture files.
	#[error("Load error: {0}")]
	LoadError(String),

	/// The persister failed to write fixture objects.
	#[error("Persist error: {0}")]
	PersistError(String),

	/// Configuration could not be parsed.
	#[error("Configuration error: {0}")]
	ConfigError(String),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

/// Result type alias for fixture context operations.
pub type FixtureContextResult<T> = Result<T, FixtureContextError>;
