//! Loader boundary: turns fixture files into objects and persists them.

use crate::error::FixtureContextResult;
use crate::persistence::Persister;

/// Loads fixture files through a persister.
///
/// Parsing the files and building the object graph is entirely up to the
/// implementation. Failures are reported through
/// [`FixtureContextError::LoadError`](crate::FixtureContextError::LoadError)
/// or whatever the persister returned.
pub trait Loader: Send + Sync {
	/// Loads `fixtures`, in order, writing the resulting objects with `persister`.
	fn load(&self, persister: &dyn Persister, fixtures: &[String]) -> FixtureContextResult<()>;
}
