//! Adapter from native ORM manager handles to [`Persister`].

use std::fmt;
use std::sync::Arc;

use super::Persister;
use crate::error::FixtureContextResult;
use crate::fixtures::FixtureRecord;

/// Native ORM manager handle.
///
/// Mirrors the unit-of-work shape of ORM entity managers: objects are staged
/// with `persist` and written with `flush`.
pub trait ObjectManager: Send + Sync {
	/// Stages a single object for insertion.
	fn persist(&self, object: &FixtureRecord) -> FixtureContextResult<()>;

	/// Writes every staged object.
	fn flush(&self) -> FixtureContextResult<()>;
}

/// [`Persister`] that delegates to a native [`ObjectManager`].
///
/// Each batch is staged object by object and flushed once.
#[derive(Clone)]
pub struct ObjectManagerPersister {
	manager: Arc<dyn ObjectManager>,
}

impl ObjectManagerPersister {
	/// Wraps the given manager.
	pub fn new(manager: Arc<dyn ObjectManager>) -> Self {
		Self { manager }
	}

	/// Returns the wrapped manager.
	pub fn object_manager(&self) -> &Arc<dyn ObjectManager> {
		&self.manager
	}
}

impl fmt::Debug for ObjectManagerPersister {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ObjectManagerPersister").finish_non_exhaustive()
	}
}

impl Persister for ObjectManagerPersister {
	fn persist(&self, objects: &[FixtureRecord]) -> FixtureContextResult<()> {
		for object in objects {
			self.manager.persist(object)?;
		}
		self.manager.flush()
	}
}
