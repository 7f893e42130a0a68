//! Persistence abstractions consumed by fixture loaders.
//!
//! A [`Persister`] is the single capability a loader needs: write a batch of
//! fixture objects. Native ORM handles implement [`ObjectManager`] instead and
//! are adapted behind [`ObjectManagerPersister`].

mod object_manager;

pub use object_manager::{ObjectManager, ObjectManagerPersister};

use std::sync::Arc;

use crate::app::Service;
use crate::error::FixtureContextResult;
use crate::fixtures::FixtureRecord;

/// Writes fixture objects into a persistence layer.
pub trait Persister: Send + Sync {
	/// Persists the given objects.
	fn persist(&self, objects: &[FixtureRecord]) -> FixtureContextResult<()>;
}

/// Persister argument as supplied by a scenario step.
///
/// Steps may omit the persister, name a registered service, or hand over a
/// value directly. [`FixtureContext`](crate::FixtureContext) normalizes every
/// variant into one `Arc<dyn Persister>`.
#[derive(Debug, Clone, Default)]
pub enum PersisterArg {
	/// Use the context's default persister.
	#[default]
	Absent,
	/// Service identifier to look up in the application container.
	ServiceId(String),
	/// An already resolved service value.
	Value(Service),
}

impl From<&str> for PersisterArg {
	fn from(id: &str) -> Self {
		Self::ServiceId(id.to_string())
	}
}

impl From<String> for PersisterArg {
	fn from(id: String) -> Self {
		Self::ServiceId(id)
	}
}

impl From<Service> for PersisterArg {
	fn from(service: Service) -> Self {
		Self::Value(service)
	}
}

impl From<Arc<dyn Persister>> for PersisterArg {
	fn from(persister: Arc<dyn Persister>) -> Self {
		Self::Value(Service::Persister(persister))
	}
}

impl From<Arc<dyn ObjectManager>> for PersisterArg {
	fn from(manager: Arc<dyn ObjectManager>) -> Self {
		Self::Value(Service::ObjectManager(manager))
	}
}

impl<T> From<Option<T>> for PersisterArg
where
	T: Into<PersisterArg>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Absent, Into::into)
	}
}
