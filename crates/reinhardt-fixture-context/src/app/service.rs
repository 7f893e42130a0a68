//! Service values and the identifier-keyed registry they live in.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{FixtureContextError, FixtureContextResult};
use crate::persistence::{ObjectManager, Persister};

/// A value registered in a [`ServiceContainer`].
///
/// Persistence-capable services are tagged up front so callers can match on
/// the variant instead of inspecting runtime types.
#[derive(Clone)]
pub enum Service {
	/// A ready-to-use persister.
	Persister(Arc<dyn Persister>),
	/// A native ORM manager handle.
	ObjectManager(Arc<dyn ObjectManager>),
	/// Any other service.
	Other {
		/// Runtime type name of `value`.
		type_name: &'static str,
		/// The service itself.
		value: Arc<dyn Any + Send + Sync>,
	},
}

impl Service {
	/// Wraps an arbitrary value, recording its type name.
	pub fn other<T: Any + Send + Sync>(value: T) -> Self {
		Self::Other {
			type_name: std::any::type_name::<T>(),
			value: Arc::new(value),
		}
	}

	/// Returns a human-readable name for the kind of service held.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Persister(_) => "Persister",
			Self::ObjectManager(_) => "ObjectManager",
			Self::Other { type_name, .. } => *type_name,
		}
	}

	/// Downcasts an [`Service::Other`] value to a concrete type.
	pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
		match self {
			Self::Other { value, .. } => value.clone().downcast::<T>().ok(),
			_ => None,
		}
	}
}

impl fmt::Debug for Service {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Service").field(&self.type_name()).finish()
	}
}

/// Registry of services keyed by identifier.
#[derive(Default)]
pub struct ServiceContainer {
	services: RwLock<HashMap<String, Service>>,
}

impl ServiceContainer {
	/// Creates an empty container.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a service, replacing any previous one with the same id.
	pub fn register(&self, id: impl Into<String>, service: Service) {
		self.services.write().insert(id.into(), service);
	}

	/// Looks up a service by identifier.
	///
	/// # Errors
	///
	/// Returns [`FixtureContextError::ServiceNotFound`] if nothing is registered
	/// under `id`.
	pub fn get(&self, id: &str) -> FixtureContextResult<Service> {
		self.services
			.read()
			.get(id)
			.cloned()
			.ok_or_else(|| FixtureContextError::ServiceNotFound(id.to_string()))
	}

	/// Checks if a service is registered under `id`.
	pub fn has(&self, id: &str) -> bool {
		self.services.read().contains_key(id)
	}

	/// Returns all registered identifiers.
	pub fn ids(&self) -> Vec<String> {
		self.services.read().keys().cloned().collect()
	}

	/// Returns the number of registered services.
	pub fn len(&self) -> usize {
		self.services.read().len()
	}

	/// Returns true if no services are registered.
	pub fn is_empty(&self) -> bool {
		self.services.read().is_empty()
	}
}

impl fmt::Debug for ServiceContainer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ServiceContainer")
			.field("ids", &self.ids())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_register_and_get() {
		let container = ServiceContainer::new();
		container.register("app.answer", Service::other(42u32));

		assert!(container.has("app.answer"));
		assert_eq!(container.len(), 1);

		let service = container.get("app.answer").unwrap();
		assert_eq!(*service.downcast::<u32>().unwrap(), 42);
	}

	#[rstest]
	fn test_get_unknown_id() {
		let container = ServiceContainer::new();
		let result = container.get("missing");
		assert!(
			matches!(result, Err(FixtureContextError::ServiceNotFound(id)) if id == "missing")
		);
	}

	#[rstest]
	fn test_other_records_type_name() {
		let service = Service::other(String::from("value"));
		assert!(service.type_name().ends_with("String"));
		assert!(service.downcast::<u32>().is_none());
	}

	#[rstest]
	fn test_register_replaces_existing() {
		let container = ServiceContainer::new();
		container.register("id", Service::other(1u8));
		container.register("id", Service::other(2u8));

		assert_eq!(container.len(), 1);
		assert_eq!(*container.get("id").unwrap().downcast::<u8>().unwrap(), 2);
	}
}
