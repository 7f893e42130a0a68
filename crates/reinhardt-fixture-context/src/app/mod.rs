//! Running application as seen by the fixture context.
//!
//! The context needs three things from the application under test: bundle
//! lookup for `@Bundle` references, the active environment name, and service
//! lookup for persister identifiers. [`Application`] captures exactly that;
//! [`Kernel`] is the stock implementation.

mod service;

pub use service::{Service, ServiceContainer};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{FixtureContextError, FixtureContextResult};

/// Capabilities of the running application consumed by the fixture context.
pub trait Application: Send + Sync {
	/// Looks up a bundle by name.
	///
	/// # Errors
	///
	/// Returns [`FixtureContextError::BundleNotFound`] for an unknown name.
	fn bundle(&self, name: &str) -> FixtureContextResult<Bundle>;

	/// Returns the active environment (e.g. "test").
	fn environment(&self) -> &str;

	/// Looks up a service by identifier.
	///
	/// # Errors
	///
	/// Returns [`FixtureContextError::ServiceNotFound`] for an unknown id.
	fn service(&self, id: &str) -> FixtureContextResult<Service>;
}

/// A pluggable application module that ships its own fixture directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
	name: String,
	path: PathBuf,
}

impl Bundle {
	/// Creates a bundle rooted at `path`.
	pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
		Self {
			name: name.into(),
			path: path.into(),
		}
	}

	/// Returns the bundle name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the bundle root directory.
	pub fn path(&self) -> &Path {
		&self.path
	}
}

/// Stock [`Application`]: an environment, a set of bundles and a service
/// container.
#[derive(Debug)]
pub struct Kernel {
	environment: String,
	bundles: HashMap<String, Bundle>,
	container: ServiceContainer,
}

impl Kernel {
	/// Starts building a kernel.
	pub fn builder() -> KernelBuilder {
		KernelBuilder::default()
	}

	/// Returns the service container.
	pub fn container(&self) -> &ServiceContainer {
		&self.container
	}
}

impl Application for Kernel {
	fn bundle(&self, name: &str) -> FixtureContextResult<Bundle> {
		self.bundles
			.get(name)
			.cloned()
			.ok_or_else(|| FixtureContextError::BundleNotFound(name.to_string()))
	}

	fn environment(&self) -> &str {
		&self.environment
	}

	fn service(&self, id: &str) -> FixtureContextResult<Service> {
		self.container.get(id)
	}
}

/// Builder for [`Kernel`].
#[derive(Debug)]
pub struct KernelBuilder {
	environment: String,
	bundles: HashMap<String, Bundle>,
	container: ServiceContainer,
}

impl Default for KernelBuilder {
	fn default() -> Self {
		Self {
			environment: "test".to_string(),
			bundles: HashMap::new(),
			container: ServiceContainer::new(),
		}
	}
}

impl KernelBuilder {
	/// Sets the environment name. Defaults to "test".
	pub fn environment(mut self, environment: impl Into<String>) -> Self {
		self.environment = environment.into();
		self
	}

	/// Registers a bundle under its own name.
	pub fn bundle(mut self, bundle: Bundle) -> Self {
		self.bundles.insert(bundle.name.clone(), bundle);
		self
	}

	/// Registers a service.
	pub fn service(self, id: impl Into<String>, service: Service) -> Self {
		self.container.register(id, service);
		self
	}

	/// Builds the kernel.
	pub fn build(self) -> Kernel {
		Kernel {
			environment: self.environment,
			bundles: self.bundles,
			container: self.container,
		}
	}
}
