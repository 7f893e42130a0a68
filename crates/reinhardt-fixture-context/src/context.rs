//! Scenario step context that seeds fixtures before a scenario runs.

use std::fmt;
use std::sync::Arc;

use crate::app::{Application, Service};
use crate::config::FixtureContextConfig;
use crate::error::{FixtureContextError, FixtureContextResult};
use crate::fixtures::{ClassifiedReferences, FixturesFinder, Loader};
use crate::persistence::{ObjectManagerPersister, Persister, PersisterArg};
use crate::table::FixtureTable;

/// Collaborators supplied by [`FixtureContext::init`].
struct Wiring {
	app: Arc<dyn Application>,
	finder: Arc<dyn FixturesFinder>,
	loader: Arc<dyn Loader>,
	persister: Arc<dyn Persister>,
}

/// Per-scenario fixture loading context.
///
/// Construction happens in two phases: the test runner creates the context
/// with [`FixtureContext::new`] before any services exist, and the composition
/// root later calls [`FixtureContext::init`] with the application and the
/// finder/loader/persister collaborators. Every loading operation fails with
/// [`FixtureContextError::NotInitialized`] until `init` has run.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use reinhardt_fixture_context::prelude::*;
///
/// struct NoopLoader;
///
/// impl Loader for NoopLoader {
///     fn load(&self, _: &dyn Persister, _: &[String]) -> FixtureContextResult<()> {
///         Ok(())
///     }
/// }
///
/// struct NoopPersister;
///
/// impl Persister for NoopPersister {
///     fn persist(&self, _: &[FixtureRecord]) -> FixtureContextResult<()> {
///         Ok(())
///     }
/// }
///
/// let mut context = FixtureContext::new(Some("/app/tests".to_string()));
/// context.init(
///     Arc::new(Kernel::builder().build()),
///     Arc::new(FileSystemFinder::new()),
///     Arc::new(NoopLoader),
///     Arc::new(NoopPersister),
///     None,
/// );
/// assert_eq!(context.base_path(), Some("/app/tests"));
/// ```
pub struct FixtureContext {
	base_path: Option<String>,
	wiring: Option<Wiring>,
}

impl FixtureContext {
	/// Creates an uninitialized context.
	pub fn new(base_path: Option<String>) -> Self {
		Self {
			base_path,
			wiring: None,
		}
	}

	/// Creates an uninitialized context from configuration.
	pub fn from_config(config: &FixtureContextConfig) -> Self {
		Self::new(config.base_path.clone())
	}

	/// Wires the collaborators.
	///
	/// `base_path` replaces the constructor value only when given. Calling
	/// `init` again replaces the previous wiring.
	pub fn init(
		&mut self,
		app: Arc<dyn Application>,
		finder: Arc<dyn FixturesFinder>,
		loader: Arc<dyn Loader>,
		persister: Arc<dyn Persister>,
		base_path: Option<String>,
	) -> &mut Self {
		self.wiring = Some(Wiring {
			app,
			finder,
			loader,
			persister,
		});

		if base_path.is_some() {
			self.base_path = base_path;
		}

		self
	}

	/// Returns true once [`init`](Self::init) has run.
	pub fn is_initialized(&self) -> bool {
		self.wiring.is_some()
	}

	/// Sets the base path for relative fixture references.
	pub fn set_base_path(&mut self, base_path: impl Into<String>) -> &mut Self {
		self.base_path = Some(base_path.into());
		self
	}

	/// Returns the base path for relative fixture references.
	pub fn base_path(&self) -> Option<&str> {
		self.base_path.as_deref()
	}

	/// Replaces the default persister.
	pub fn set_default_persister(
		&mut self,
		persister: Arc<dyn Persister>,
	) -> FixtureContextResult<&mut Self> {
		self.wiring_mut()?.persister = persister;
		Ok(self)
	}

	/// Returns the default persister.
	pub fn default_persister(&self) -> FixtureContextResult<Arc<dyn Persister>> {
		Ok(self.wiring()?.persister.clone())
	}

	/// Looks up a service of the running application.
	pub fn cast_service_id_to_service(&self, id: &str) -> FixtureContextResult<Service> {
		self.wiring()?.app.service(id)
	}

	/// Looks up a service and normalizes it into a persister.
	pub fn cast_service_id_to_persister(
		&self,
		id: &str,
	) -> FixtureContextResult<Arc<dyn Persister>> {
		let service = self.cast_service_id_to_service(id)?;
		self.resolve_persister(Some(service))
	}

	/// Loads a single fixture reference.
	pub fn there_are_fixtures(
		&self,
		fixtures_file: &str,
		persister: impl Into<PersisterArg>,
	) -> FixtureContextResult<()> {
		self.load_fixtures(&[fixtures_file], persister)
	}

	/// Loads the fixture references listed in the first column of `table`,
	/// in table order.
	pub fn there_are_several_fixtures(
		&self,
		table: &FixtureTable,
		persister: impl Into<PersisterArg>,
	) -> FixtureContextResult<()> {
		let fixtures_files = table.first_column()?;
		self.load_fixtures(&fixtures_files, persister)
	}

	/// Resolves `references` into fixture files and loads them.
	///
	/// Direct file references come first in input order, followed by bundle
	/// expansions, followed by directory expansions. The finder then runs its
	/// final resolution pass and the loader receives the result together
	/// with the normalized persister. Duplicates are not removed.
	pub fn load_fixtures<S: AsRef<str>>(
		&self,
		references: &[S],
		persister: impl Into<PersisterArg>,
	) -> FixtureContextResult<()> {
		let wiring = self.wiring()?;

		let persister = match persister.into() {
			PersisterArg::Absent => wiring.persister.clone(),
			PersisterArg::ServiceId(id) => self.cast_service_id_to_persister(&id)?,
			PersisterArg::Value(service) => self.resolve_persister(Some(service))?,
		};

		let ClassifiedReferences {
			direct,
			bundles,
			directories,
		} = ClassifiedReferences::partition(references, self.base_path(), |path| {
			wiring.finder.is_directory(path)
		});

		tracing::debug!(
			direct = direct.len(),
			bundles = bundles.len(),
			directories = directories.len(),
			"classified fixture references"
		);

		let mut fixtures = direct;

		if !bundles.is_empty() {
			let bundles = bundles
				.iter()
				.map(|name| wiring.app.bundle(name))
				.collect::<FixtureContextResult<Vec<_>>>()?;

			fixtures.extend(wiring.finder.get_fixtures(
				wiring.app.as_ref(),
				&bundles,
				wiring.app.environment(),
			)?);
		}

		if !directories.is_empty() {
			fixtures.extend(wiring.finder.get_fixtures_from_directory(&directories)?);
		}

		let fixtures = wiring
			.finder
			.resolve_fixtures(wiring.app.as_ref(), fixtures)?;

		tracing::debug!(fixtures = fixtures.len(), "loading resolved fixtures");

		wiring.loader.load(persister.as_ref(), &fixtures)
	}

	/// Normalizes a persister value.
	///
	/// `None` yields the default persister, a [`Service::Persister`] is
	/// returned unchanged and a [`Service::ObjectManager`] is wrapped in an
	/// [`ObjectManagerPersister`].
	///
	/// # Errors
	///
	/// Returns [`FixtureContextError::InvalidPersister`] for any other service,
	/// and [`FixtureContextError::NotInitialized`] for `None` before `init`.
	pub fn resolve_persister(
		&self,
		persister: Option<Service>,
	) -> FixtureContextResult<Arc<dyn Persister>> {
		match persister {
			None => self.default_persister(),
			Some(Service::Persister(persister)) => Ok(persister),
			Some(Service::ObjectManager(manager)) => {
				Ok(Arc::new(ObjectManagerPersister::new(manager)))
			}
			Some(Service::Other { type_name, .. }) => Err(FixtureContextError::InvalidPersister {
				actual: type_name.to_string(),
			}),
		}
	}

	fn wiring(&self) -> FixtureContextResult<&Wiring> {
		self.wiring
			.as_ref()
			.ok_or(FixtureContextError::NotInitialized)
	}

	fn wiring_mut(&mut self) -> FixtureContextResult<&mut Wiring> {
		self.wiring
			.as_mut()
			.ok_or(FixtureContextError::NotInitialized)
	}
}

impl Default for FixtureContext {
	fn default() -> Self {
		Self::new(None)
	}
}

impl fmt::Debug for FixtureContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FixtureContext")
			.field("base_path", &self.base_path)
			.field("initialized", &self.is_initialized())
			.finish()
	}
}
