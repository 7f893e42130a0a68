//! Scenario step context that seeds fixture data before a BDD scenario runs.
//!
//! A scenario step names one or more fixture references and, optionally, the
//! persister to write them with:
//!
//! ```gherkin
//! Given the fixtures "fixtures/users.yml" are loaded
//! Given the fixtures "@AcmeBundle" are loaded with the persister "app.persister"
//! Given the following fixtures are loaded:
//!   | fixtures/users.yml |
//!   | /srv/shared/fixtures |
//! ```
//!
//! [`FixtureContext`] turns those references into an ordered list of fixture
//! files and hands it, together with a normalized [`Persister`], to a
//! [`Loader`](fixtures::Loader).
//!
//! # Fixture references
//!
//! | Reference | Meaning |
//! |---|---|
//! | `/abs/dir` (existing directory) | every fixture file in the directory |
//! | `/abs/file.yml` | the file itself |
//! | `@AcmeBundle` (no `.`) | the fixtures shipped by the bundle |
//! | `@AcmeBundle/fixtures/users.yml`, `@file.yml` | kept as written, resolved by the finder |
//! | anything else | `{base_path}/{reference}` |
//!
//! Direct file references keep their input order and come first, followed by
//! bundle expansions, followed by directory expansions.
//!
//! # Persisters
//!
//! The persister argument is a [`PersisterArg`]: absent (use the default
//! persister), a service identifier resolved through the
//! [`Application`](app::Application), or a [`Service`](app::Service) value.
//! Native ORM handles ([`ObjectManager`](persistence::ObjectManager)) are
//! wrapped in an [`ObjectManagerPersister`](persistence::ObjectManagerPersister).
//!
//! # Collaborators
//!
//! - [`Application`](app::Application) / [`Kernel`](app::Kernel) - bundles, environment, services
//! - [`FixturesFinder`](fixtures::FixturesFinder) / [`FileSystemFinder`](fixtures::FileSystemFinder) - expansion and resolution
//! - [`Loader`](fixtures::Loader) - parsing and persisting, supplied by the caller

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod persistence;
pub mod prelude;
pub mod table;

// Re-export commonly used types at crate root
pub use context::FixtureContext;
pub use error::{FixtureContextError, FixtureContextResult};
pub use persistence::{Persister, PersisterArg};
pub use table::FixtureTable;
