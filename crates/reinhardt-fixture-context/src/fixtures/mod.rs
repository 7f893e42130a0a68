//! Fixture reference resolution.
//!
//! - [`FixtureReference`] / [`ClassifiedReferences`] - classify raw references
//! - [`FixturesFinder`] - expand bundles and directories into files
//! - [`Loader`] - load the resolved files through a persister
//! - [`FixtureRecord`] - the object unit persisters receive

mod finder;
mod format;
mod loader;
mod reference;

pub use finder::{DEFAULT_FIXTURES_DIR, FileSystemFinder, FixturesFinder};
pub use format::{FixtureFormat, FixtureRecord};
pub use loader::Loader;
pub use reference::{ClassifiedReferences, FixtureReference, join_base_path};
