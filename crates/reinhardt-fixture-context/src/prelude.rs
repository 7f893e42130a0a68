//! Convenience re-exports for common usage.
//!
//! ```ignore
//! use reinhardt_fixture_context::prelude::*;
//! ```

pub use crate::app::{Application, Bundle, Kernel, KernelBuilder, Service, ServiceContainer};
pub use crate::config::FixtureContextConfig;
pub use crate::context::FixtureContext;
pub use crate::error::{FixtureContextError, FixtureContextResult};
pub use crate::fixtures::{
	ClassifiedReferences, FileSystemFinder, FixtureFormat, FixtureRecord, FixtureReference,
	FixturesFinder, Loader,
};
pub use crate::persistence::{ObjectManager, ObjectManagerPersister, Persister, PersisterArg};
pub use crate::table::FixtureTable;
