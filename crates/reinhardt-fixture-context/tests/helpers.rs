//! Test helpers for reinhardt-fixture-context integration tests.
//!
//! Recording test doubles for every collaborator of the fixture context.

#[path = "helpers/doubles.rs"]
pub mod doubles;
