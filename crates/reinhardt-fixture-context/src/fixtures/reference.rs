//! Classification of raw fixture references.
//!
//! A reference is tagged by its lexical form, checked in this order:
//!
//! 1. starts with `/` and names an existing directory: expanded by the finder;
//!    any other `/` reference is an absolute file path, kept as written
//! 2. starts with `@`: a bundle name when it has no `.`, otherwise a
//!    bundle-relative file (`@AcmeBundle/fixtures/users.yml`) kept as written
//!    for the finder's resolution pass
//! 3. anything else: a file path relative to the base path

/// A single classified fixture reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureReference {
	/// Concrete file path, passed to the finder's resolution pass as is.
	File(String),
	/// Bundle name (without the leading `@`).
	Bundle(String),
	/// Absolute directory whose fixture files are expanded by the finder.
	Directory(String),
}

impl FixtureReference {
	/// Classifies `reference`.
	///
	/// `is_directory` is only consulted for references starting with `/`.
	pub fn classify(
		reference: &str,
		base_path: Option<&str>,
		is_directory: impl Fn(&str) -> bool,
	) -> Self {
		if reference.starts_with('/') {
			if is_directory(reference) {
				return Self::Directory(reference.to_string());
			}
			return Self::File(reference.to_string());
		}

		if let Some(bundle) = reference.strip_prefix('@') {
			if reference.contains('.') {
				return Self::File(reference.to_string());
			}
			return Self::Bundle(bundle.to_string());
		}

		Self::File(join_base_path(base_path, reference))
	}
}

/// Joins a relative fixture reference onto the base path as `{base}/{reference}`.
///
/// A missing base path joins as the empty string.
pub fn join_base_path(base_path: Option<&str>, reference: &str) -> String {
	format!("{}/{}", base_path.unwrap_or_default(), reference)
}

/// References split into the three buckets, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedReferences {
	/// File paths referenced directly.
	pub direct: Vec<String>,
	/// Bundle names to expand.
	pub bundles: Vec<String>,
	/// Absolute directories to expand.
	pub directories: Vec<String>,
}

impl ClassifiedReferences {
	/// Partitions `references` in a single pass.
	pub fn partition<I, S>(
		references: I,
		base_path: Option<&str>,
		is_directory: impl Fn(&str) -> bool,
	) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut classified = Self::default();

		for reference in references {
			let reference = reference.as_ref();
			let kind = FixtureReference::classify(reference, base_path, &is_directory);
			tracing::trace!(reference, ?kind, "classified fixture reference");

			match kind {
				FixtureReference::File(path) => classified.direct.push(path),
				FixtureReference::Bundle(name) => classified.bundles.push(name),
				FixtureReference::Directory(dir) => classified.directories.push(dir),
			}
		}

		classified
	}

}
