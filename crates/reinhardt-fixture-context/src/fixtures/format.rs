//! Fixture object and file format definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// A single object produced from a fixture file and handed to a persister.
///
/// # Example
///
/// ```json
/// {
///   "model": "auth.User",
///   "pk": 1,
///   "fields": {
///     "username": "admin"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixtureRecord {
	/// Model identifier in format "app.Model" (e.g., "auth.User").
	pub model: String,

	/// Primary key value. Optional for auto-increment fields.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pk: Option<Value>,

	/// Field values as a JSON object.
	pub fields: Value,
}

impl FixtureRecord {
	/// Creates a new fixture record.
	pub fn new(model: impl Into<String>, fields: Value) -> Self {
		Self {
			model: model.into(),
			pk: None,
			fields,
		}
	}

	/// Creates a new fixture record with a primary key.
	pub fn with_pk(model: impl Into<String>, pk: Value, fields: Value) -> Self {
		Self {
			model: model.into(),
			pk: Some(pk),
			fields,
		}
	}
}

/// Fixture file formats recognized during directory expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FixtureFormat {
	/// YAML format (default).
	#[default]
	Yaml,

	/// JSON format.
	Json,
}

impl FixtureFormat {
	/// Determines the fixture format from a file extension.
	///
	/// # Example
	///
	/// ```
	/// # use reinhardt_fixture_context::fixtures::FixtureFormat;
	/// assert_eq!(FixtureFormat::from_extension("yml"), Some(FixtureFormat::Yaml));
	/// assert_eq!(FixtureFormat::from_extension("YAML"), Some(FixtureFormat::Yaml));
	/// assert_eq!(FixtureFormat::from_extension("json"), Some(FixtureFormat::Json));
	/// assert_eq!(FixtureFormat::from_extension("php"), None);
	/// ```
	pub fn from_extension(ext: &str) -> Option<Self> {
		match ext.to_lowercase().as_str() {
			"yaml" | "yml" => Some(Self::Yaml),
			"json" => Some(Self::Json),
			_ => None,
		}
	}

	/// Determines the fixture format from a file path.
	///
	/// Returns `None` when the path has no extension or an unrecognized one.
	pub fn from_path(path: &Path) -> Option<Self> {
		path.extension()
			.and_then(|ext| ext.to_str())
			.and_then(Self::from_extension)
	}

	/// Returns the canonical file extension for this format.
	pub fn extension(&self) -> &'static str {
		match self {
			Self::Yaml => "yml",
			Self::Json => "json",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_record_with_pk() {
		let record = FixtureRecord::with_pk("auth.User", json!(7), json!({"username": "admin"}));
		assert_eq!(record.pk, Some(json!(7)));
		assert_eq!(record.model, "auth.User");
	}

	#[rstest]
	fn test_record_serialization_skips_missing_pk() {
		let record = FixtureRecord::new("auth.User", json!({}));
		let value = serde_json::to_value(&record).unwrap();
		assert!(value.get("pk").is_none());
	}

	#[rstest]
	#[case("users.yml", Some(FixtureFormat::Yaml))]
	#[case("users.YAML", Some(FixtureFormat::Yaml))]
	#[case("users.json", Some(FixtureFormat::Json))]
	#[case("users.php", None)]
	#[case("README", None)]
	fn test_format_from_path(#[case] path: &str, #[case] expected: Option<FixtureFormat>) {
		assert_eq!(FixtureFormat::from_path(Path::new(path)), expected);
	}

	#[rstest]
	fn test_extension() {
		assert_eq!(FixtureFormat::Yaml.extension(), "yml");
		assert_eq!(FixtureFormat::Json.extension(), "json");
	}
}
