//! Step table carrying one fixture reference per row.

use crate::error::{FixtureContextError, FixtureContextResult};

/// Table argument of a scenario step, e.g.
///
/// ```gherkin
/// Given the following fixtures are loaded:
///   | fixtures/users.yml |
///   | @AcmeBundle        |
/// ```
///
/// Only the first column of each row is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureTable {
	rows: Vec<Vec<String>>,
}

impl FixtureTable {
	/// Creates a table from raw rows.
	pub fn new(rows: Vec<Vec<String>>) -> Self {
		Self { rows }
	}

	/// Creates a table from anything that yields rows of cells.
	pub fn from_rows<R, C, S>(rows: R) -> Self
	where
		R: IntoIterator<Item = C>,
		C: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			rows: rows
				.into_iter()
				.map(|row| row.into_iter().map(Into::into).collect())
				.collect(),
		}
	}

	/// Returns the raw rows.
	pub fn rows(&self) -> &[Vec<String>] {
		&self.rows
	}

	/// Returns the first cell of every row, in table order.
	///
	/// # Errors
	///
	/// Returns [`FixtureContextError::EmptyTableRow`] for a row without cells.
	pub fn first_column(&self) -> FixtureContextResult<Vec<&str>> {
		self.rows
			.iter()
			.enumerate()
			.map(|(index, row)| {
				row.first()
					.map(String::as_str)
					.ok_or(FixtureContextError::EmptyTableRow(index))
			})
			.collect()
	}
}
