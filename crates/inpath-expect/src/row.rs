//! Expected rule table rows.
//!
//! The comparison side scrapes the UI table as a list of rows, each row a
//! list of cells and each cell a list of strings. [`ExpectedRow`] and
//! [`ExpectedData`] render into that same nested shape.

use serde::{Serialize, Serializer};
use std::fmt;

/// Number of columns in the in-path rule table.
pub const COLUMN_COUNT: usize = 12;

/// Text before the description in a rule's description row.
pub const DESCRIPTION_PREFIX: &str = "Description: ";

/// A column of the in-path rule table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Position,
    Type,
    Source,
    Destination,
    Vlan,
    Protocol,
    PreoptimizationPolicy,
    LatencyOptimizationPolicy,
    OptimizationPolicy,
    CloudAcceleration,
    Kickoff,
    Status,
}

impl Column {
    /// All columns, left to right.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Position,
        Column::Type,
        Column::Source,
        Column::Destination,
        Column::Vlan,
        Column::Protocol,
        Column::PreoptimizationPolicy,
        Column::LatencyOptimizationPolicy,
        Column::OptimizationPolicy,
        Column::CloudAcceleration,
        Column::Kickoff,
        Column::Status,
    ];

    /// Zero-based index of the column in a row.
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Column header.
    pub const fn header(&self) -> &'static str {
        match self {
            Column::Position => "Position",
            Column::Type => "Type",
            Column::Source => "Source",
            Column::Destination => "Destination",
            Column::Vlan => "VLAN",
            Column::Protocol => "Protocol",
            Column::PreoptimizationPolicy => "Preoptimization Policy",
            Column::LatencyOptimizationPolicy => "Latency Optimization Policy",
            Column::OptimizationPolicy => "Optimization Policy",
            Column::CloudAcceleration => "Cloud Acceleration",
            Column::Kickoff => "Kickoff",
            Column::Status => "Status",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// The row a rule is expected to render as.
///
/// Every rule type has all twelve columns; columns a type does not support
/// hold the `--` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpectedRow {
    cells: [String; COLUMN_COUNT],
}

impl ExpectedRow {
    /// Create a row from its cells in [`Column::ALL`] order
    pub fn from_cells(cells: [String; COLUMN_COUNT]) -> Self {
        Self { cells }
    }

    /// Returns the cell of one column.
    pub fn get(&self, column: Column) -> &str {
        &self.cells[column.index()]
    }

    /// Returns all cells in column order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Renders the row as one single-string group per column.
    pub fn cell_groups(&self) -> Vec<Vec<String>> {
        self.cells.iter().map(|cell| vec![cell.clone()]).collect()
    }
}

impl Serialize for ExpectedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.cell_groups().serialize(serializer)
    }
}

/// Everything the table is expected to show for one rule: its row and, when
/// the rule has a description, the description row beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpectedData {
    pub row: ExpectedRow,
    pub description: Option<String>,
}

impl ExpectedData {
    /// Wrap a row without a description
    pub fn new(row: ExpectedRow) -> Self {
        Self {
            row,
            description: None,
        }
    }

    /// Attach a description row
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Renders the description row, a single `Description: ...` cell.
    pub fn description_row(&self) -> Option<Vec<Vec<String>>> {
        self.description
            .as_ref()
            .map(|description| vec![vec![format!("{DESCRIPTION_PREFIX}{description}")]])
    }

    /// Renders the rule row followed by the description row, if any.
    pub fn rows(&self) -> Vec<Vec<Vec<String>>> {
        let mut rows = vec![self.row.cell_groups()];
        rows.extend(self.description_row());
        rows
    }
}

impl Serialize for ExpectedData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbered_row() -> ExpectedRow {
        ExpectedRow::from_cells(std::array::from_fn(|i| i.to_string()))
    }

    #[test]
    fn test_column_order() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
        }
        assert_eq!(Column::ALL.len(), COLUMN_COUNT);
    }

    #[test]
    fn test_get_by_column() {
        let row = numbered_row();
        assert_eq!(row.get(Column::Position), "0");
        assert_eq!(row.get(Column::Vlan), "4");
        assert_eq!(row.get(Column::Status), "11");
    }

    #[test]
    fn test_cell_groups_are_single_strings() {
        let groups = numbered_row().cell_groups();
        assert_eq!(groups.len(), COLUMN_COUNT);
        assert!(groups.iter().all(|group| group.len() == 1));
        assert_eq!(groups[8], vec!["8".to_string()]);
    }

    #[test]
    fn test_rows_without_description() {
        let data = ExpectedData::new(numbered_row());
        assert_eq!(data.description_row(), None);
        assert_eq!(data.rows().len(), 1);
    }

    #[test]
    fn test_rows_with_description() {
        let data = ExpectedData::new(numbered_row()).with_description("needs review");
        let rows = data.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec![vec!["Description: needs review".to_string()]]);
    }

    #[test]
    fn test_serialize_nested() {
        let data = ExpectedData::new(numbered_row()).with_description("x");
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json[0][4], serde_json::json!(["4"]));
        assert_eq!(json[1], serde_json::json!([["Description: x"]]));
    }
}
