//! Role-tagged tabular input.
//!
//! The host hands the engine a list of typed columns, each tagged with a
//! semantic role. The table resolves every role to a column index once at
//! construction, so downstream lookups are O(1) and duplicate singular
//! roles are detected in a single place.

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Semantic role tag carried by each input column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    Category,
    Measure,
    #[serde(rename = "ytdtarget")]
    YtdTarget,
    #[serde(rename = "fytarget")]
    FullYearTarget,
    Forecasted,
}

impl ColumnRole {
    /// Roles that may appear on at most one column; later duplicates are
    /// ignored with a warning.
    #[must_use]
    pub fn is_singular(self) -> bool {
        matches!(
            self,
            Self::Measure | Self::YtdTarget | Self::FullYearTarget
        )
    }
}

/// One cell of the host table.
///
/// Untagged, so deserialization tries the variants in order: RFC 3339
/// strings become timestamps, any other string stays text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Timestamp(DateTime<Utc>),
    Text(String),
    Bool(bool),
    Null,
}

impl CellValue {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// A typed host column: role, labels, format string, and cell values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataColumn {
    pub role: ColumnRole,
    pub display_name: String,
    /// Host-side numeric format string, passed through to formatters.
    #[serde(default)]
    pub format: Option<String>,
    pub values: Vec<CellValue>,
    /// Host-computed column maximum; derived from the values when absent.
    #[serde(default)]
    pub max_local: Option<f64>,
}

impl DataColumn {
    #[must_use]
    pub fn new(role: ColumnRole, display_name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            role,
            display_name: display_name.into(),
            format: None,
            values,
            max_local: None,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_max_local(mut self, max_local: f64) -> Self {
        self.max_local = Some(max_local);
        self
    }

    /// Column maximum: the host-supplied `max_local` when present, else the
    /// maximum over the finite numeric cells, else `None`.
    #[must_use]
    pub fn series_max(&self) -> Option<f64> {
        if let Some(max_local) = self.max_local {
            return Some(max_local);
        }
        self.values
            .iter()
            .filter_map(CellValue::as_f64)
            .filter(|value| value.is_finite())
            .map(OrderedFloat)
            .max()
            .map(OrderedFloat::into_inner)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The host table with every role resolved to a column index up front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    columns: Vec<DataColumn>,
    category: Option<usize>,
    measure: Option<usize>,
    ytd_target: Option<usize>,
    full_year_target: Option<usize>,
    forecasted: Option<usize>,
}

impl DataTable {
    /// Resolves the role map. The first column wins for every role; extra
    /// columns carrying a singular role are ignored.
    #[must_use]
    pub fn new(columns: Vec<DataColumn>) -> Self {
        let mut table = Self {
            columns,
            ..Self::default()
        };

        for (index, column) in table.columns.iter().enumerate() {
            let slot = match column.role {
                ColumnRole::Category => &mut table.category,
                ColumnRole::Measure => &mut table.measure,
                ColumnRole::YtdTarget => &mut table.ytd_target,
                ColumnRole::FullYearTarget => &mut table.full_year_target,
                ColumnRole::Forecasted => &mut table.forecasted,
            };
            if slot.is_none() {
                *slot = Some(index);
            } else if column.role.is_singular() {
                warn!(
                    role = ?column.role,
                    column = %column.display_name,
                    "ignoring duplicate column for singular role"
                );
            }
        }

        table
    }

    #[must_use]
    pub fn columns(&self) -> &[DataColumn] {
        &self.columns
    }

    #[must_use]
    pub fn category(&self) -> Option<&DataColumn> {
        self.category.map(|index| &self.columns[index])
    }

    #[must_use]
    pub fn measure(&self) -> Option<&DataColumn> {
        self.measure.map(|index| &self.columns[index])
    }

    #[must_use]
    pub fn ytd_target(&self) -> Option<&DataColumn> {
        self.ytd_target.map(|index| &self.columns[index])
    }

    #[must_use]
    pub fn full_year_target(&self) -> Option<&DataColumn> {
        self.full_year_target.map(|index| &self.columns[index])
    }

    #[must_use]
    pub fn forecasted(&self) -> Option<&DataColumn> {
        self.forecasted.map(|index| &self.columns[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(role: ColumnRole, name: &str, values: &[f64]) -> DataColumn {
        DataColumn::new(
            role,
            name,
            values.iter().copied().map(CellValue::Number).collect(),
        )
    }

    #[test]
    fn first_singular_role_column_wins() {
        let table = DataTable::new(vec![
            numbers(ColumnRole::Measure, "Sales", &[1.0]),
            numbers(ColumnRole::Measure, "Shadow", &[99.0]),
        ]);
        assert_eq!(table.measure().map(|c| c.display_name.as_str()), Some("Sales"));
    }

    #[test]
    fn series_max_prefers_host_max_local() {
        let column = numbers(ColumnRole::Measure, "Sales", &[1.0, 5.0]).with_max_local(42.0);
        assert_eq!(column.series_max(), Some(42.0));
    }

    #[test]
    fn series_max_skips_non_numeric_cells() {
        let column = DataColumn::new(
            ColumnRole::Measure,
            "Sales",
            vec![
                CellValue::Number(3.0),
                CellValue::Null,
                CellValue::Text("n/a".into()),
                CellValue::Number(7.0),
            ],
        );
        assert_eq!(column.series_max(), Some(7.0));
    }

    #[test]
    fn timestamp_cells_round_trip_through_serde() {
        use chrono::TimeZone;

        let cell = CellValue::Timestamp(Utc.with_ymd_and_hms(2016, 7, 4, 0, 0, 0).unwrap());
        let json = serde_json::to_string(&cell).expect("serialize");
        let back: CellValue = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cell);

        let plain: CellValue = serde_json::from_str("\"East\"").expect("deserialize");
        assert_eq!(plain, CellValue::Text("East".into()));
    }

    #[test]
    fn empty_table_resolves_no_roles() {
        let table = DataTable::new(Vec::new());
        assert!(table.category().is_none());
        assert!(table.measure().is_none());
        assert!(table.ytd_target().is_none());
    }
}
