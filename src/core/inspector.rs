use serde::{Deserialize, Serialize};

use crate::core::Record;

/// Placeholder label for rows whose category cell is null, missing or empty.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Result of inspecting a record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataShapeOutcome {
    /// Empty input, or a first row with no columns. Nothing can be charted.
    NoData,
    Shape(DataShape),
}

/// Column layout of a chartable record set.
///
/// The first column is the category axis and the second the value axis. A
/// single-column set uses its only column for both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataShape {
    category_key: String,
    value_key: String,
    columns: Vec<String>,
}

/// One row reduced to a label and a magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
}

/// Inspects the first record to pick the category and value axes.
#[must_use]
pub fn inspect(records: &[Record]) -> DataShapeOutcome {
    let Some(first) = records.first() else {
        return DataShapeOutcome::NoData;
    };
    let columns: Vec<String> = first.columns().map(str::to_owned).collect();
    let Some(category_key) = columns.first().cloned() else {
        return DataShapeOutcome::NoData;
    };
    let value_key = columns
        .get(1)
        .cloned()
        .unwrap_or_else(|| category_key.clone());

    DataShapeOutcome::Shape(DataShape {
        category_key,
        value_key,
        columns,
    })
}

impl DataShape {
    #[must_use]
    pub fn category_key(&self) -> &str {
        &self.category_key
    }

    #[must_use]
    pub fn value_key(&self) -> &str {
        &self.value_key
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Category label of `record`, or [`UNKNOWN_LABEL`].
    #[must_use]
    pub fn category_value(&self, record: &Record) -> String {
        record
            .get(&self.category_key)
            .and_then(|cell| cell.to_label())
            .unwrap_or_else(|| UNKNOWN_LABEL.to_owned())
    }

    /// Raw category cell rendered as text, without the placeholder substitution.
    #[must_use]
    pub fn raw_category_text(&self, record: &Record) -> Option<String> {
        record
            .get(&self.category_key)
            .and_then(|cell| cell.to_label())
    }

    /// Value magnitude of `record`; non-numeric cells coerce to 0.
    #[must_use]
    pub fn numeric_value(&self, record: &Record) -> f64 {
        record
            .get(&self.value_key)
            .map_or(0.0, |cell| cell.to_number())
    }

    #[must_use]
    pub fn datum(&self, record: &Record) -> ChartDatum {
        ChartDatum {
            label: self.category_value(record),
            value: self.numeric_value(record),
        }
    }

    #[must_use]
    pub fn datums(&self, records: &[Record]) -> Vec<ChartDatum> {
        records.iter().map(|record| self.datum(record)).collect()
    }
}

/// Row and column counts reported in the chart footer and the fallback view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSummary {
    pub record_count: usize,
    pub column_count: usize,
    pub columns: Vec<String>,
}

impl DataSummary {
    #[must_use]
    pub fn from_records(records: &[Record]) -> Self {
        let columns: Vec<String> = records
            .first()
            .map(|first| first.columns().map(str::to_owned).collect())
            .unwrap_or_default();
        Self {
            record_count: records.len(),
            column_count: columns.len(),
            columns,
        }
    }

    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{} records \u{2022} {} columns",
            self.record_count, self.column_count
        )
    }

    #[must_use]
    pub fn columns_line(&self) -> String {
        format!("Columns: {}", self.columns.join(", "))
    }
}
