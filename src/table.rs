//! Working table and calculation result types.

use serde::{Serialize, Serializer, ser::SerializeMap};

/// Column of a working table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Index,
    Value,
    Lower,
    Upper,
    Frequency,
    Midpoint,
    FreqMidpoint,
    Deviation,
    FreqDeviation,
    StepDeviation,
    FreqStepDeviation,
}

impl Column {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Index => "No.",
            Self::Value => "x",
            Self::Lower => "L",
            Self::Upper => "U",
            Self::Frequency => "f",
            Self::Midpoint => "m",
            Self::FreqMidpoint => "fm",
            Self::Deviation => "d",
            Self::FreqDeviation => "fd",
            Self::StepDeviation => "d'",
            Self::FreqStepDeviation => "fd'",
        }
    }
}

/// One row of a working table.
///
/// Cells keep the column order they were pushed in.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingRow {
    cells: Vec<(Column, f64)>,
}

impl WorkingRow {
    /// Start a row with its 1-based position.
    pub fn numbered(idx: usize) -> Self {
        Self {
            cells: vec![(Column::Index, (idx + 1) as f64)],
        }
    }

    pub fn with(mut self, column: Column, value: f64) -> Self {
        self.cells.push((column, value));
        self
    }

    pub fn get(&self, column: Column) -> Option<f64> {
        self.cells
            .iter()
            .find(|(col, _)| *col == column)
            .map(|&(_, val)| val)
    }

    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.cells.iter().map(|&(col, _)| col)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().map(|&(_, val)| val)
    }
}

impl Serialize for WorkingRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (col, val) in &self.cells {
            map.serialize_entry(col.label(), val)?;
        }
        map.end()
    }
}

/// Totals substituted into the formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    /// Assumed mean `A`, absent for the direct method.
    pub assumed_mean: Option<f64>,
    /// Class width `h`, present only for the step-deviation method.
    pub class_width: Option<f64>,
    /// Numerator sum (`Σx`, `Σfx`, `Σd`, `Σfd` or `Σfd'`).
    pub sum: f64,
    /// Row count `n` or frequency sum `N`.
    pub divisor: f64,
}

/// Result of a mean calculation.
///
/// Holds everything a renderer needs to show the calculation step by step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub mean: f64,
    pub formula_template: &'static str,
    pub substituted_formula: String,
    pub answer: String,
    pub totals: Totals,
    pub working_table: Vec<WorkingRow>,
}

impl CalculationResult {
    /// Column order of the working table.
    pub fn columns(&self) -> Vec<Column> {
        self.working_table
            .first()
            .map(|row| row.columns().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_keeps_column_order() {
        let row = WorkingRow::numbered(0)
            .with(Column::Value, 5.0)
            .with(Column::Frequency, 2.0);
        let cols: Vec<_> = row.columns().collect();
        assert_eq!(cols, [Column::Index, Column::Value, Column::Frequency]);
        assert_eq!(row.get(Column::Index), Some(1.0));
        assert_eq!(row.get(Column::Deviation), None);
    }

    #[test]
    fn row_serializes_as_ordered_map() {
        let row = WorkingRow::numbered(2).with(Column::StepDeviation, -1.0);
        let json = serde_json::to_string(&row).expect("failed to serialize row");
        assert_eq!(json, r#"{"No.":3.0,"d'":-1.0}"#);
    }
}
