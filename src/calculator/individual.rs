//! Individual series: one observation per row.

use super::finish;
use crate::error::CalcError;
use crate::formula;
use crate::table::{CalculationResult, Column, Totals, WorkingRow};

/// Mean as `Σx / n`.
pub fn direct(values: &[f64]) -> Result<CalculationResult, CalcError> {
    let n_vals = row_count(values)?;

    let sum: f64 = values.iter().sum();
    let working_table = values
        .iter()
        .enumerate()
        .map(|(idx, &val)| WorkingRow::numbered(idx).with(Column::Value, val))
        .collect();

    let totals = Totals {
        assumed_mean: None,
        class_width: None,
        sum,
        divisor: n_vals,
    };
    Ok(finish(formula::INDIVIDUAL_DIRECT, totals, working_table))
}

/// Mean as `A + Σd / n` with `d = x - A`.
pub fn shortcut(values: &[f64], assumed_mean: f64) -> Result<CalculationResult, CalcError> {
    let n_vals = row_count(values)?;

    let devs: Vec<f64> = values.iter().map(|&val| val - assumed_mean).collect();
    let sum: f64 = devs.iter().sum();
    let working_table = values
        .iter()
        .zip(&devs)
        .enumerate()
        .map(|(idx, (&val, &dev))| {
            WorkingRow::numbered(idx)
                .with(Column::Value, val)
                .with(Column::Deviation, dev)
        })
        .collect();

    let totals = Totals {
        assumed_mean: Some(assumed_mean),
        class_width: None,
        sum,
        divisor: n_vals,
    };
    Ok(finish(formula::INDIVIDUAL_SHORTCUT, totals, working_table))
}

fn row_count(values: &[f64]) -> Result<f64, CalcError> {
    if values.is_empty() {
        return Err(CalcError::EmptyDataset);
    }
    Ok(values.len() as f64)
}
