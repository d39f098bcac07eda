//! Discrete series: values tagged with frequencies.

use super::{finish, frequency_sum};
use crate::error::CalcError;
use crate::formula;
use crate::series::{DiscreteRow, middle_index};
use crate::table::{CalculationResult, Column, Totals, WorkingRow};

/// Mean as `Σfx / N`.
pub fn direct(rows: &[DiscreteRow]) -> Result<CalculationResult, CalcError> {
    let n_freq = checked_frequency_sum(rows)?;

    let sum: f64 = rows.iter().map(|row| row.value * row.frequency).sum();
    let working_table = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            WorkingRow::numbered(idx)
                .with(Column::Value, row.value)
                .with(Column::Frequency, row.frequency)
        })
        .collect();

    let totals = Totals {
        assumed_mean: None,
        class_width: None,
        sum,
        divisor: n_freq,
    };
    Ok(finish(formula::DISCRETE_DIRECT, totals, working_table))
}

/// Mean as `A + Σfd / N`, with `A` the value of the middle row.
pub fn shortcut(rows: &[DiscreteRow]) -> Result<CalculationResult, CalcError> {
    let n_freq = checked_frequency_sum(rows)?;

    let assumed_mean = rows[middle_index(rows.len())].value;
    log::debug!("assumed mean {assumed_mean}");

    let mut sum = 0.0;
    let mut working_table = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let dev = row.value - assumed_mean;
        let freq_dev = row.frequency * dev;
        sum += freq_dev;
        working_table.push(
            WorkingRow::numbered(idx)
                .with(Column::Value, row.value)
                .with(Column::Frequency, row.frequency)
                .with(Column::Deviation, dev)
                .with(Column::FreqDeviation, freq_dev),
        );
    }

    let totals = Totals {
        assumed_mean: Some(assumed_mean),
        class_width: None,
        sum,
        divisor: n_freq,
    };
    Ok(finish(formula::DISCRETE_SHORTCUT, totals, working_table))
}

fn checked_frequency_sum(rows: &[DiscreteRow]) -> Result<f64, CalcError> {
    if rows.is_empty() {
        return Err(CalcError::EmptyDataset);
    }
    frequency_sum(rows.iter().map(|row| row.frequency))
}
