//! Continuous series: class intervals tagged with frequencies.
//!
//! Each class is represented by its midpoint `m`. The shortcut and
//! step-deviation methods take the midpoint of the middle row as assumed
//! mean; step deviation further divides every deviation by the class
//! width `h`, inferred from the gap between the first two lower bounds.

use super::{finish, frequency_sum};
use crate::error::CalcError;
use crate::formula;
use crate::series::{ClassInterval, middle_index};
use crate::table::{CalculationResult, Column, Totals, WorkingRow};

/// Mean as `Σfm / N`.
pub fn direct(rows: &[ClassInterval]) -> Result<CalculationResult, CalcError> {
    let n_freq = checked_frequency_sum(rows)?;

    let mut sum = 0.0;
    let mut working_table = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let mid = row.midpoint();
        let freq_mid = row.frequency * mid;
        sum += freq_mid;
        working_table.push(
            class_row(idx, row)
                .with(Column::Midpoint, mid)
                .with(Column::FreqMidpoint, freq_mid),
        );
    }

    let totals = Totals {
        assumed_mean: None,
        class_width: None,
        sum,
        divisor: n_freq,
    };
    Ok(finish(formula::CONTINUOUS_DIRECT, totals, working_table))
}

/// Mean as `A + Σfd / N` with `d = m - A`.
pub fn shortcut(rows: &[ClassInterval]) -> Result<CalculationResult, CalcError> {
    let n_freq = checked_frequency_sum(rows)?;
    let assumed_mean = middle_midpoint(rows);

    let mut sum = 0.0;
    let mut working_table = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let mid = row.midpoint();
        let dev = mid - assumed_mean;
        let freq_dev = row.frequency * dev;
        sum += freq_dev;
        working_table.push(
            class_row(idx, row)
                .with(Column::Midpoint, mid)
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
    Ok(finish(formula::CONTINUOUS_SHORTCUT, totals, working_table))
}

/// Mean as `A + Σfd' / N × h` with `d' = (m - A) / h`.
pub fn step_deviation(rows: &[ClassInterval]) -> Result<CalculationResult, CalcError> {
    let n_freq = checked_frequency_sum(rows)?;
    let width = class_width(rows)?;
    let assumed_mean = middle_midpoint(rows);

    let mut sum = 0.0;
    let mut working_table = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let mid = row.midpoint();
        let dev = mid - assumed_mean;
        let step_dev = dev / width;
        let freq_step_dev = row.frequency * step_dev;
        sum += freq_step_dev;
        working_table.push(
            class_row(idx, row)
                .with(Column::Midpoint, mid)
                .with(Column::Deviation, dev)
                .with(Column::StepDeviation, step_dev)
                .with(Column::FreqStepDeviation, freq_step_dev),
        );
    }

    let totals = Totals {
        assumed_mean: Some(assumed_mean),
        class_width: Some(width),
        sum,
        divisor: n_freq,
    };
    Ok(finish(formula::CONTINUOUS_STEP_DEVIATION, totals, working_table))
}

/// Gap between the first two lower bounds.
///
/// A single class falls back to its own width.
fn class_width(rows: &[ClassInterval]) -> Result<f64, CalcError> {
    let width = match rows {
        [first, second, ..] => second.lower - first.lower,
        [only] => only.upper - only.lower,
        [] => return Err(CalcError::EmptyDataset),
    };
    if width == 0.0 || !width.is_finite() {
        return Err(CalcError::InvalidClassWidth { width });
    }
    log::debug!("class width {width}");
    Ok(width)
}

fn middle_midpoint(rows: &[ClassInterval]) -> f64 {
    let assumed_mean = rows[middle_index(rows.len())].midpoint();
    log::debug!("assumed mean {assumed_mean}");
    assumed_mean
}

fn class_row(idx: usize, row: &ClassInterval) -> WorkingRow {
    WorkingRow::numbered(idx)
        .with(Column::Lower, row.lower)
        .with(Column::Upper, row.upper)
        .with(Column::Frequency, row.frequency)
}

fn checked_frequency_sum(rows: &[ClassInterval]) -> Result<f64, CalcError> {
    if rows.is_empty() {
        return Err(CalcError::EmptyDataset);
    }
    frequency_sum(rows.iter().map(|row| row.frequency))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ClassInterval> {
        vec![
            ClassInterval::new(0.0, 10.0, 2.0),
            ClassInterval::new(10.0, 20.0, 3.0),
            ClassInterval::new(20.0, 30.0, 5.0),
        ]
    }

    #[test]
    fn direct_uses_midpoints() {
        let res = direct(&rows()).unwrap();
        let mids: Vec<_> = res
            .working_table
            .iter()
            .map(|row| row.get(Column::Midpoint).unwrap())
            .collect();
        assert_eq!(mids, [5.0, 15.0, 25.0]);
        assert_eq!(res.totals.sum, 180.0);
        assert_eq!(res.totals.divisor, 10.0);
        assert_eq!(res.mean, 18.0);
        assert_eq!(
            res.columns(),
            [
                Column::Index,
                Column::Lower,
                Column::Upper,
                Column::Frequency,
                Column::Midpoint,
                Column::FreqMidpoint,
            ]
        );
    }

    #[test]
    fn shortcut_takes_middle_midpoint() {
        let res = shortcut(&rows()).unwrap();
        assert_eq!(res.totals.assumed_mean, Some(15.0));
        assert_eq!(res.totals.sum, 30.0);
        assert_eq!(res.mean, 18.0);
        assert_eq!(res.substituted_formula, r"\overline{x} = 15 + \frac{30}{10}");
        assert_eq!(res.columns().len(), 7);
    }

    #[test]
    fn step_deviation_scales_by_class_width() {
        let res = step_deviation(&rows()).unwrap();
        let steps: Vec<_> = res
            .working_table
            .iter()
            .map(|row| row.get(Column::StepDeviation).unwrap())
            .collect();
        assert_eq!(steps, [-1.0, 0.0, 1.0]);
        assert_eq!(res.totals.class_width, Some(10.0));
        assert_eq!(res.totals.sum, 3.0);
        assert_eq!(res.mean, 18.0);
        assert_eq!(
            res.substituted_formula,
            r"\overline{x} = 15 + \frac{3}{10} \times 10"
        );
        assert_eq!(res.columns().len(), 8);
    }

    #[test]
    fn all_methods_agree_with_constant_width() {
        let rows = vec![
            ClassInterval::new(100.0, 105.0, 4.0),
            ClassInterval::new(105.0, 110.0, 11.0),
            ClassInterval::new(110.0, 115.0, 7.0),
            ClassInterval::new(115.0, 120.0, 1.0),
        ];
        let direct_mean = direct(&rows).unwrap().mean;
        for mean in [
            shortcut(&rows).unwrap().mean,
            step_deviation(&rows).unwrap().mean,
        ] {
            assert!((mean - direct_mean).abs() <= 1e-9 * direct_mean.abs());
        }
    }

    #[test]
    fn single_class_uses_its_own_width() {
        let rows = [ClassInterval::new(4.0, 8.0, 3.0)];
        let res = step_deviation(&rows).unwrap();
        assert_eq!(res.totals.class_width, Some(4.0));
        assert_eq!(res.mean, 6.0);
    }

    #[test]
    fn repeated_lower_bound_is_invalid_width() {
        let rows = [
            ClassInterval::new(0.0, 10.0, 1.0),
            ClassInterval::new(0.0, 10.0, 1.0),
        ];
        assert_eq!(
            step_deviation(&rows).unwrap_err(),
            CalcError::InvalidClassWidth { width: 0.0 }
        );
    }

    #[test]
    fn zero_divisor_is_reported_before_width() {
        let rows = [
            ClassInterval::new(0.0, 10.0, 0.0),
            ClassInterval::new(0.0, 10.0, 0.0),
        ];
        assert!(matches!(
            step_deviation(&rows),
            Err(CalcError::ZeroDivisor { .. })
        ));
    }
}
