//! Mean calculation engine.
//!
//! One pure function per (series kind, method) pair lives in the
//! per-kind submodules; [`calculate`] dispatches on the dataset variant
//! and the requested [`Method`].
//!
//! All checks run before any per-row work, so a call either returns a
//! complete [`CalculationResult`] or a [`CalcError`].

pub mod continuous;
pub mod discrete;
pub mod individual;

use crate::error::CalcError;
use crate::formula;
use crate::series::{Dataset, Method, SeriesKind};
use crate::table::{CalculationResult, Totals, WorkingRow};

/// Compute the mean of a dataset with the given method.
///
/// `assumed_mean` is only read for individual series with the shortcut
/// method; discrete and continuous series derive it from the middle row.
///
/// # Errors
/// Returns [`CalcError::EmptyDataset`] if the dataset has no rows,
/// [`CalcError::UnsupportedCombination`] if the method does not apply,
/// [`CalcError::ZeroDivisor`] if the frequencies sum to zero and
/// [`CalcError::InvalidClassWidth`] if the inferred class width is zero.
pub fn calculate(
    dataset: &Dataset,
    method: Method,
    assumed_mean: Option<f64>,
) -> Result<CalculationResult, CalcError> {
    if dataset.is_empty() {
        return Err(CalcError::EmptyDataset);
    }
    log::debug!(
        "calculating {method} mean of {} {} rows",
        dataset.len(),
        dataset.kind()
    );

    match (dataset, method) {
        (Dataset::Individual(values), Method::Direct) => individual::direct(values),
        (Dataset::Individual(values), Method::Shortcut) => {
            let assumed_mean = assumed_mean.ok_or(CalcError::UnsupportedCombination {
                kind: SeriesKind::Individual,
                method,
                reason: "an assumed mean must be supplied",
            })?;
            individual::shortcut(values, assumed_mean)
        }
        (Dataset::Discrete(rows), Method::Direct) => discrete::direct(rows),
        (Dataset::Discrete(rows), Method::Shortcut) => discrete::shortcut(rows),
        (Dataset::Continuous(rows), Method::Direct) => continuous::direct(rows),
        (Dataset::Continuous(rows), Method::Shortcut) => continuous::shortcut(rows),
        (Dataset::Continuous(rows), Method::StepDeviation) => continuous::step_deviation(rows),
        (Dataset::Individual(_) | Dataset::Discrete(_), Method::StepDeviation) => {
            Err(CalcError::UnsupportedCombination {
                kind: dataset.kind(),
                method,
                reason: "step deviation requires class intervals",
            })
        }
    }
}

/// Divide `sum` by `divisor` and assemble the result.
fn finish(
    formula_template: &'static str,
    totals: Totals,
    working_table: Vec<WorkingRow>,
) -> CalculationResult {
    let quotient = totals.sum / totals.divisor * totals.class_width.unwrap_or(1.0);
    let mean = totals.assumed_mean.unwrap_or(0.0) + quotient;
    log::debug!("{totals:?} gives mean {mean}");

    CalculationResult {
        mean,
        formula_template,
        substituted_formula: formula::substitute(&totals),
        answer: formula::answer(mean),
        totals,
        working_table,
    }
}

/// Sum of frequencies, rejected when zero.
fn frequency_sum(freqs: impl Iterator<Item = f64>) -> Result<f64, CalcError> {
    let sum: f64 = freqs.sum();
    if sum == 0.0 {
        return Err(CalcError::ZeroDivisor {
            what: "the frequency sum",
        });
    }
    Ok(sum)
}
