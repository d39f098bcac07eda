use crate::series::{ClassInterval, Dataset, DiscreteRow, Method, SeriesKind};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Problem description read by the command-line tool.
///
/// Loaded from a TOML file and validated before use.
/// See [`Problem::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Problem {
    /// Layout of the rows.
    pub kind: SeriesKind,
    /// Calculation method.
    pub method: Method,
    /// Assumed mean for the shortcut method on individual series.
    pub assumed_mean: Option<f64>,

    /// Table rows: `[x]`, `[x, f]` or `[lower, upper, f]` depending on `kind`.
    pub rows: Vec<Vec<f64>>,
}

impl Problem {
    /// Load a [`Problem`] from a file.
    ///
    /// The file must be TOML-encoded and contain a serialized [`Problem`].
    /// Performs validation on all rows before returning.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the rows are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        Self::from_toml(&contents)
    }

    /// Parse and validate a [`Problem`] from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let problem: Problem = toml::from_str(contents).context("failed to deserialize problem")?;

        problem.validate().context("failed to validate problem")?;

        Ok(problem)
    }

    /// Shape the validated rows into a [`Dataset`].
    pub fn dataset(&self) -> Dataset {
        match self.kind {
            SeriesKind::Individual => {
                Dataset::Individual(self.rows.iter().map(|row| row[0]).collect())
            }
            SeriesKind::Discrete => Dataset::Discrete(
                self.rows
                    .iter()
                    .map(|row| DiscreteRow::new(row[0], row[1]))
                    .collect(),
            ),
            SeriesKind::Continuous => Dataset::Continuous(
                self.rows
                    .iter()
                    .map(|row| ClassInterval::new(row[0], row[1], row[2]))
                    .collect(),
            ),
        }
    }

    fn validate(&self) -> Result<()> {
        check_num(self.rows.len(), 1..).context("invalid number of rows")?;
        if let Some(assumed_mean) = self.assumed_mean {
            check_finite(assumed_mean).context("invalid assumed mean")?;
        }

        let arity = match self.kind {
            SeriesKind::Individual => 1,
            SeriesKind::Discrete => 2,
            SeriesKind::Continuous => 3,
        };
        for (i_row, row) in self.rows.iter().enumerate() {
            check_row(row, self.kind, arity).with_context(|| format!("invalid row {i_row}"))?;
        }

        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

fn check_finite(num: f64) -> Result<()> {
    if !num.is_finite() {
        bail!("number must be finite, but is {num:?}");
    }
    Ok(())
}

fn check_row(row: &[f64], kind: SeriesKind, exp_len: usize) -> Result<()> {
    // Ensure row has the shape of its series kind.
    let len = row.len();
    if len != exp_len {
        bail!("{kind} row must have {exp_len} entries, but has {len}");
    }
    for &ele in row {
        check_finite(ele)?;
    }
    match kind {
        SeriesKind::Individual => {}
        SeriesKind::Discrete => {
            check_num(row[1], 0.0..).context("invalid frequency")?;
        }
        SeriesKind::Continuous => {
            let (lower, upper) = (row[0], row[1]);
            if lower >= upper {
                bail!("lower bound must be below upper bound, but {lower} >= {upper}");
            }
            check_num(row[2], 0.0..).context("invalid frequency")?;
        }
    }
    Ok(())
}
