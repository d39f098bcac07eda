//! Series data types.

use serde::Deserialize;
use std::fmt;

/// Layout of the statistical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeriesKind {
    Individual,
    Discrete,
    Continuous,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual => write!(f, "individual"),
            Self::Discrete => write!(f, "discrete"),
            Self::Continuous => write!(f, "continuous"),
        }
    }
}

/// Manual calculation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    Direct,
    Shortcut,
    StepDeviation,
}

impl Method {
    /// Methods applicable to a series kind, in display order.
    pub fn applicable_to(kind: SeriesKind) -> &'static [Method] {
        match kind {
            SeriesKind::Individual | SeriesKind::Discrete => &[Method::Direct, Method::Shortcut],
            SeriesKind::Continuous => &[Method::Direct, Method::Shortcut, Method::StepDeviation],
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Shortcut => write!(f, "shortcut"),
            Self::StepDeviation => write!(f, "step-deviation"),
        }
    }
}

/// Value tagged with its frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscreteRow {
    pub value: f64,
    pub frequency: f64,
}

impl DiscreteRow {
    pub fn new(value: f64, frequency: f64) -> Self {
        Self { value, frequency }
    }
}

/// Class interval `[lower, upper)` tagged with its frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassInterval {
    pub lower: f64,
    pub upper: f64,
    pub frequency: f64,
}

impl ClassInterval {
    pub fn new(lower: f64, upper: f64, frequency: f64) -> Self {
        Self {
            lower,
            upper,
            frequency,
        }
    }

    /// Class mark, the midpoint of the interval.
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }
}

/// Ordered rows of a single series.
///
/// The variant fixes the row shape, so every row of a dataset
/// always has the same layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    Individual(Vec<f64>),
    Discrete(Vec<DiscreteRow>),
    Continuous(Vec<ClassInterval>),
}

impl Dataset {
    pub fn kind(&self) -> SeriesKind {
        match self {
            Self::Individual(_) => SeriesKind::Individual,
            Self::Discrete(_) => SeriesKind::Discrete,
            Self::Continuous(_) => SeriesKind::Continuous,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Individual(values) => values.len(),
            Self::Discrete(rows) => rows.len(),
            Self::Continuous(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Index of the row whose value (or midpoint) is taken as assumed mean.
pub fn middle_index(n_rows: usize) -> usize {
    n_rows / 2
}
