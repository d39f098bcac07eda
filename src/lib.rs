//! Arithmetic mean of individual, discrete and continuous series by the
//! direct, shortcut and step-deviation methods, with the full working
//! table needed to show each calculation step by step.

pub mod calculator;
pub mod config;
pub mod error;
pub mod formula;
pub mod report;
pub mod series;
pub mod table;

pub use calculator::calculate;
pub use error::CalcError;
pub use series::{ClassInterval, Dataset, DiscreteRow, Method, SeriesKind};
pub use table::{CalculationResult, Column, Totals, WorkingRow};
