//! Formula strings shown alongside a working table.
//!
//! Strings use LaTeX notation without math-mode delimiters.

use crate::series::{Method, SeriesKind};
use crate::table::Totals;

pub const INDIVIDUAL_DIRECT: &str = r"\overline{x} = \frac{\sum x}{n}";
pub const INDIVIDUAL_SHORTCUT: &str = r"\overline{x} = A + \frac{\sum d}{n}";
pub const DISCRETE_DIRECT: &str = r"\overline{x} = \frac{\sum fx}{N}";
pub const DISCRETE_SHORTCUT: &str = r"\overline{x} = A + \frac{\sum fd}{N}";
pub const CONTINUOUS_DIRECT: &str = r"\overline{x} = \frac{\sum fm}{N}";
pub const CONTINUOUS_SHORTCUT: &str = r"\overline{x} = A + \frac{\sum fd}{N}";
pub const CONTINUOUS_STEP_DEVIATION: &str = r"\overline{x} = A + \frac{\sum fd'}{N} \times h";

/// Symbolic formula for a (kind, method) pair.
///
/// Returns `None` only for step deviation on individual or discrete series.
pub fn template(kind: SeriesKind, method: Method) -> Option<&'static str> {
    let formula = match (kind, method) {
        (SeriesKind::Individual, Method::Direct) => INDIVIDUAL_DIRECT,
        (SeriesKind::Individual, Method::Shortcut) => INDIVIDUAL_SHORTCUT,
        (SeriesKind::Discrete, Method::Direct) => DISCRETE_DIRECT,
        (SeriesKind::Discrete, Method::Shortcut) => DISCRETE_SHORTCUT,
        (SeriesKind::Continuous, Method::Direct) => CONTINUOUS_DIRECT,
        (SeriesKind::Continuous, Method::Shortcut) => CONTINUOUS_SHORTCUT,
        (SeriesKind::Continuous, Method::StepDeviation) => CONTINUOUS_STEP_DEVIATION,
        (SeriesKind::Individual | SeriesKind::Discrete, Method::StepDeviation) => return None,
    };
    Some(formula)
}

/// Formula with the computed totals in place of the symbols.
pub fn substitute(totals: &Totals) -> String {
    let frac = format!(
        r"\frac{{{}}}{{{}}}",
        format_num(totals.sum),
        format_num(totals.divisor)
    );
    let mut rhs = match totals.assumed_mean {
        Some(a) => format!("{} + {frac}", format_num(a)),
        None => frac,
    };
    if let Some(h) = totals.class_width {
        rhs.push_str(&format!(r" \times {}", format_num(h)));
    }
    format!(r"\overline{{x}} = {rhs}")
}

pub fn answer(mean: f64) -> String {
    format!(r"\overline{{x}} = {}", format_num(mean))
}

/// Plain decimal form of a number, without a negative zero.
pub fn format_num(val: f64) -> String {
    if val == 0.0 {
        return "0".to_string();
    }
    format!("{val}")
}
