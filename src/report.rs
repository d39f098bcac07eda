use crate::formula::format_num;
use crate::table::CalculationResult;
use anyhow::{Context, Result};
use std::io::Write;

/// Output format of the command-line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

pub fn write_result<W: Write>(out: &mut W, res: &CalculationResult, format: Format) -> Result<()> {
    match format {
        Format::Text => write_text(out, res).context("failed to write text report"),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, res).context("failed to serialize result")?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_text<W: Write>(out: &mut W, res: &CalculationResult) -> Result<()> {
    writeln!(out, "formula:  {}", res.formula_template)?;
    writeln!(out, "solution: {}", res.substituted_formula)?;
    writeln!(out, "answer:   {}", res.answer)?;
    writeln!(out)?;

    let header: Vec<String> = res
        .columns()
        .iter()
        .map(|col| col.label().to_string())
        .collect();
    let body: Vec<Vec<String>> = res
        .working_table
        .iter()
        .map(|row| row.values().map(format_num).collect())
        .collect();

    // Right-align every column to its widest cell.
    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.len());
        }
    }

    for cells in std::iter::once(&header).chain(&body) {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:>width$}"))
            .collect();
        writeln!(out, "{}", line.join("  ").trim_end())?;
    }

    writeln!(out)?;
    let totals = &res.totals;
    if let Some(assumed_mean) = totals.assumed_mean {
        writeln!(out, "A = {}", format_num(assumed_mean))?;
    }
    if let Some(width) = totals.class_width {
        writeln!(out, "h = {}", format_num(width))?;
    }
    writeln!(out, "sum = {}", format_num(totals.sum))?;
    writeln!(out, "divisor = {}", format_num(totals.divisor))?;
    writeln!(out, "mean = {}", format_num(res.mean))?;

    Ok(())
}
