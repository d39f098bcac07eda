use anyhow::{Context, Result, bail};
use seriesmean::{
    Method, SeriesKind, calculate,
    config::Problem,
    formula::format_num,
    report::{self, Format},
};
use std::{
    io::{self, BufWriter, Write},
    path::Path,
};

/// Relative tolerance for means computed by different methods.
const AGREEMENT_TOL: f64 = 1e-9;

pub struct Manager {
    problem: Problem,
}

impl Manager {
    pub fn new<P: AsRef<Path>>(input: P) -> Result<Self> {
        let input = input.as_ref();

        let problem = Problem::from_file(input).context("failed to construct problem")?;
        log::info!("{problem:#?}");

        Ok(Self { problem })
    }

    pub fn solve(
        &self,
        method: Option<Method>,
        assumed_mean: Option<f64>,
        format: Format,
    ) -> Result<()> {
        let method = method.unwrap_or(self.problem.method);
        let assumed_mean = self.assumed_mean(assumed_mean);

        let dataset = self.problem.dataset();
        let res = calculate(&dataset, method, assumed_mean)
            .with_context(|| format!("failed to calculate {method} mean"))?;
        log::info!("{method} mean is {}", res.mean);

        let mut writer = BufWriter::new(io::stdout().lock());
        report::write_result(&mut writer, &res, format).context("failed to write result")?;
        writer.flush().context("failed to flush writer stream")?;

        Ok(())
    }

    pub fn compare(&self, assumed_mean: Option<f64>) -> Result<()> {
        let kind = self.problem.kind;
        let assumed_mean = self.assumed_mean(assumed_mean);
        let dataset = self.problem.dataset();

        let mut means = Vec::new();
        for &method in Method::applicable_to(kind) {
            let needs_assumed_mean = kind == SeriesKind::Individual && method == Method::Shortcut;
            if needs_assumed_mean && assumed_mean.is_none() {
                log::warn!("skipping {method} method: no assumed mean given");
                continue;
            }
            let res = calculate(&dataset, method, assumed_mean)
                .with_context(|| format!("failed to calculate {method} mean"))?;
            means.push((method, res.mean));
        }

        let mut writer = BufWriter::new(io::stdout().lock());
        for (method, mean) in &means {
            writeln!(writer, "{:>14}  {}", method.to_string(), format_num(*mean))?;
        }
        writer.flush().context("failed to flush writer stream")?;

        let (ref_method, ref_mean) = means[0];
        for &(method, mean) in &means[1..] {
            let tol = AGREEMENT_TOL * ref_mean.abs().max(mean.abs()).max(1.0);
            if (mean - ref_mean).abs() > tol {
                bail!("{method} mean {mean} differs from {ref_method} mean {ref_mean}");
            }
        }
        log::info!("all {} methods agree", means.len());

        Ok(())
    }

    fn assumed_mean(&self, assumed_mean: Option<f64>) -> Option<f64> {
        let assumed_mean = assumed_mean.or(self.problem.assumed_mean);
        if assumed_mean.is_some() && self.problem.kind != SeriesKind::Individual {
            log::warn!(
                "ignoring assumed mean: {} series use the middle row",
                self.problem.kind
            );
        }
        assumed_mean
    }
}
