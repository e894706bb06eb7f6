use anyhow::{bail, Context, Result};
use std::io::Write;

use crate::models::{InfoMessage, Training};
use crate::package::Package;

use super::OutputFormat;

/// How a batch of packages is printed and how failures are handled
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub format: OutputFormat,
    pub keep_going: bool,
}

/// Dispatch a package and compute its summary
pub fn summarize(package: &Package) -> Result<InfoMessage> {
    let workout = package.read()?;
    let info = workout.show_training_info()?;
    Ok(info)
}

/// Render a summary in the requested output format
pub fn render(info: &InfoMessage, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(info.message()),
        OutputFormat::Json => serde_json::to_string(info).context("Failed to serialize summary"),
    }
}

/// Print one summary line per package, in order.
///
/// The first failing package aborts the batch unless `keep_going` is set, in
/// which case failures are logged, skipped and reported once at the end.
pub fn run<W: Write>(packages: &[Package], options: ReportOptions, out: &mut W) -> Result<()> {
    let mut failed = 0;

    for (index, package) in packages.iter().enumerate() {
        let line = summarize(package)
            .and_then(|info| render(&info, options.format))
            .with_context(|| format!("package #{} ({})", index + 1, package.code));

        match line {
            Ok(line) => {
                writeln!(out, "{}", line).context("Failed to write summary")?;
            }
            Err(err) if options.keep_going => {
                tracing::error!("Skipping {:#}", err);
                failed += 1;
            }
            Err(err) => return Err(err),
        }
    }

    tracing::debug!("Processed {} packages, {} failed", packages.len(), failed);

    if failed > 0 {
        bail!("{} of {} packages failed", failed, packages.len());
    }

    Ok(())
}
