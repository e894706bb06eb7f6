use anyhow::Result;
use clap::Args;
use std::io::Write;

use crate::package::Package;

use super::report::{self, ReportOptions};
use super::OutputFormat;

#[derive(Args)]
pub struct ComputeCommand {
    /// Workout code: SWM, RUN or WLK
    code: String,

    /// Sensor values in package order (e.g. "15000 1 75" for RUN)
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,
}

impl ComputeCommand {
    pub fn execute<W: Write>(self, format: OutputFormat, out: &mut W) -> Result<()> {
        let package = Package::new(self.code, self.values);
        let options = ReportOptions {
            format,
            keep_going: false,
        };

        report::run(std::slice::from_ref(&package), options, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(code: &str, values: &[f64]) -> (Result<()>, String) {
        let cmd = ComputeCommand {
            code: code.to_string(),
            values: values.to_vec(),
        };
        let mut out = Vec::new();
        let result = cmd.execute(OutputFormat::Text, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_compute_running() {
        let (result, output) = compute("RUN", &[15000.0, 1.0, 75.0]);

        assert!(result.is_ok());
        assert!(output.contains("Тип тренировки: Running;"));
        assert!(output.contains("Потрачено ккал: 699.750."));
    }

    #[test]
    fn test_compute_unknown_code() {
        let (result, output) = compute("XYZ", &[1.0]);

        assert!(format!("{:#}", result.unwrap_err()).contains("Unknown workout type: XYZ"));
        assert!(output.is_empty());
    }
}
