mod compute;
pub mod report;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;

use crate::config::PackagesFile;

pub use compute::ComputeCommand;
pub use report::ReportOptions;

#[derive(Parser)]
#[command(name = "fitness-tracker")]
#[command(about = "Training summaries from fitness tracker sensor packages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML file with the packages to summarize (defaults to the demo packages)
    #[arg(short, long, env = "FITNESS_TRACKER_PACKAGES")]
    packages: Option<PathBuf>,

    /// Output format for summaries
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip packages that fail instead of stopping at the first one
    #[arg(short, long)]
    keep_going: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a single package given on the command line
    Compute(ComputeCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        match self.command {
            None => {
                let packages = PackagesFile::resolve(self.packages.as_deref())?;
                let options = ReportOptions {
                    format: self.format,
                    keep_going: self.keep_going,
                };
                report::run(&packages, options, &mut io::stdout().lock())
            }
            Some(Commands::Compute(cmd)) => cmd.execute(self.format, &mut io::stdout().lock()),
            Some(Commands::Completions { shell }) => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
