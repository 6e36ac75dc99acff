use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Severity-colored one-line-per-vector output
    Terminal,
    /// JSON array of score reports
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cvsscore")]
#[command(about = "CVSS vector parser and severity score calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score CVSS vectors and report severity
    Score {
        /// Vectors to score; reads one vector per stdin line when omitted
        vectors: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },
}
