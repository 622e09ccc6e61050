use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "icclut",
    version,
    about = "Extract LUT tables from ICC profiles via iccdump reports"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Path to the iccdump executable (overrides the config file)"
    )]
    pub iccdump: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Treat INPUT as an already-produced report instead of a profile"
    )]
    pub saved_report: bool,
    #[arg(
        long,
        global = true,
        help = "Exclude tag headers and table-size declarations from the value scan"
    )]
    pub scoped_values: bool,
    #[arg(long, global = true, help = "Enable debug logging")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the raw dump report for a profile
    Dump {
        /// Profile file, report file with --saved-report, or - for stdin
        input: PathBuf,
    },
    /// List every tag in the report in order of appearance
    Tags { input: PathBuf },
    /// Extract normalized LUT data for a single tag signature
    Extract {
        input: PathBuf,
        /// Tag signature, e.g. A2B0
        signature: String,
    },
    /// Walk all tags and extract LUT data from each A2B/B2A table tag
    Report { input: PathBuf },
    /// Check that the dump executable is configured and runnable
    Doctor,
}
