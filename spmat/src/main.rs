use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
#[cfg(feature = "serde")]
use spmat::OutputFormat;
use spmat::{Job, Operation, RunConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "spmat - Add, subtract or multiply sparse matrices stored as text documents")]
struct Cli {
    /// Operation to apply: add, subtract or multiply
    operation: Operation,

    /// First operand document
    left: PathBuf,

    /// Second operand document
    right: PathBuf,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reject entries outside the declared dimensions
    #[arg(long)]
    strict: bool,

    /// Omit the "Result of <operation>:" line
    #[arg(long)]
    no_label: bool,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,

    /// Log reads and operation progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> RunConfig {
        let config = RunConfig::default()
            .with_strict_bounds(self.strict)
            .with_label(!self.no_label);

        #[cfg(feature = "serde")]
        let config = if self.json {
            config.with_output(OutputFormat::Json)
        } else {
            config
        };
        #[cfg(not(feature = "serde"))]
        if self.json {
            tracing::warn!("JSON output requires the serde feature, writing text");
        }

        config
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let job = Job::new(cli.operation, &cli.left, &cli.right).with_config(cli.config());
    match job.execute(cli.output.as_deref(), &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
