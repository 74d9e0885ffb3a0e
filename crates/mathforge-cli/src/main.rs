//! mathforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "mathforge",
    version,
    about = "Arithmetic practice paper generator and grader"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an exercise file and its answer key
    Generate {
        /// Number of problems
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Exclusive upper bound on numbers (and bound on fraction denominators)
        #[arg(short = 'r', long)]
        range: Option<i64>,

        /// Allow proper fractions in problems
        #[arg(long)]
        fractions: bool,

        /// RNG seed for a reproducible paper
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade a submission against an answer key
    Grade {
        /// Submitted answers file
        #[arg(long)]
        submission: PathBuf,

        /// Answer key file (defaults to the configured Answers.txt)
        #[arg(long)]
        key: Option<PathBuf>,

        /// Grade report output file (defaults to the configured Grade.txt)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check that a paper file parses cleanly
    Check {
        /// Paper file (answer key or submission)
        paper: PathBuf,
    },

    /// Create a starter config
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mathforge=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            count,
            range,
            fractions,
            seed,
            output,
            config,
        } => commands::generate::execute(count, range, fractions, seed, output, config),
        Commands::Grade {
            submission,
            key,
            output,
            format,
            config,
        } => commands::grade::execute(submission, key, output, format, config),
        Commands::Check { paper } => commands::check::execute(paper),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
