use anyhow::Result;
use clap::Parser;
use gapeval::score_files;
use std::path::PathBuf;

/// Scores system output for the GAP challenge and prints the scorecard.
#[derive(Debug, Parser)]
#[command(name = "gapeval", version, about)]
struct Args {
    /// Path to the gold .tsv to score against. First line should contain
    /// header information and is ignored.
    #[arg(long = "gold_tsv", value_name = "FILE")]
    gold_tsv: PathBuf,

    /// Path to the system .tsv to score. All lines are read.
    #[arg(long = "system_tsv", value_name = "FILE")]
    system_tsv: PathBuf,

    /// Suppress warnings about the annotation files
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.init_logging();

    let scorecard = score_files(&args.gold_tsv, &args.system_tsv)?;
    print!("{}", scorecard);
    Ok(())
}
