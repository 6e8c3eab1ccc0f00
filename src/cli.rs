use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// hyetos: ROC verification of ensemble rainfall forecasts.
#[derive(Parser)]
#[command(
    name = "hyetos",
    version,
    about = "ROC verification of ensemble rainfall forecasts"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute empirical and binormal ROC curves for every system,
    /// threshold and lead time.
    Roc(RocArgs),
    /// Compute confidence bands of bootstrapped Brier score reliability.
    BsrelCi(BsrelCiArgs),
}

/// Arguments for the `roc` subcommand.
#[derive(clap::Args)]
pub struct RocArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "hyetos.toml")]
    pub config: PathBuf,

    /// Number of worker threads (defaults to the number of CPUs).
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

/// Arguments for the `bsrel-ci` subcommand.
#[derive(clap::Args)]
pub struct BsrelCiArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "hyetos.toml")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roc_with_jobs() {
        let cli = Cli::try_parse_from(["hyetos", "-vv", "roc", "--config", "a.toml", "-j", "4"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Roc(args) => {
                assert_eq!(args.config, PathBuf::from("a.toml"));
                assert_eq!(args.jobs, Some(4));
            }
            Command::BsrelCi(_) => panic!("expected roc"),
        }
    }

    #[test]
    fn parse_bsrel_ci_defaults() {
        let cli = Cli::try_parse_from(["hyetos", "bsrel-ci"]).unwrap();
        match cli.command {
            Command::BsrelCi(args) => assert_eq!(args.config, PathBuf::from("hyetos.toml")),
            Command::Roc(_) => panic!("expected bsrel-ci"),
        }
    }
}
