//! Command-line interface for signstream
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Streaming sign-language action recognition
#[derive(Parser, Debug)]
#[command(
    name = "signstream",
    version,
    about = "Streaming sign-language action recognition"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a recorded landmark stream through a recognition session
    Replay {
        /// Landmark file: one JSON array of features per line, one line per frame
        #[arg(long, value_name = "PATH")]
        landmarks: PathBuf,

        /// Score file: one JSON probability array per line, one line per ready frame
        #[arg(long, value_name = "PATH")]
        scores: PathBuf,

        /// Print each frame decision as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from([
            "signstream",
            "replay",
            "--landmarks",
            "frames.jsonl",
            "--scores",
            "scores.jsonl",
            "--json",
        ]);
        match cli.command {
            Commands::Replay {
                landmarks,
                scores,
                json,
            } => {
                assert_eq!(landmarks, PathBuf::from("frames.jsonl"));
                assert_eq!(scores, PathBuf::from("scores.jsonl"));
                assert!(json);
            }
            other => panic!("Expected replay command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_config_flag() {
        let cli = Cli::parse_from(["signstream", "config", "--config", "/tmp/custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/custom.toml")));
        assert!(matches!(cli.command, Commands::Config));
    }
}
