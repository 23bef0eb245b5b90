use anyhow::{Context, Result};
use clap::Parser;
use signstream::classify::ScriptedClassifier;
use signstream::cli::{Cli, Commands};
use signstream::config::Config;
use signstream::extract::JsonLinesExtractor;
use signstream::session::StreamSession;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            landmarks,
            scores,
            json,
        } => run_replay(cli.config.as_deref(), &landmarks, &scores, json),
        Commands::Config => show_config(cli.config.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)?,
            None => Config::default(),
        },
    };
    Ok(config.with_env_overrides())
}

fn run_replay(config: Option<&Path>, landmarks: &Path, scores: &Path, json: bool) -> Result<()> {
    let config = load_config(config)?;

    let scores_file = File::open(scores)
        .with_context(|| format!("failed to open score file {}", scores.display()))?;
    let classifier = ScriptedClassifier::from_reader(BufReader::new(scores_file))?;

    let mut session = StreamSession::new(
        config.recognition,
        Box::new(JsonLinesExtractor::new()),
        Arc::new(classifier),
    )?;

    let landmarks_file = File::open(landmarks)
        .with_context(|| format!("failed to open landmark file {}", landmarks.display()))?;

    for (number, line) in BufReader::new(landmarks_file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match session.process_frame(line.as_bytes()) {
            Ok(decision) => {
                if json {
                    println!("{}", serde_json::to_string(&decision)?);
                } else {
                    let label = decision.prediction.as_deref().unwrap_or("-");
                    println!(
                        "frame {:>4}: {} ({:.2}) | sentence: {}",
                        number + 1,
                        label,
                        decision.confidence,
                        decision.sentence.join(" ")
                    );
                }
            }
            Err(e) if e.is_recoverable() => {
                eprintln!("signstream: frame {} dropped: {e}", number + 1);
            }
            Err(e) => return Err(e).context("session failed"),
        }
    }

    Ok(())
}

fn show_config(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
