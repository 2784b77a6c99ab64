mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use heartlink_game::PairingTracker;
use shell::{ReportFormat, Shell};
use std::fs;
use std::io::{stdin, stdout};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "heartlink", version)]
#[command(about = "Pairing tracker for the colour hearts-link party game")]
struct Args {
    /// Pre-seed the roster (comma-separated names) and skip the intake prompt
    #[arg(long)]
    participants: Option<String>,

    /// Run commands from a file (one JSON command per line) instead of the menu
    #[arg(long)]
    script: Option<PathBuf>,

    /// Format of the end-of-game summary
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut tracker = PairingTracker::new();
    if let Some(csv) = &args.participants {
        for name in split_csv(csv) {
            tracker
                .add(&name)
                .with_context(|| format!("seeding roster with '{name}'"))?;
        }
    }

    let stdin = stdin();
    let mut shell = Shell::new(tracker, stdin.lock(), stdout(), args.report);
    if let Some(path) = &args.script {
        let script = fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        return shell.run_script(&script);
    }
    shell.run(args.participants.is_none())
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_drops_empties() {
        assert_eq!(split_csv("Mei, Ren ,,Sora"), ["Mei", "Ren", "Sora"]);
        assert!(split_csv("  ,").is_empty());
    }
}
