use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use contentcat::{init_logging, Aggregator, Cli, CopyOutcome, OsFileSystem};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "Parsed arguments");

    // Headers must carry absolute paths. Symlinks are left unresolved.
    let paths: Vec<_> = cli
        .selected_paths(std::io::stdin().lock())
        .context("failed to read paths from stdin")?
        .into_iter()
        .map(|path| std::path::absolute(&path).unwrap_or(path))
        .collect();

    let aggregator = Aggregator::new(OsFileSystem::new(cli.symlink_policy()));
    let result = aggregator.aggregate_paths(paths.as_slice());
    for failure in &result.failures {
        eprintln!("{failure}");
    }

    let mut sink = cli.sink();
    let outcome = CopyOutcome::classify(paths.len(), &result);
    if let CopyOutcome::Copied { .. } = outcome {
        sink.write(&result.text)
            .with_context(|| format!("failed to copy to {}", sink.describe()))?;
        if !cli.quiet {
            eprintln!("{}", outcome.message(&sink.describe()));
        }
    } else {
        eprintln!("{}", outcome.message(&sink.describe()));
    }

    Ok(outcome.exit_code())
}
