use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use lintfixer::{FileOutcome, Fixer, Logger, LowercaseErrorLiteral};
use similar::{ChangeTag, TextDiff};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lintfixer")]
#[command(about = "Rule-based source rewriting for Rust files", long_about = None)]
#[command(version)]
struct Cli {
    /// File or directory to fix
    path: Option<PathBuf>,

    /// Print a notice for every rewritten file
    #[arg(short, long)]
    verbose: bool,

    /// Show what would change as a unified diff without writing files
    #[arg(short = 'n', long)]
    dry_run: bool,
}

/// Logger that prints engine notices to stdout.
struct StdoutLogger;

impl Logger for StdoutLogger {
    fn info(&self, message: &str) {
        println!("{message}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(path) = cli.path else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut builder = Fixer::builder()
        .rule(LowercaseErrorLiteral::default())
        .dry_run(cli.dry_run);
    if cli.verbose {
        builder = builder.logger(StdoutLogger);
    }
    let fixer = builder.build();

    let summary = fixer.fix(&path)?;

    if cli.dry_run {
        for outcome in &summary.outcomes {
            if let FileOutcome::WouldWrite {
                path,
                original,
                rewritten,
            } = outcome
            {
                display_diff(path, original, rewritten);
            }
        }
    }

    let changed = summary.files_changed();
    if changed > 0 {
        let verb = if cli.dry_run { "would rewrite" } else { "rewrote" };
        println!(
            "{}",
            format!("{verb} {changed} of {} files", summary.files_scanned()).green()
        );
    } else if cli.verbose {
        println!(
            "{}",
            format!("nothing to fix in {} files", summary.files_scanned()).dimmed()
        );
    }

    Ok(())
}

/// Helper: Show unified diff between original and rewritten content
fn display_diff(file: &Path, original: &str, rewritten: &str) {
    println!(
        "\n{}",
        format!("--- {} (original)", file.display()).dimmed()
    );
    println!("{}", format!("+++ {} (rewritten)", file.display()).dimmed());

    let diff = TextDiff::from_lines(original, rewritten);

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => format!("-{}", change).red(),
            ChangeTag::Insert => format!("+{}", change).green(),
            ChangeTag::Equal => format!(" {}", change).normal(),
        };
        print!("{}", sign);
    }
}
