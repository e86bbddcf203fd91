use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use crate::cli::Cli;
use crate::discovery::collect_fixture_files;
use crate::execution::{SuiteSummary, run_suite};
use crate::stats::print_analysis;

/// Run the suite and report. Returns `true` when any fixture failed.
pub fn run() -> bool {
    let cli = Cli::parse();
    let start = Instant::now();

    let files = collect_fixture_files(&cli.path);
    println!(
        "{} {} fixture files...\n",
        "Running".bold().cyan(),
        files.len()
    );

    let summary = run_suite(&cli.path, &files, cli.verbose);
    report_summary(&summary, start.elapsed().as_secs_f64());

    if cli.analyze {
        print_analysis(&summary.analysis);
    }

    if summary.failed > 0 && !cli.verbose {
        list_failed_fixtures(&cli.path, &summary.failures);
    }
    summary.failed > 0
}

fn report_summary(summary: &SuiteSummary, elapsed_secs: f64) {
    let ran = summary.passed + summary.failed;
    let verdict = if summary.failed == 0 {
        "all fixtures hold".green().bold()
    } else {
        "fixtures failed".red().bold()
    };
    println!(
        "\n{verdict}: {} of {ran} passed, {} failed, {} skipped ({elapsed_secs:.2}s)",
        summary.passed.to_string().green(),
        summary.failed.to_string().red(),
        summary.skipped.to_string().yellow(),
    );
}

fn list_failed_fixtures(root: &Path, failures: &[(PathBuf, String)]) {
    println!("{}", "Failed fixtures:".red().bold());
    for line in failed_fixture_lines(root, failures) {
        println!("  {line}");
    }
}

/// Failing fixtures relative to the suite root, capped unless `--verbose`.
fn failed_fixture_lines(root: &Path, failures: &[(PathBuf, String)]) -> Vec<String> {
    const SHOWN: usize = 10;

    let mut lines: Vec<String> = failures
        .iter()
        .take(SHOWN)
        .map(|(path, reason)| {
            let relative = path.strip_prefix(root).unwrap_or(path);
            format!("{}: {reason}", relative.display())
        })
        .collect();
    if failures.len() > SHOWN {
        lines.push(format!(
            "{} more; rerun with --verbose to see every step",
            failures.len() - SHOWN
        ));
    }
    lines
}
