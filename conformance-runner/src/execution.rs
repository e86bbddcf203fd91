use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use colored::Colorize;
use rayon::prelude::*;

use crate::fixture::parse_fixture;
use crate::panic_message::format_panic;
use crate::runner::{TestResult, run_fixture};
use crate::stats::Analysis;

pub struct SuiteSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub failures: Vec<(PathBuf, String)>,
    pub analysis: Analysis,
}

pub fn run_suite(root: &Path, files: &[PathBuf], verbose: bool) -> SuiteSummary {
    // Records are single-threaded; each case builds its own inside the worker.
    let outcomes: Vec<_> = files.par_iter().map(|path| run_case(path)).collect();
    let mut summary = SuiteSummary {
        passed: 0,
        failed: 0,
        skipped: 0,
        failures: Vec::new(),
        analysis: Analysis::default(),
    };

    for (path, result) in outcomes {
        summary.analysis.record(root, &path, &result);
        apply_result(&mut summary, &path, &result, verbose);
    }

    summary
}

fn run_case(path: &Path) -> (PathBuf, TestResult) {
    let result = match fs::read_to_string(path) {
        Ok(source) => match parse_fixture(&source) {
            Ok(fixture) => panic::catch_unwind(AssertUnwindSafe(|| run_fixture(&fixture)))
                .unwrap_or_else(|payload| TestResult::Failed(format_panic(payload))),
            Err(reason) => TestResult::Failed(reason),
        },
        Err(err) => TestResult::Skipped(format!("failed to read fixture: {err}")),
    };
    (path.to_path_buf(), result)
}

fn apply_result(summary: &mut SuiteSummary, path: &Path, result: &TestResult, verbose: bool) {
    match result {
        TestResult::Passed => {
            summary.passed += 1;
            if verbose {
                println!("{} {}", "PASS".green(), path.display());
            }
        }
        TestResult::Failed(reason) => {
            summary.failed += 1;
            if verbose {
                println!("{} {} - {}", "FAIL".red(), path.display(), reason);
            }
            summary.failures.push((path.to_path_buf(), reason.clone()));
        }
        TestResult::Skipped(reason) => {
            summary.skipped += 1;
            if verbose {
                println!("{} {} - {}", "SKIP".yellow(), path.display(), reason);
            }
        }
    }
}
