use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;

use crate::runner::TestResult;

#[derive(Default, Clone, Copy)]
pub struct SectionStats {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Per-directory tallies and failure reasons, grouped for `--analyze`.
#[derive(Default)]
pub struct Analysis {
    pub sections: BTreeMap<String, SectionStats>,
    pub failure_reasons: BTreeMap<String, usize>,
}

impl Analysis {
    pub fn record(&mut self, root: &Path, path: &Path, result: &TestResult) {
        let stats = self.sections.entry(section_of(root, path)).or_default();
        match result {
            TestResult::Passed => stats.passed += 1,
            TestResult::Failed(reason) => {
                stats.failed += 1;
                *self.failure_reasons.entry(first_line(reason)).or_insert(0) += 1;
            }
            TestResult::Skipped(_) => stats.skipped += 1,
        }
    }
}

fn section_of(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    match rel.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.display().to_string(),
        _ => "(root)".to_string(),
    }
}

fn first_line(reason: &str) -> String {
    reason.lines().next().unwrap_or_default().trim().to_string()
}

pub fn print_analysis(analysis: &Analysis) {
    println!("\n{}", "Analysis (--analyze)".bold().cyan());
    for (section, stats) in &analysis.sections {
        println!(
            "  {:<32} {} passed, {} failed, {} skipped",
            section,
            stats.passed.to_string().green(),
            stats.failed.to_string().red(),
            stats.skipped.to_string().yellow()
        );
    }

    let mut reasons: Vec<_> = analysis.failure_reasons.iter().collect();
    if reasons.is_empty() {
        return;
    }
    reasons.sort_by_key(|(_, count)| Reverse(**count));
    println!("\n{}", "Most common failure reasons:".bold());
    for (reason, count) in reasons.into_iter().take(10) {
        println!("  {:>4}x {}", count, reason);
    }
}
