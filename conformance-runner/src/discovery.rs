use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Every fixture file under `root`, sorted so runs are reproducible.
pub fn collect_fixture_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| is_fixture_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

fn is_fixture_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
        && !is_excluded(path)
}

fn is_excluded(path: &Path) -> bool {
    path.components()
        .any(|part| part.as_os_str().to_string_lossy().starts_with('_'))
}
