//! Utility functions for CLI commands

use std::path::Path;

use crate::Dataset;

/// Load a dataset file, with the path in the error message.
pub fn load_dataset(path: &Path) -> Result<Dataset, String> {
    Dataset::load(path).map_err(|e| format!("Failed to load dataset {}: {}", path.display(), e))
}

/// Save a dataset file, with the path in the error message.
pub fn save_dataset(dataset: &Dataset, path: &Path) -> Result<(), String> {
    dataset
        .save(path)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// File name of `path`, used as dataset id when the file carries none.
pub fn dataset_id(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
