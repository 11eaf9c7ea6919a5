use std::path::{Path, PathBuf};

/// `<folder>/synthetic_dataset_<run>.<extension>`, runs numbered from 1
pub fn dataset_path(folder: &Path, run: usize, extension: &str) -> PathBuf {
    folder.join(format!("synthetic_dataset_{}.{}", run, extension))
}
