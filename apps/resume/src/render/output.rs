use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "resume.pdf";

/// `<data file stem>.pdf` in the working directory, or `resume.pdf` when the
/// data file has no usable stem.
pub fn derive_output_path(data_file: &Path) -> PathBuf {
    match data_file.file_stem() {
        Some(stem) if !stem.is_empty() => {
            let mut name = stem.to_os_string();
            name.push(".pdf");
            PathBuf::from(name)
        }
        _ => PathBuf::from(DEFAULT_OUTPUT),
    }
}
