use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ListError, Result};

/// Path of the index list for `phase`: `<root>/ImageSets/Main/<phase>.txt`.
pub fn index_list_path(root: &Path, phase: &str) -> PathBuf {
    root.join("ImageSets")
        .join("Main")
        .join(format!("{}.txt", phase))
}

/// Path of the annotation for `index`: `<root>/Annotations/<index>.xml`.
pub fn annotation_path(root: &Path, index: &str) -> PathBuf {
    root.join("Annotations").join(format!("{}.xml", index))
}

/// Return the image identifiers listed for `phase`, in file order.
pub fn read_index_list(root: &Path, phase: &str) -> Result<Vec<String>> {
    let path = index_list_path(root, phase);
    let content = fs::read_to_string(&path).map_err(|e| ListError::missing_file(&path, e))?;
    Ok(parse_index_list(&content))
}

/// Split index-list text into identifiers, dropping the line terminators and blank lines.
pub fn parse_index_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Make sure the output directory exists. Existing contents are left alone.
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        log::info!("Creating output directory {}", path.display());
        fs::create_dir_all(path).map_err(|e| ListError::write(path, e))?;
    }
    Ok(())
}
