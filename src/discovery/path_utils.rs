use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::core::error::Result;

/// Expand input files and directories into the ordered candidate list.
///
/// Directories are walked recursively, visiting every file beneath the root:
/// hidden files and gitignored files are candidates like any other. A file
/// qualifies only if its extension is in `file_types`; the empty string
/// matches files without an extension. Walk entries are sorted by file name
/// so visit order is deterministic.
pub fn expand_paths(
    input_paths: Vec<&Path>,
    file_types: &HashSet<String>,
) -> Result<Vec<PathBuf>> {
    let mut result_paths = Vec::new();

    for path in input_paths {
        if path.is_file() {
            if matches_file_types(path, file_types) {
                result_paths.push(path.to_path_buf());
            }
        } else if path.is_dir() {
            let mut builder = ignore::WalkBuilder::new(path);
            // Visit everything: no hidden-file or gitignore filtering
            builder.standard_filters(false);
            builder.sort_by_file_name(|a, b| a.cmp(b));

            for entry in builder.build() {
                let entry = entry?;
                let entry_path = entry.path();

                if entry_path.is_file() && matches_file_types(entry_path, file_types) {
                    result_paths.push(entry_path.to_path_buf());
                }
            }
        }
    }

    Ok(result_paths)
}

fn matches_file_types(path: &Path, file_types: &HashSet<String>) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => file_types.contains(ext),
        // Include files without extensions if "" is in the set
        None => file_types.contains(""),
    }
}
