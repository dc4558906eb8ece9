use anyhow::{bail, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::analyzer::Project;

const SOURCE_EXTENSION: &str = "cs";
const PROJECT_EXTENSION: &str = "csproj";
const SKIPPED_DIRECTORIES: &[&str] = &["bin", "obj", "node_modules", "packages"];

/// Groups the source files under a root directory into projects.
///
/// Every directory holding a project manifest is a project named after the
/// manifest; a source file belongs to its nearest enclosing project. Files
/// outside every project belong to a project named after the root.
pub struct ProjectScanner;

impl ProjectScanner {
    pub fn new() -> Self {
        Self
    }

    pub fn scan_directory(&self, root_path: &Path) -> Result<Vec<Project>> {
        if !root_path.is_dir() {
            bail!("{} is not a directory", root_path.display());
        }

        let entries: Vec<DirEntry> = WalkDir::new(root_path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped_directory(entry))
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .collect();

        let mut project_roots: BTreeMap<PathBuf, String> = BTreeMap::new();
        for entry in &entries {
            let path = entry.path();
            if has_extension(path, PROJECT_EXTENSION) {
                if let (Some(dir), Some(stem)) = (path.parent(), path.file_stem()) {
                    project_roots
                        .entry(dir.to_path_buf())
                        .or_insert_with(|| stem.to_string_lossy().into_owned());
                }
            }
        }

        let fallback = root_name(root_path);
        let mut grouped: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
        for entry in &entries {
            let path = entry.path();
            if !has_extension(path, SOURCE_EXTENSION) {
                continue;
            }
            let project = path
                .ancestors()
                .skip(1)
                .find_map(|dir| project_roots.get(dir))
                .cloned()
                .unwrap_or_else(|| fallback.clone());
            grouped.entry(project).or_default().push(path.to_path_buf());
        }

        Ok(grouped
            .into_iter()
            .map(|(name, files)| Project::new(name, files))
            .collect())
    }
}

impl Default for ProjectScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn is_skipped_directory(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRECTORIES.contains(&name.as_ref())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

fn root_name(root_path: &Path) -> String {
    root_path
        .canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .or_else(|| root_path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "root".to_string())
}
