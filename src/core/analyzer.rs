use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::config::AnalyzerConfig;
use super::graph::DependencyRecord;
use super::registry::{RegistryBuilder, RegistryCollision, SymbolRegistry};
use super::resolver::DependencyResolver;
use super::scanner::ProjectScanner;
use super::source::{FsSourceReader, ReadError, SourceReader};
use crate::parsers::{parse_source, scan_declarations, Declarations};

/// A project and the source files that belong to it, in processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub files: Vec<PathBuf>,
}

impl Project {
    pub fn new(name: impl Into<String>, files: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Registration,
    Extraction,
}

/// A file that could not be read; it contributed nothing to its phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub project_name: String,
    pub file_path: PathBuf,
    pub phase: Phase,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub records: Vec<DependencyRecord>,
    pub failures: Vec<FileFailure>,
    pub collisions: Vec<RegistryCollision>,
    pub files_analyzed: usize,
}

struct SourceFile<'a> {
    project: &'a str,
    path: &'a Path,
}

impl SourceFile<'_> {
    fn failure(&self, phase: Phase, err: &ReadError) -> FileFailure {
        warn!(
            project = self.project,
            path = %self.path.display(),
            ?phase,
            "skipping unreadable file: {err}"
        );
        FileFailure {
            project_name: self.project.to_string(),
            file_path: self.path.to_path_buf(),
            phase,
            message: err.to_string(),
        }
    }
}

/// Two-phase pipeline: every file is registered before any file is resolved.
pub struct CodebaseAnalyzer {
    config: AnalyzerConfig,
}

impl CodebaseAnalyzer {
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Discover projects under `root_path` and analyze them from disk.
    pub fn analyze_path(&self, root_path: &Path) -> Result<AnalysisReport> {
        let projects = ProjectScanner::new().scan_directory(root_path)?;
        info!(
            projects = projects.len(),
            root = %root_path.display(),
            "discovered projects"
        );
        self.analyze(&projects, &FsSourceReader::new())
    }

    pub fn analyze<R>(&self, projects: &[Project], reader: &R) -> Result<AnalysisReport>
    where
        R: SourceReader + ?Sized,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.read_concurrency.max(1))
            .build()
            .context("failed to start the analysis worker pool")?;

        let files: Vec<SourceFile<'_>> = projects
            .iter()
            .flat_map(|project| {
                project.files.iter().map(move |path| SourceFile {
                    project: &project.name,
                    path,
                })
            })
            .collect();

        let mut failures = Vec::new();

        debug!(files = files.len(), "phase 1: building symbol registry");
        let (registry, collisions) = self.build_registry(&pool, &files, reader, &mut failures);
        info!(
            keys = registry.len(),
            collisions = collisions.len(),
            "symbol registry complete"
        );

        debug!("phase 2: extracting and resolving dependencies");
        let records = self.extract_dependencies(&pool, &files, reader, &registry, &mut failures);
        info!(
            records = records.len(),
            failures = failures.len(),
            "dependency extraction complete"
        );

        Ok(AnalysisReport {
            records,
            failures,
            collisions,
            files_analyzed: files.len(),
        })
    }

    /// Reads run on the pool; registration then replays the results in input
    /// order so later files overwrite earlier ones deterministically.
    fn build_registry<R>(
        &self,
        pool: &rayon::ThreadPool,
        files: &[SourceFile<'_>],
        reader: &R,
        failures: &mut Vec<FileFailure>,
    ) -> (SymbolRegistry, Vec<RegistryCollision>)
    where
        R: SourceReader + ?Sized,
    {
        let scanned: Vec<Result<Declarations, ReadError>> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    reader
                        .read_source(file.path)
                        .map(|source| scan_declarations(&source))
                })
                .collect()
        });

        let mut builder = RegistryBuilder::new();
        for (file, outcome) in files.iter().zip(scanned) {
            match outcome {
                Ok(declarations) => {
                    debug!(
                        path = %file.path.display(),
                        classes = declarations.class_names.len(),
                        "registered declarations"
                    );
                    for class_name in &declarations.class_names {
                        builder.register(class_name, &declarations.namespace, file.project);
                    }
                }
                Err(err) => failures.push(file.failure(Phase::Registration, &err)),
            }
        }
        builder.build()
    }

    fn extract_dependencies<R>(
        &self,
        pool: &rayon::ThreadPool,
        files: &[SourceFile<'_>],
        reader: &R,
        registry: &SymbolRegistry,
        failures: &mut Vec<FileFailure>,
    ) -> Vec<DependencyRecord>
    where
        R: SourceReader + ?Sized,
    {
        let resolver = DependencyResolver::new(registry);
        let extract = |file: &SourceFile<'_>| -> Result<Vec<DependencyRecord>, ReadError> {
            let source = reader.read_source(file.path)?;
            let parsed = parse_source(&source);
            Ok(resolver.resolve_file(&parsed, file.project, file.path))
        };

        let outcomes: Vec<Result<Vec<DependencyRecord>, ReadError>> =
            if self.config.parallel_extraction {
                pool.install(|| files.par_iter().map(|file| extract(file)).collect())
            } else {
                files.iter().map(|file| extract(file)).collect()
            };

        let mut records = Vec::new();
        for (file, outcome) in files.iter().zip(outcomes) {
            match outcome {
                Ok(file_records) => records.extend(file_records),
                Err(err) => failures.push(file.failure(Phase::Extraction, &err)),
            }
        }
        records
    }
}

impl Default for CodebaseAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
