//! Human-readable Markdown report.
//!
//! ## Output Structure
//!
//! - **SUMMARY**: file, class, edge and failure counts
//! - **PROJECTS**: one section per project, one entry per class with its
//!   source file and resolved dependencies
//! - **CYCLES**: dependency cycles found in the class graph
//! - **FAILURES** / **COLLISIONS**: unreadable files and overwritten registry keys

use anyhow::Result;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::{AnalysisReport, ClassGraph, DependencyInfo, DependencyRecord, EXTERNAL_PROJECT};

pub struct MarkdownFormatter {
    /// List external references alongside in-corpus ones.
    include_external: bool,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self {
            include_external: true,
        }
    }

    pub fn with_external(mut self, include: bool) -> Self {
        self.include_external = include;
        self
    }

    pub fn format_to_file(&self, report: &AnalysisReport, output_path: &Path) -> Result<()> {
        fs::write(output_path, self.format_report(report)?)?;
        Ok(())
    }

    pub fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::with_capacity(4096);
        let graph = ClassGraph::from_records(&report.records);
        let cycles = graph.cycles();

        writeln!(output, "# CLASS_DEPENDENCIES")?;
        writeln!(
            output,
            "FILES:{} CLASSES:{} EDGES:{} FAILURES:{}\n",
            report.files_analyzed,
            report.records.len(),
            graph.edge_count(),
            report.failures.len()
        )?;

        let mut by_project: BTreeMap<&str, Vec<&DependencyRecord>> = BTreeMap::new();
        for record in &report.records {
            by_project
                .entry(record.project_name.as_str())
                .or_default()
                .push(record);
        }

        for (project, records) in by_project {
            writeln!(output, "## {project}\n")?;
            for record in records {
                writeln!(
                    output,
                    "### {}\n`{}`\n",
                    qualified(&record.namespace, &record.class_name),
                    record.file_path.display()
                )?;
                let deps: Vec<&DependencyInfo> = record
                    .dependencies
                    .iter()
                    .filter(|dep| self.include_external || dep.project_name != EXTERNAL_PROJECT)
                    .collect();
                if deps.is_empty() {
                    writeln!(output, "- (none)")?;
                }
                for dep in deps {
                    writeln!(
                        output,
                        "- {} [{}]",
                        qualified(&dep.namespace, &dep.class_name),
                        dep.project_name
                    )?;
                }
                writeln!(output)?;
            }
        }

        if !cycles.is_empty() {
            writeln!(output, "## CYCLES\n")?;
            for cycle in &cycles {
                let names: Vec<String> = cycle
                    .iter()
                    .map(|info| qualified(&info.namespace, &info.class_name))
                    .collect();
                writeln!(output, "- {}", names.join(" <-> "))?;
            }
            writeln!(output)?;
        }

        if !report.failures.is_empty() {
            writeln!(output, "## FAILURES\n")?;
            for failure in &report.failures {
                writeln!(output, "- `{}`: {}", failure.file_path.display(), failure.message)?;
            }
            writeln!(output)?;
        }

        if !report.collisions.is_empty() {
            writeln!(output, "## COLLISIONS\n")?;
            for collision in &report.collisions {
                writeln!(
                    output,
                    "- `{}`: {} replaced {}",
                    collision.key, collision.replacement.project_name, collision.previous.project_name
                )?;
            }
        }

        Ok(output)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn qualified(namespace: &str, class_name: &str) -> String {
    if namespace.is_empty() {
        class_name.to_string()
    } else {
        format!("{namespace}.{class_name}")
    }
}
