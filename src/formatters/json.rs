use anyhow::Result;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::{AnalysisReport, ClassGraph};

/// JSON output for dependency reports.
///
/// The compact layout interns file paths into a `files` table and writes each
/// dependency as a `[class, namespace, project]` triple; the full layout is
/// the report's own serde representation.
pub struct JsonFormatter {
    minimal: bool,
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {
            minimal: true,
            pretty: false,
        }
    }

    pub fn full() -> Self {
        Self {
            minimal: false,
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn format_to_file(&self, report: &AnalysisReport, output_path: &Path) -> Result<()> {
        let json_content = self.format_report(report)?;
        fs::write(output_path, json_content)?;
        Ok(())
    }

    pub fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let output = if self.minimal {
            self.compact_value(report)
        } else {
            serde_json::to_value(report)?
        };

        Ok(if self.pretty {
            serde_json::to_string_pretty(&output)?
        } else {
            serde_json::to_string(&output)?
        })
    }

    fn compact_value(&self, report: &AnalysisReport) -> Value {
        let mut file_map: HashMap<String, usize> = HashMap::new();
        let mut files: Vec<String> = Vec::new();

        let records: Vec<Value> = report
            .records
            .iter()
            .map(|record| {
                let path = record.file_path.to_string_lossy().into_owned();
                let file_id = *file_map.entry(path.clone()).or_insert_with(|| {
                    files.push(path);
                    files.len() - 1
                });
                let deps: Vec<Value> = record
                    .dependencies
                    .iter()
                    .map(|dep| json!([dep.class_name, dep.namespace, dep.project_name]))
                    .collect();
                json!({
                    "c": record.class_name,
                    "n": record.namespace,
                    "p": record.project_name,
                    "f": file_id,
                    "d": deps
                })
            })
            .collect();

        let failures: Vec<Value> = report
            .failures
            .iter()
            .map(|failure| json!([failure.file_path.to_string_lossy(), failure.message]))
            .collect();

        let graph = ClassGraph::from_records(&report.records);

        json!({
            "meta": {
                "files": report.files_analyzed,
                "classes": report.records.len(),
                "edges": graph.edge_count(),
                "failures": report.failures.len(),
                "collisions": report.collisions.len(),
                "format": "compact"
            },
            "files": files,
            "records": records,
            "failures": failures
        })
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
