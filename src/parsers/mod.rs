//! Heuristic extraction of class structure from source text.
//!
//! No grammar is involved: source is normalized so every statement and brace
//! sits on its own line, sliced into one chunk per `class` declaration, and
//! each chunk is mined with bounded line patterns plus depth-aware scans.

pub mod depth;
pub mod extractor;
pub mod normalizer;
pub mod patterns;
pub mod segmenter;
pub mod type_tree;

use serde::{Deserialize, Serialize};

pub use extractor::{extract_class, ClassRecord, ConstructorSignature, MethodSignature};
pub use type_tree::TypeNode;

/// Everything phase two needs from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFile {
    /// `""` when the file declares no namespace.
    pub namespace: String,
    pub imports: Vec<String>,
    pub classes: Vec<ClassRecord>,
}

/// The subset of a file the symbol registry is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    pub namespace: String,
    pub class_names: Vec<String>,
}

/// Normalize, segment and fully extract one file.
pub fn parse_source(source: &str) -> ParsedFile {
    let normalized = normalizer::normalize(source);
    let lines: Vec<&str> = normalized.lines().collect();

    ParsedFile {
        namespace: segmenter::namespace(&lines),
        imports: segmenter::imports(&lines),
        classes: segmenter::segment(&lines)
            .into_iter()
            .filter_map(extract_class)
            .collect(),
    }
}

/// Normalize one file only far enough to find its namespace and class names.
pub fn scan_declarations(source: &str) -> Declarations {
    let normalized = normalizer::normalize(source);
    let lines: Vec<&str> = normalized.lines().collect();

    Declarations {
        namespace: segmenter::namespace(&lines),
        class_names: lines
            .iter()
            .filter_map(|line| segmenter::class_name(line))
            .map(str::to_string)
            .collect(),
    }
}
