//! # CLASSWEB
//!
//! Heuristic class-dependency extraction for class-based object-oriented
//! codebases.
//!
//! Source files are never parsed into a syntax tree. Each file is normalized,
//! sliced into one chunk per `class` declaration and mined with bounded line
//! patterns. Analysis runs in two phases:
//!
//! 1. **Registration**: every file of every project contributes its namespace
//!    and class names to a corpus-wide symbol registry.
//! 2. **Extraction**: every class is mined for inheritance, instantiations,
//!    static calls, fields, properties, methods and constructors, and each
//!    referenced type is resolved against the finished registry.
//!
//! ## Output Formats
//!
//! - **JSON**: compact (interned file table) or full report
//! - **Markdown**: per-project report with dependency cycles

pub mod core;
pub mod formatters;
pub mod parsers;
