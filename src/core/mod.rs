pub mod analyzer;
pub mod config;
pub mod graph;
pub mod registry;
pub mod resolver;
pub mod scanner;
pub mod source;

pub use analyzer::{AnalysisReport, CodebaseAnalyzer, FileFailure, Phase, Project};
pub use config::AnalyzerConfig;
pub use graph::{ClassGraph, DependencyInfo, DependencyRecord};
pub use registry::{RegistryBuilder, RegistryCollision, RegistryEntry, SymbolRegistry};
pub use resolver::{DependencyResolver, EXTERNAL_PROJECT, UNKNOWN_NAMESPACE};
pub use scanner::ProjectScanner;
pub use source::{FsSourceReader, MemorySourceReader, ReadError, SourceReader};
