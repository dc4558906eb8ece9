use std::collections::HashSet;
use std::path::Path;

use super::graph::{DependencyInfo, DependencyRecord};
use super::registry::SymbolRegistry;
use crate::parsers::patterns::is_builtin;
use crate::parsers::type_tree::base_form;
use crate::parsers::{ClassRecord, ParsedFile, TypeNode};

/// Namespace reported for a bare name nothing in the corpus declares.
pub const UNKNOWN_NAMESPACE: &str = "unknown";
/// Project reported for a reference outside the analyzed corpus.
pub const EXTERNAL_PROJECT: &str = "external";

/// Resolves raw type references against a finished [`SymbolRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct DependencyResolver<'r> {
    registry: &'r SymbolRegistry,
}

impl<'r> DependencyResolver<'r> {
    pub fn new(registry: &'r SymbolRegistry) -> Self {
        Self { registry }
    }

    /// One record per class in `parsed`.
    pub fn resolve_file(
        &self,
        parsed: &ParsedFile,
        project_name: &str,
        file_path: &Path,
    ) -> Vec<DependencyRecord> {
        parsed
            .classes
            .iter()
            .map(|class| DependencyRecord {
                class_name: class.class_name.clone(),
                namespace: parsed.namespace.clone(),
                project_name: project_name.to_string(),
                file_path: file_path.to_path_buf(),
                dependencies: self.resolve_class(class, parsed),
            })
            .collect()
    }

    /// Deduplicated dependencies of one class, first occurrence wins.
    pub fn resolve_class(&self, class: &ClassRecord, parsed: &ParsedFile) -> Vec<DependencyInfo> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut emitted: HashSet<DependencyInfo> = HashSet::new();
        let mut dependencies = Vec::new();

        let candidates = class
            .type_references()
            .into_iter()
            .flat_map(TypeNode::flatten);

        for node in candidates {
            let name = base_form(&node.base_name);
            if is_builtin(name) || name == class.class_name {
                continue;
            }
            if !seen.insert(name) {
                continue;
            }
            // `App.Bar` and `Bar` can resolve to the same class
            if let Some(info) = self.resolve_name(name, &parsed.namespace, &parsed.imports) {
                if emitted.insert(info.clone()) {
                    dependencies.push(info);
                }
            }
        }

        dependencies
    }

    /// Resolve one base name in the scope of a file. Tuple nodes (empty
    /// names) resolve to nothing.
    pub fn resolve_name(
        &self,
        name: &str,
        file_namespace: &str,
        imports: &[String],
    ) -> Option<DependencyInfo> {
        if name.is_empty() {
            return None;
        }

        if let Some((namespace, class_name)) = name.rsplit_once('.') {
            if class_name.is_empty() {
                return None;
            }
            return Some(match self.registry.lookup(name) {
                Some(entry) => {
                    DependencyInfo::new(class_name, &entry.namespace, &entry.project_name)
                }
                None => DependencyInfo::new(class_name, namespace, EXTERNAL_PROJECT),
            });
        }

        let scopes = (!file_namespace.is_empty())
            .then_some(file_namespace)
            .into_iter()
            .chain(imports.iter().map(String::as_str));
        for scope in scopes {
            if let Some(entry) = self.registry.lookup(&format!("{scope}.{name}")) {
                return Some(DependencyInfo::new(name, &entry.namespace, &entry.project_name));
            }
        }

        // classes declared outside any namespace are visible everywhere
        if let Some(entry) = self.registry.lookup(name) {
            if entry.namespace.is_empty() {
                return Some(DependencyInfo::new(name, "", &entry.project_name));
            }
        }

        Some(DependencyInfo::new(name, UNKNOWN_NAMESPACE, EXTERNAL_PROJECT))
    }
}
