use petgraph::{algo::tarjan_scc, graph::NodeIndex, Directed, Graph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// A resolved reference from one class to another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyInfo {
    pub class_name: String,
    pub namespace: String,
    pub project_name: String,
}

impl DependencyInfo {
    pub fn new(
        class_name: impl Into<String>,
        namespace: impl Into<String>,
        project_name: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            namespace: namespace.into(),
            project_name: project_name.into(),
        }
    }
}

/// One class in one file with its deduplicated dependencies, in first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DependencyRecord {
    pub class_name: String,
    pub namespace: String,
    pub project_name: String,
    pub file_path: PathBuf,
    pub dependencies: Vec<DependencyInfo>,
}

impl DependencyRecord {
    pub fn identity(&self) -> DependencyInfo {
        DependencyInfo::new(&self.class_name, &self.namespace, &self.project_name)
    }
}

pub type ClassDependencyGraph = Graph<DependencyInfo, (), Directed>;

/// Cross-project class-dependency graph assembled from dependency records.
pub struct ClassGraph {
    graph: ClassDependencyGraph,
    node_map: HashMap<DependencyInfo, NodeIndex>,
}

impl ClassGraph {
    pub fn from_records(records: &[DependencyRecord]) -> Self {
        let mut class_graph = Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
        };
        for record in records {
            let source = class_graph.add_node(record.identity());
            for dependency in &record.dependencies {
                let target = class_graph.add_node(dependency.clone());
                if class_graph.graph.find_edge(source, target).is_none() {
                    class_graph.graph.add_edge(source, target, ());
                }
            }
        }
        class_graph
    }

    fn add_node(&mut self, info: DependencyInfo) -> NodeIndex {
        if let Some(&index) = self.node_map.get(&info) {
            return index;
        }
        let index = self.graph.add_node(info.clone());
        self.node_map.insert(info, index);
        index
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn graph(&self) -> &ClassDependencyGraph {
        &self.graph
    }

    /// Classes that `info` depends on, sorted.
    pub fn dependencies_of(&self, info: &DependencyInfo) -> Vec<&DependencyInfo> {
        let Some(&index) = self.node_map.get(info) else {
            return Vec::new();
        };
        let mut deps: Vec<&DependencyInfo> = self
            .graph
            .neighbors(index)
            .map(|neighbor| &self.graph[neighbor])
            .collect();
        deps.sort();
        deps
    }

    /// Dependency cycles: every strongly connected component with more than
    /// one class, plus classes that depend on themselves. Members of each
    /// cycle are sorted, and cycles are ordered by their first member.
    pub fn cycles(&self) -> Vec<Vec<DependencyInfo>> {
        let mut cycles: Vec<Vec<DependencyInfo>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || self
                        .graph
                        .find_edge(component[0], component[0])
                        .is_some()
            })
            .map(|component| {
                let mut members: Vec<DependencyInfo> = component
                    .into_iter()
                    .map(|index| self.graph[index].clone())
                    .collect();
                members.sort();
                members
            })
            .collect();
        cycles.sort();
        cycles
    }
}
