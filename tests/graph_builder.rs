use classweb::core::{ClassGraph, DependencyInfo, DependencyRecord};
use std::path::PathBuf;

fn record(class_name: &str, dependencies: Vec<DependencyInfo>) -> DependencyRecord {
    DependencyRecord {
        class_name: class_name.to_string(),
        namespace: "App".to_string(),
        project_name: "core".to_string(),
        file_path: PathBuf::from(format!("{class_name}.cs")),
        dependencies,
    }
}

fn info(class_name: &str) -> DependencyInfo {
    DependencyInfo::new(class_name, "App", "core")
}

#[test]
fn test_builds_nodes_and_edges() {
    let records = vec![
        record("A", vec![info("B")]),
        record("B", vec![info("A")]),
        record("C", vec![info("A"), info("A")]),
    ];

    let graph = ClassGraph::from_records(&records);

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.dependencies_of(&info("C")), vec![&info("A")]);
    assert!(graph.dependencies_of(&info("Missing")).is_empty());
}

#[test]
fn test_detects_mutual_dependency_cycle() {
    let records = vec![
        record("A", vec![info("B")]),
        record("B", vec![info("A")]),
        record("C", vec![info("A")]),
    ];

    let cycles = ClassGraph::from_records(&records).cycles();

    assert_eq!(cycles, vec![vec![info("A"), info("B")]]);
}

#[test]
fn test_self_dependency_is_a_cycle() {
    let records = vec![record("Node", vec![info("Node")]), record("Leaf", vec![])];

    let cycles = ClassGraph::from_records(&records).cycles();

    assert_eq!(cycles, vec![vec![info("Node")]]);
}

#[test]
fn test_external_dependencies_become_nodes() {
    let external = DependencyInfo::new("Widget", "unknown", "external");
    let records = vec![record("A", vec![external.clone()])];

    let graph = ClassGraph::from_records(&records);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.dependencies_of(&info("A")), vec![&external]);
    assert!(graph.cycles().is_empty());
}
