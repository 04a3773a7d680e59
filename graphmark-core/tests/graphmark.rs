//! End-to-end tests for the `Graphmark` orchestration API.

use std::collections::{HashSet, VecDeque};

use graphmark_core::{
    BenchmarkConfig, ComponentId, Graph, GraphmarkBuilder, GraphmarkError, PageRankStatus,
};
use rstest::{fixture, rstest};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[fixture]
fn small_run_builder() -> GraphmarkBuilder {
    GraphmarkBuilder::new()
        .with_seed(0)
        .with_node_count(10)
        .with_component_count(2)
        .with_max_component_outdegree(3)
}

fn undirected_members_reached(graph: &Graph, component: ComponentId) -> HashSet<usize> {
    let members = graph.component_members(component);
    let inside: HashSet<usize> = members.iter().copied().collect();
    let mut neighbours = vec![Vec::new(); graph.node_count()];
    for (source, edge) in graph.edges() {
        if inside.contains(&source) && inside.contains(&edge.target()) {
            neighbours[source].push(edge.target());
            neighbours[edge.target()].push(source);
        }
    }
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    if let Some(&root) = members.first() {
        seen.insert(root);
        queue.push_back(root);
    }
    while let Some(node) = queue.pop_front() {
        for &next in &neighbours[node] {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

#[rstest]
fn small_benchmark_end_to_end(small_run_builder: GraphmarkBuilder) -> TestResult {
    let run = small_run_builder.build()?.execute()?;
    let graph = run.graph();

    assert_eq!(graph.node_count(), 10);
    assert_eq!(graph.component_count(), 2);
    for component in [ComponentId::new(0), ComponentId::new(1)] {
        let members = graph.component_members(component);
        assert_eq!(members.len(), 5);
        let reached = undirected_members_reached(graph, component);
        assert_eq!(reached.len(), 5, "component {component} is not connected");
    }

    let bfs = run.report().bfs().as_ref().map_err(Clone::clone)?;
    for node in graph.component_members(ComponentId::new(0)) {
        assert!(bfs.visited(node), "node {node} in the source component was not visited");
    }
    assert_eq!(bfs.level(0), Some(0));

    let paths = run.report().shortest_paths().as_ref().map_err(Clone::clone)?;
    assert!(paths.converged());
    assert_eq!(paths.distance(0), Some(0));
    for node in graph.component_members(ComponentId::new(0)) {
        assert!(paths.distance(node).is_some());
    }

    let pagerank = run.report().pagerank();
    assert!(pagerank.iterations() <= 100);
    assert!((pagerank.rank_sum() - 1.0).abs() <= 0.001);
    Ok(())
}

#[rstest]
fn reference_shape_runs_with_defaults() -> TestResult {
    let graphmark = GraphmarkBuilder::new().build()?;
    assert_eq!(graphmark.config(), &BenchmarkConfig::default());
    let (graph, report) = graphmark.execute()?.into_parts();
    assert_eq!(graph.node_count(), 100);
    assert_eq!(graph.component_count(), 4);

    let bfs = report.bfs().as_ref().map_err(Clone::clone)?;
    assert!(bfs.rounds() <= 10);
    assert!(bfs.levels().iter().flatten().all(|&level| level <= 10));

    let pagerank = report.pagerank();
    assert!(pagerank.iterations() <= 100);
    if pagerank.status() == PageRankStatus::Converged {
        assert!(pagerank.error() < 0.001);
    }
    Ok(())
}

#[rstest]
fn same_seed_yields_same_graph(small_run_builder: GraphmarkBuilder) -> TestResult {
    let graphmark = small_run_builder.build()?;
    let first = graphmark.generate()?;
    let second = graphmark.generate()?;
    let edges = |graph: &Graph| -> Vec<(usize, usize, i32)> {
        graph
            .edges()
            .map(|(source, edge)| (source, edge.target(), edge.weight()))
            .collect()
    };
    assert_eq!(edges(&first), edges(&second));
    Ok(())
}

#[rstest]
fn build_rejects_source_outside_graph(small_run_builder: GraphmarkBuilder) {
    let err = small_run_builder
        .with_source(10)
        .build()
        .expect_err("node 10 does not exist");
    assert!(matches!(
        err,
        GraphmarkError::InvalidConfig { parameter: "source", .. }
    ));
}
