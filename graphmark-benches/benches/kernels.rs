//! Kernel benchmarks over pre-generated graphs.
//!
//! Generation happens during setup so each measurement covers one kernel
//! only.
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use graphmark_benches::{error::BenchSetupError, params::GRAPH_SHAPES};
use graphmark_core::{
    BfsConfig, Graph, GraphmarkBuilder, PageRankConfig, bellman_ford, breadth_first_search,
    pagerank,
};

fn prepared_graphs() -> Result<Vec<(String, Graph)>, BenchSetupError> {
    GRAPH_SHAPES
        .iter()
        .map(|shape| Ok((shape.to_string(), shape.graph()?)))
        .collect()
}

fn kernels_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let graphs = prepared_graphs()?;
    let bfs_config = BfsConfig::default();
    let pagerank_config = PageRankConfig::default();

    let mut group = c.benchmark_group("bellman_ford");
    for (label, graph) in &graphs {
        group.bench_with_input(BenchmarkId::from_parameter(label), graph, |b, graph| {
            b.iter(|| bellman_ford(graph, 0));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("bfs");
    for (label, graph) in &graphs {
        group.bench_with_input(BenchmarkId::from_parameter(label), graph, |b, graph| {
            b.iter(|| breadth_first_search(graph, 0, &bfs_config));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("pagerank");
    for (label, graph) in &graphs {
        group.bench_with_input(BenchmarkId::from_parameter(label), graph, |b, graph| {
            b.iter(|| pagerank(graph, &pagerank_config));
        });
    }
    group.finish();

    let graphmark = GraphmarkBuilder::new().build()?;
    let mut group = c.benchmark_group("run_kernels");
    for (label, graph) in &graphs {
        group.bench_with_input(BenchmarkId::from_parameter(label), graph, |b, graph| {
            b.iter(|| graphmark.run_kernels(graph));
        });
    }
    group.finish();
    Ok(())
}

fn kernels(c: &mut Criterion) {
    if let Err(err) = kernels_impl(c) {
        panic!("kernel benchmark setup failed: {err}");
    }
}

criterion_group!(benches, kernels);
criterion_main!(benches);
