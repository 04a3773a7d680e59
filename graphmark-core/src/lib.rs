//! Graphmark core library.
//!
//! Deterministic synthetic-graph generation plus bounded Bellman-Ford, BFS
//! and PageRank kernels.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod config;
mod error;
mod generator;
mod graph;
mod graphmark;
mod kernels;
mod rng;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::GraphmarkBuilder,
    config::{
        BenchmarkConfig, BfsConfig, DEFAULT_BFS_MAX_ITERATIONS, DEFAULT_COMPONENT_COUNT,
        DEFAULT_EXTRA_INTRA_EDGES_PER_NODE, DEFAULT_MAX_COMPONENT_OUTDEGREE, DEFAULT_MAX_WEIGHT,
        DEFAULT_NODE_COUNT, DEFAULT_PAGERANK_DAMPING, DEFAULT_PAGERANK_MAX_ERROR,
        DEFAULT_PAGERANK_MAX_ITERATIONS, DEFAULT_SEED, GeneratorConfig, PageRankConfig,
    },
    error::{GraphError, GraphErrorCode, GraphmarkError, GraphmarkErrorCode, InvalidEdgeKind, Result},
    generator::generate_graph,
    graph::{ComponentId, Edge, Graph, Weight},
    graphmark::{BenchmarkRun, Graphmark, KernelReport},
    kernels::{
        BfsTraversal, PageRank, PageRankStatus, ShortestPaths, bellman_ford, breadth_first_search,
        pagerank,
    },
    rng::BenchRng,
};
