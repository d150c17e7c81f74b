//! Graphlet core library.
//!
//! Single-source shortest paths ([`dijkstra`], [`bellman_ford`]), minimum
//! spanning forests ([`kruskal`]) and the supporting [`DisjointSet`] and
//! [`FenwickTree`] structures. Every entry point borrows its input, owns its
//! working memory and returns a plain result value.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the algorithms emit:
//!
//! - `shortest_path_relaxations` (counter)
//! - `shortest_path_negative_cycles` (counter)
//! - `mst_edges_accepted` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod edge;
mod error;
mod fenwick;
mod mst;
mod shortest_path;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    edge::Edge,
    fenwick::{FenwickError, FenwickErrorCode, FenwickTree},
    mst::{MinimumSpanningForest, MstEdge, MstError, MstErrorCode, kruskal},
    shortest_path::{
        Distances, ShortestPathError, ShortestPathErrorCode, UNREACHABLE, bellman_ford, dijkstra,
    },
};
