//! Property-based tests for the shortest-path entry points.
//!
//! Checks Dijkstra against Bellman-Ford on non-negative graphs, Bellman-Ford
//! against a Floyd-Warshall oracle on signed graphs (including negative-cycle
//! detection), and idempotence of both algorithms.

mod strategies;
