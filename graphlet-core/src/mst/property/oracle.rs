//! Prim oracle for MST property verification.
//!
//! Grows a tree from every vertex not yet covered, using a dense
//! minimum-weight matrix. It shares no code or ordering with Kruskal, so
//! only order-independent quantities (total weight, edge and component
//! counts) are compared.

use crate::Edge;

/// Result of the Prim oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct OracleForest {
    /// Total weight of the minimum spanning forest.
    pub total_weight: i128,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with an O(V^2) Prim sweep.
pub(super) fn prim_forest(vertex_count: usize, edges: &[Edge]) -> OracleForest {
    let mut cheapest: Vec<Vec<Option<i64>>> = vec![vec![None; vertex_count]; vertex_count];
    for edge in edges.iter().filter(|edge| !edge.is_self_loop()) {
        let (a, b) = (edge.source(), edge.target());
        let weight = cheapest[a][b].map_or(edge.weight(), |w| w.min(edge.weight()));
        cheapest[a][b] = Some(weight);
        cheapest[b][a] = Some(weight);
    }

    let mut in_tree = vec![false; vertex_count];
    let mut total_weight = 0_i128;
    let mut edge_count = 0;
    let mut component_count = 0;

    for root in 0..vertex_count {
        if in_tree[root] {
            continue;
        }
        component_count += 1;
        let mut best: Vec<Option<i64>> = vec![None; vertex_count];
        best[root] = Some(0);

        loop {
            let next = (0..vertex_count)
                .filter(|&v| !in_tree[v])
                .filter_map(|v| best[v].map(|w| (w, v)))
                .min();
            let Some((weight, vertex)) = next else {
                break;
            };
            in_tree[vertex] = true;
            if vertex != root {
                total_weight += i128::from(weight);
                edge_count += 1;
            }
            for (other, slot) in cheapest[vertex].iter().enumerate() {
                if let Some(w) = *slot {
                    if !in_tree[other] && best[other].is_none_or(|current| w < current) {
                        best[other] = Some(w);
                    }
                }
            }
        }
    }

    OracleForest {
        total_weight,
        edge_count,
        component_count,
    }
}
