//! Property-based tests for the Kruskal MST implementation.
//!
//! Verifies Kruskal against an independent Prim oracle, validates structural
//! invariants (acyclicity, canonical form, edge count) and checks that
//! repeated runs are identical across graph topologies with varied weight
//! distributions.

mod oracle;
mod strategies;
