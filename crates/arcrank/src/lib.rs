//! Approximate Minimum Feedback Arc Set (MFAS) ordering.
//!
//! Given a directed, edge-weighted evidence graph, [`order`] produces a total
//! ordering of its nodes that keeps most of the edge weight pointing
//! "forward", and [`outlier_weights`] reports the weight of every edge that
//! disagrees with the chosen order. MFAS is NP-hard; this is the greedy
//! source-first / degree-ratio heuristic, trading solution quality for
//! polynomial time on graphs with hundreds to low thousands of nodes.
//!
//! The intended pipeline keeps the original signed graph for outlier scoring
//! and ranks a sign-normalized working copy:
//!
//! ```
//! use arcrank::graph::EvidenceGraph;
//!
//! let mut g: EvidenceGraph<u64> = EvidenceGraph::new();
//! g.add_node(0).add_node(1).add_node(2);
//! g.add_edge(0, 1, 1.0)?;
//! g.add_edge(1, 2, 1.0)?;
//! // Negative weight: evidence that node 0 precedes node 2.
//! g.add_edge(2, 0, -1.5)?;
//!
//! let mut working = g.clone();
//! working.flip_negative_edges();
//! let ordering = arcrank::order(&working);
//! assert_eq!(ordering.nodes_by_rank(), &[0, 1, 2]);
//!
//! let outliers = arcrank::outlier_weights(&g, &ordering)?;
//! assert!(outliers.is_empty());
//! # Ok::<(), arcrank::Error>(())
//! ```

pub use arcrank_graph as graph;

mod error;
mod ordering;
mod outliers;

pub use error::{Error, Result};
pub use ordering::{Ordering, order};
pub use outliers::{OutlierWeights, outlier_weights};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
