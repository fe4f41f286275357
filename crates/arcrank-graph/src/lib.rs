//! Evidence-graph container used by `arcrank`.
//!
//! An [`EvidenceGraph`] is a directed multigraph given as an explicit node
//! sequence plus co-indexed edge and weight arrays. The node sequence is part
//! of the contract, not an implementation detail: it fixes the scan order and
//! the tie-break order of the ranking heuristic, so two graphs with the same
//! edges but different node sequences may rank differently.

mod error;
mod graph;

pub use error::{Error, Result};
pub use graph::{Edge, EvidenceGraph};
