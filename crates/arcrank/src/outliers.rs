//! Outlier-weight extraction from a finalized ordering.

use std::fmt;
use std::hash::Hash;

use arcrank_graph::{Edge, EvidenceGraph};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::error::{Error, Result};
use crate::ordering::Ordering;

/// Accumulated weight of every edge that disagrees with an ordering, keyed by
/// the edge's (source, target) pair as it appears in the graph. Parallel
/// duplicate edges fold into a single entry. Iteration follows first-flagged
/// order.
#[derive(Debug, Clone)]
pub struct OutlierWeights<K>
where
    K: Copy + Eq + Hash,
{
    weights: IndexMap<Edge<K>, f64, FxBuildHasher>,
}

impl<K> OutlierWeights<K>
where
    K: Copy + Eq + Hash,
{
    pub fn weight(&self, source: K, target: K) -> Option<f64> {
        self.weights.get(&Edge::new(source, target)).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Edge<K>, f64)> + '_ {
        self.weights.iter().map(|(&edge, &w)| (edge, w))
    }

    /// Total flagged weight; a cheap quality signal for the ordering itself.
    pub fn total_weight(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Edges whose accumulated weight reaches `threshold`, for downstream
    /// pruning or down-weighting.
    pub fn edges_above(&self, threshold: f64) -> impl Iterator<Item = Edge<K>> + '_ {
        self.weights
            .iter()
            .filter(move |&(_, &w)| w >= threshold)
            .map(|(&edge, _)| edge)
    }
}

/// Flags every edge of the original, still-signed graph whose direction
/// contradicts `ordering`, accumulating its magnitude per (source, target)
/// pair.
///
/// An edge `(u, v)` with weight `w` disagrees when
/// `(rank(v) - rank(u)) * w < 0`. Every endpoint must already be ranked; a
/// lookup miss means graph and ordering do not belong together and is
/// reported as [`Error::MissingRank`]. Inputs are not mutated.
pub fn outlier_weights<K>(
    g: &EvidenceGraph<K>,
    ordering: &Ordering<K>,
) -> Result<OutlierWeights<K>>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    let mut weights: IndexMap<Edge<K>, f64, FxBuildHasher> = IndexMap::default();
    for (index, (edge, &w)) in g.edges().iter().zip(g.weights()).enumerate() {
        let pos_u = rank_or_err(ordering, index, edge.source)?;
        let pos_v = rank_or_err(ordering, index, edge.target)?;
        if (pos_v as f64 - pos_u as f64) * w < 0.0 {
            *weights.entry(*edge).or_insert(0.0) += w.abs();
        }
    }
    Ok(OutlierWeights { weights })
}

fn rank_or_err<K>(ordering: &Ordering<K>, index: usize, node: K) -> Result<usize>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    ordering.rank(node).ok_or_else(|| Error::MissingRank {
        index,
        node: format!("{node:?}"),
    })
}
