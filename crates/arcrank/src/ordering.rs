//! Greedy MFAS ordering heuristic.
//!
//! Ranks nodes one per round: any node whose residual in-weight has dropped
//! to (effectively) zero is a source and wins immediately; otherwise the node
//! with the best residual out/in ratio wins. Retiring the winner subtracts
//! its edge weights from its neighbors' residual degrees, which is what
//! steers later rounds. The scan order and every tie-break come from the
//! graph's explicit node sequence, never from hash-map iteration.

use std::fmt;
use std::hash::Hash;

use arcrank_graph::EvidenceGraph;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::trace;

use crate::error::Result;

/// Residual in-weight below this is treated as an exact zero by the source
/// test. Changing it changes which node wins a round.
const SOURCE_EPS: f64 = 1e-8;

/// A bijection from every node of a graph to a unique rank in `[0, n-1]`.
/// Immutable once produced.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Ordering<K>
where
    K: Copy + Eq + Hash,
{
    by_rank: Vec<K>,
    #[serde(skip)]
    rank_of: FxHashMap<K, usize>,
}

impl<K> PartialEq for Ordering<K>
where
    K: Copy + Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.by_rank == other.by_rank
    }
}

impl<K> Ordering<K>
where
    K: Copy + Eq + Hash,
{
    /// Builds an ordering from a rank-ordered node list (rank 0 first).
    /// Fails on repeated nodes, which would break the bijection.
    pub fn from_rank_list(by_rank: Vec<K>) -> Result<Self>
    where
        K: fmt::Debug,
    {
        let mut rank_of: FxHashMap<K, usize> =
            FxHashMap::with_capacity_and_hasher(by_rank.len(), Default::default());
        for (rank, &node) in by_rank.iter().enumerate() {
            if rank_of.insert(node, rank).is_some() {
                return Err(arcrank_graph::Error::DuplicateNode {
                    node: format!("{node:?}"),
                }
                .into());
            }
        }
        Ok(Self { by_rank, rank_of })
    }

    pub fn rank(&self, node: K) -> Option<usize> {
        self.rank_of.get(&node).copied()
    }

    pub fn node_at(&self, rank: usize) -> Option<K> {
        self.by_rank.get(rank).copied()
    }

    pub fn len(&self) -> usize {
        self.by_rank.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_rank.is_empty()
    }

    /// Nodes in rank order (rank 0 first).
    pub fn nodes_by_rank(&self) -> &[K] {
        &self.by_rank
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.by_rank
            .iter()
            .copied()
            .enumerate()
            .map(|(rank, node)| (node, rank))
    }
}

impl<K> fmt::Display for Ordering<K>
where
    K: Copy + Eq + Hash + Serialize,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.by_rank).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

enum Pick<K> {
    Source(K),
    Ratio(K, f64),
}

/// Residual degree tables for one ordering pass. Owned by a single [`order`]
/// call, so the heuristic is reentrant.
struct Residuals<K>
where
    K: Copy + Eq + Hash,
{
    in_w: FxHashMap<K, f64>,
    out_w: FxHashMap<K, f64>,
    in_nbrs: FxHashMap<K, Vec<(K, f64)>>,
    out_nbrs: FxHashMap<K, Vec<(K, f64)>>,
}

impl<K> Residuals<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    fn build(g: &EvidenceGraph<K>) -> Self {
        let mut in_w: FxHashMap<K, f64> =
            FxHashMap::with_capacity_and_hasher(g.node_count(), Default::default());
        let mut out_w: FxHashMap<K, f64> =
            FxHashMap::with_capacity_and_hasher(g.node_count(), Default::default());
        for &v in g.nodes() {
            in_w.insert(v, 0.0);
            out_w.insert(v, 0.0);
        }

        let mut in_nbrs: FxHashMap<K, Vec<(K, f64)>> = FxHashMap::default();
        let mut out_nbrs: FxHashMap<K, Vec<(K, f64)>> = FxHashMap::default();
        for (edge, &w) in g.edges().iter().zip(g.weights()) {
            *in_w.entry(edge.target).or_insert(0.0) += w;
            *out_w.entry(edge.source).or_insert(0.0) += w;
            in_nbrs.entry(edge.target).or_default().push((edge.source, w));
            out_nbrs.entry(edge.source).or_default().push((edge.target, w));
        }

        Self {
            in_w,
            out_w,
            in_nbrs,
            out_nbrs,
        }
    }

    /// One selection round. The first unranked node in scan order whose
    /// residual in-weight is effectively zero wins as a source; otherwise the
    /// strict maximum of `(out + 1) / (in + 1)` wins, first seen keeping ties.
    fn select(&self, scan: &[K], rank_of: &FxHashMap<K, usize>) -> Option<Pick<K>> {
        let mut best: Option<(K, f64)> = None;
        for &v in scan {
            if rank_of.contains_key(&v) {
                continue;
            }
            let in_v = self.in_w.get(&v).copied().unwrap_or(0.0);
            if in_v < SOURCE_EPS {
                return Some(Pick::Source(v));
            }
            let out_v = self.out_w.get(&v).copied().unwrap_or(0.0);
            let score = (out_v + 1.0) / (in_v + 1.0);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((v, score)),
            }
        }
        best.map(|(v, score)| Pick::Ratio(v, score))
    }

    /// Removes a freshly ranked node from the residual tables: predecessors
    /// lose its incoming weights from their out-degree, successors lose its
    /// outgoing weights from their in-degree.
    fn retire(&mut self, v: K) {
        if let Some(preds) = self.in_nbrs.get(&v) {
            for &(u, w) in preds {
                if let Some(out) = self.out_w.get_mut(&u) {
                    *out -= w;
                }
            }
        }
        if let Some(succs) = self.out_nbrs.get(&v) {
            for &(s, w) in succs {
                if let Some(inw) = self.in_w.get_mut(&s) {
                    *inw -= w;
                }
            }
        }
    }
}

/// Ranks every node of `g` with the greedy MFAS heuristic.
///
/// Expects nonnegative weights; run
/// [`EvidenceGraph::flip_negative_edges`] first if the evidence is still
/// signed. Terminates in exactly `node_count` selection rounds and returns a
/// bijection from node to rank. Deterministic for a fixed node sequence: two
/// runs over the same graph produce identical orderings. Each round emits a
/// `tracing` trace event; without a subscriber the pass is silent.
pub fn order<K>(g: &EvidenceGraph<K>) -> Ordering<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    let scan = g.nodes();
    let mut residuals = Residuals::build(g);

    let mut by_rank: Vec<K> = Vec::with_capacity(scan.len());
    let mut rank_of: FxHashMap<K, usize> =
        FxHashMap::with_capacity_and_hasher(scan.len(), Default::default());

    for round in 0..scan.len() {
        let choice = match residuals.select(scan, &rank_of) {
            Some(Pick::Source(v)) => {
                trace!(round, node = ?v, kind = "source", "ranked node");
                v
            }
            Some(Pick::Ratio(v, score)) => {
                trace!(round, node = ?v, kind = "ratio", score, "ranked node");
                v
            }
            None => {
                // Should not happen: the ratio score is strictly positive, so
                // a non-empty unranked set always yields a candidate. Take the
                // first unranked node rather than loop forever.
                let Some(v) = scan.iter().copied().find(|v| !rank_of.contains_key(v)) else {
                    break;
                };
                v
            }
        };

        residuals.retire(choice);
        rank_of.insert(choice, by_rank.len());
        by_rank.push(choice);
    }

    Ordering { by_rank, rank_of }
}
