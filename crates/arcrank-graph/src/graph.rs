use rustc_hash::FxBuildHasher;
use std::fmt;
use std::hash::Hash;

use crate::error::{Error, Result};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// A directed edge. Direction encodes the evidence "`source` precedes
/// `target`" once the attached weight is nonnegative; with a negative weight
/// the evidence runs the other way until [`EvidenceGraph::flip_negative_edges`]
/// rewrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<K> {
    pub source: K,
    pub target: K,
}

impl<K> Edge<K> {
    pub fn new(source: K, target: K) -> Self {
        Self { source, target }
    }

    pub fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}

/// Directed weighted multigraph over an explicit node sequence.
///
/// Edges and weights are co-indexed parallel arrays; parallel duplicate edges
/// between the same (or reversed) pair are kept, not merged. Every mutation
/// preserves three invariants: `edges.len() == weights.len()`, every edge
/// endpoint is a declared node, and no edge is a self-loop.
pub struct EvidenceGraph<K> {
    nodes: Vec<K>,
    node_index: HashMap<K, usize>,
    edges: Vec<Edge<K>>,
    weights: Vec<f64>,
}

impl<K> Default for EvidenceGraph<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for EvidenceGraph<K>
where
    K: Copy + Eq + Hash,
{
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            node_index: self.node_index.clone(),
            edges: self.edges.clone(),
            weights: self.weights.clone(),
        }
    }
}

impl<K> fmt::Debug for EvidenceGraph<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvidenceGraph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("weights", &self.weights)
            .finish()
    }
}

impl<K> EvidenceGraph<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Builds a graph from caller-owned parallel arrays, validating every
    /// invariant up front so downstream passes never have to re-check them.
    pub fn from_parts(nodes: Vec<K>, edges: Vec<Edge<K>>, weights: Vec<f64>) -> Result<Self> {
        if edges.len() != weights.len() {
            return Err(Error::LengthMismatch {
                edges: edges.len(),
                weights: weights.len(),
            });
        }

        let mut node_index: HashMap<K, usize> = HashMap::with_capacity_and_hasher(
            nodes.len(),
            FxBuildHasher,
        );
        for (i, &node) in nodes.iter().enumerate() {
            if node_index.insert(node, i).is_some() {
                return Err(Error::DuplicateNode {
                    node: format!("{node:?}"),
                });
            }
        }

        for (index, edge) in edges.iter().enumerate() {
            check_edge(&node_index, index, edge)?;
        }

        Ok(Self {
            nodes,
            node_index,
            edges,
            weights,
        })
    }

    /// Appends a node to the sequence. A node that is already present is left
    /// where it first appeared.
    pub fn add_node(&mut self, node: K) -> &mut Self {
        if !self.node_index.contains_key(&node) {
            self.node_index.insert(node, self.nodes.len());
            self.nodes.push(node);
        }
        self
    }

    /// Appends an edge with its weight. Both endpoints must already be
    /// declared, and self-loops are rejected.
    pub fn add_edge(&mut self, source: K, target: K, weight: f64) -> Result<&mut Self> {
        let edge = Edge::new(source, target);
        check_edge(&self.node_index, self.edges.len(), &edge)?;
        self.edges.push(edge);
        self.weights.push(weight);
        Ok(self)
    }

    pub fn has_node(&self, node: K) -> bool {
        self.node_index.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The node sequence, in declaration order.
    pub fn nodes(&self) -> &[K] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge<K>] {
        &self.edges
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Rewrites every negative-weight edge in place: endpoints swap and the
    /// weight is negated, so afterwards all weights are nonnegative and edge
    /// direction uniformly means "source precedes target". Idempotent.
    pub fn flip_negative_edges(&mut self) {
        for (edge, weight) in self.edges.iter_mut().zip(self.weights.iter_mut()) {
            if *weight < 0.0 {
                *edge = edge.reversed();
                *weight = -*weight;
            }
        }
    }

    pub fn is_normalized(&self) -> bool {
        self.weights.iter().all(|&w| w >= 0.0)
    }
}

fn check_edge<K>(node_index: &HashMap<K, usize>, index: usize, edge: &Edge<K>) -> Result<()>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    if edge.source == edge.target {
        return Err(Error::SelfLoop {
            index,
            node: format!("{:?}", edge.source),
        });
    }
    for endpoint in [edge.source, edge.target] {
        if !node_index.contains_key(&endpoint) {
            return Err(Error::UnknownEndpoint {
                index,
                node: format!("{endpoint:?}"),
            });
        }
    }
    Ok(())
}
