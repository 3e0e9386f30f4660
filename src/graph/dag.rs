//! Arena-based DAG over observed board states.
//!
//! Nodes live in a flat `Vec` and are referenced by `NodeId` indices
//! (no reference counting, serializable, cache-friendly). Edges run
//! from more general states to more specific ones: a node's children
//! are supersets of it, its ancestors are subsets. Equal multisets
//! dedup to one node, so the subset relation between distinct nodes is
//! always strict and the graph cannot form a cycle.
//!
//! Purpose: parallel search branches that independently reach
//! overlapping board configurations (two permutations of "two creatures
//! died to two burn spells") produce nodes whose shared structure the
//! graph makes explicit, letting the search collapse redundant
//! re-expansion.

use std::io::Write;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::multiset::CardMultiset;

/// Index-based node reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a node ID from a raw index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One observed board state and its links to more specific states.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphNode {
    cards: CardMultiset,
    /// Direct descendants: minimal known strict supersets.
    children: SmallVec<[NodeId; 4]>,
}

impl GraphNode {
    fn new(cards: CardMultiset) -> Self {
        Self {
            cards,
            children: SmallVec::new(),
        }
    }

    /// The board's card multiset.
    #[must_use]
    pub fn cards(&self) -> &CardMultiset {
        &self.cards
    }

    /// Direct children of this node.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// DAG of board states ordered by the sub-multiset relation.
///
/// ## Example
///
/// ```
/// use ccg_encode::graph::{CardMultiset, CardState, StateGraph};
///
/// let mut graph = StateGraph::new();
/// let a = graph.insert([CardState::new("A")].into_iter().collect());
/// let ab = graph.insert([CardState::new("A"), CardState::new("B")].into_iter().collect());
///
/// // {A, B} is a descendant of {A}.
/// assert!(graph.is_descendant_of(ab, a));
/// assert!(!graph.is_descendant_of(a, ab));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateGraph {
    nodes: Vec<GraphNode>,
    /// Canonical multiset -> node, for dedup on insert.
    #[serde(skip)]
    dedup: FxHashMap<CardMultiset, NodeId>,
}

impl StateGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id.index()]
    }

    /// Iterate over all node IDs in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId::new)
    }

    /// Insert a board state, linking it into the partial order.
    ///
    /// The node is placed as a descendant of every maximal existing
    /// sub-multiset of it and as an ancestor of every minimal existing
    /// super-multiset; direct edges made redundant by the new
    /// intermediate node are removed. A board equal to an existing
    /// node's returns that node's ID.
    pub fn insert(&mut self, cards: CardMultiset) -> NodeId {
        if let Some(&existing) = self.dedup.get(&cards) {
            return existing;
        }

        // Distinct multisets plus dedup make every relation strict.
        let ancestors: Vec<NodeId> = self
            .node_ids()
            .filter(|&id| self.nodes[id.index()].cards.is_subset_of(&cards))
            .collect();
        let descendants: Vec<NodeId> = self
            .node_ids()
            .filter(|&id| cards.is_subset_of(&self.nodes[id.index()].cards))
            .collect();

        let parents: Vec<NodeId> = ancestors
            .iter()
            .copied()
            .filter(|&a| {
                !ancestors.iter().any(|&b| {
                    b != a
                        && self.nodes[a.index()]
                            .cards
                            .is_subset_of(&self.nodes[b.index()].cards)
                })
            })
            .collect();
        let children: Vec<NodeId> = descendants
            .iter()
            .copied()
            .filter(|&d| {
                !descendants.iter().any(|&e| {
                    e != d
                        && self.nodes[e.index()]
                            .cards
                            .is_subset_of(&self.nodes[d.index()].cards)
                })
            })
            .collect();

        let id = NodeId::new(self.nodes.len() as u32);
        let mut node = GraphNode::new(cards.clone());
        node.children.extend(children.iter().copied());
        self.nodes.push(node);
        self.dedup.insert(cards, id);

        for &parent in &parents {
            let parent_node = &mut self.nodes[parent.index()];
            // Drop edges the new node now sits on.
            parent_node.children.retain(|c| !descendants.contains(c));
            parent_node.children.push(id);
        }

        log::trace!(
            "linked state node {} under {} parent(s), over {} child(ren)",
            id.0,
            parents.len(),
            children.len()
        );
        id
    }

    /// Multiplicity-aware descendant test.
    ///
    /// `node` is a descendant of `other` iff `other`'s multiset is a
    /// sub-multiset of `node`'s. Reflexive: every node is a descendant
    /// of itself.
    #[must_use]
    pub fn is_descendant_of(&self, node: NodeId, other: NodeId) -> bool {
        self.nodes[other.index()]
            .cards
            .is_subset_of(&self.nodes[node.index()].cards)
    }

    /// The largest multiset that is simultaneously a sub-multiset of
    /// both nodes' boards: per-element minimum of multiplicities.
    #[must_use]
    pub fn largest_shared_subset(&self, a: NodeId, b: NodeId) -> CardMultiset {
        self.nodes[a.index()]
            .cards
            .intersection(&self.nodes[b.index()].cards)
    }

    /// Compute the largest shared subset of two nodes and insert it,
    /// making it a candidate common ancestor of both.
    pub fn insert_shared_subset(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let shared = self.largest_shared_subset(a, b);
        self.insert(shared)
    }

    /// Nodes with no ancestors in the graph.
    #[must_use]
    pub fn roots(&self) -> Vec<NodeId> {
        let mut has_parent = vec![false; self.nodes.len()];
        for node in &self.nodes {
            for child in &node.children {
                has_parent[child.index()] = true;
            }
        }
        self.node_ids().filter(|id| !has_parent[id.index()]).collect()
    }

    /// Write a depth-indented diagnostic dump of the graph.
    ///
    /// Nodes reachable from several ancestors appear once per path;
    /// the format is for human inspection only.
    pub fn write_graph(&self, writer: &mut impl Write) -> std::io::Result<()> {
        for root in self.roots() {
            self.write_node(writer, root, 0)?;
        }
        Ok(())
    }

    fn write_node(&self, writer: &mut impl Write, id: NodeId, depth: usize) -> std::io::Result<()> {
        let node = &self.nodes[id.index()];
        writeln!(writer, "{}{} {}", "  ".repeat(depth), id.0, node.cards)?;
        for &child in &node.children {
            self.write_node(writer, child, depth + 1)?;
        }
        Ok(())
    }

    /// Rebuild the dedup index after deserialization.
    ///
    /// The index is skipped by serde; call this once on a graph loaded
    /// for offline study before inserting into it again.
    pub fn rebuild_index(&mut self) {
        self.dedup = self
            .node_ids()
            .map(|id| (self.nodes[id.index()].cards.clone(), id))
            .collect();
    }
}
