//! Huffman tree construction.
//!
//! Leaves are pushed into a [`MinQueue`] in first-occurrence order and merged
//! greedily: the two lightest nodes are popped, the first becomes the left
//! child and the second the right child of a new internal node, which goes
//! back into the queue. The last node standing is the root.
//!
//! Two inputs never reach a merge:
//! - no symbols at all gives a tree with no root;
//! - a single distinct symbol gives a root that is itself a leaf. Its code is
//!   `0` (see [`CodeTable`]) so every occurrence still costs one bit.

use std::fmt;

use log::{debug, trace};

use crate::code::CodeTable;
use crate::frequency::FrequencyTable;
use crate::queue::MinQueue;
use crate::Symbol;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    /// A single symbol and its number of occurrences.
    Leaf {
        /// The coded symbol.
        symbol: S,
        /// Occurrences of `symbol`.
        freq: u64,
    },
    /// Two merged subtrees.
    Internal {
        /// Subtree reached by a `0` bit.
        left: Box<Node<S>>,
        /// Subtree reached by a `1` bit.
        right: Box<Node<S>>,
        /// Sum of both children's frequencies, saturating at `u64::MAX`.
        freq: u64,
    },
}

impl<S> Node<S> {
    /// Aggregate frequency of everything under this node.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// True for [`Node::Leaf`].
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn merge(left: Self, right: Self) -> Self {
        let freq = left.freq().saturating_add(right.freq());
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            freq,
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaves() + right.leaves(),
        }
    }
}

/// An immutable Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Option<Node<S>>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build the tree for a frequency table.
    pub fn from_frequencies(table: &FrequencyTable<S>) -> Self {
        let mut queue = MinQueue::with_capacity(table.len(), |a: &Node<S>, b: &Node<S>| {
            a.freq() < b.freq()
        });
        for (symbol, freq) in table.iter() {
            queue.push(Node::Leaf {
                symbol: symbol.clone(),
                freq,
            });
        }

        let root = loop {
            let Some(left) = queue.pop() else {
                break None;
            };
            let Some(right) = queue.pop() else {
                break Some(left);
            };
            let node = Node::merge(left, right);
            trace!("merged subtrees into weight {}", node.freq());
            queue.push(node);
        };

        let tree = Self { root };
        debug!(
            "built huffman tree: {} symbols, weight {}, depth {}",
            tree.symbol_count(),
            tree.weight(),
            tree.depth()
        );
        tree
    }

    /// Count `symbols` and build the tree for them.
    pub fn from_symbols(symbols: &[S]) -> Self {
        Self::from_frequencies(&FrequencyTable::from_symbols(symbols.iter().cloned()))
    }

    /// Derive the code of every symbol in the tree.
    pub fn code_table(&self) -> CodeTable<S> {
        CodeTable::from_tree(self)
    }
}

impl<S> HuffmanTree<S> {
    /// The root node, `None` for a tree built from no symbols.
    pub fn root(&self) -> Option<&Node<S>> {
        self.root.as_ref()
    }

    /// True if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of distinct symbols (leaves).
    pub fn symbol_count(&self) -> usize {
        self.root.as_ref().map_or(0, Node::leaves)
    }

    /// Total number of symbol occurrences the tree was built from.
    pub fn weight(&self) -> u64 {
        self.root.as_ref().map_or(0, Node::freq)
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::depth)
    }
}

impl<S: fmt::Debug> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            None => writeln!(f, "(empty)"),
            Some(root) => write_node(f, root, 0, "root"),
        }
    }
}

fn write_node<S: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<S>,
    depth: usize,
    label: &str,
) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match node {
        Node::Leaf { symbol, freq } => {
            writeln!(f, "{}{} -> leaf {:?} [freq {}]", indent, label, symbol, freq)
        }
        Node::Internal { left, right, freq } => {
            writeln!(f, "{}{} -> internal [freq {}]", indent, label, freq)?;
            write_node(f, left, depth + 1, "0")?;
            write_node(f, right, depth + 1, "1")
        }
    }
}
