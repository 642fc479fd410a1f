//! Symbol-to-code mapping derived from a [`HuffmanTree`].

use std::collections::HashMap;

use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};
use crate::Symbol;

/// Code table: symbol -> bit sequence (each element 0 or 1).
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    codes: HashMap<S, Vec<u8>>,
}

impl<S: Symbol> CodeTable<S> {
    /// Walk the tree, appending 0 for left edges and 1 for right edges.
    ///
    /// A tree whose root is a leaf assigns that symbol the code `0`.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut codes = HashMap::with_capacity(tree.symbol_count());
        if let Some(root) = tree.root() {
            Self::build_codes(root, Vec::new(), &mut codes);
        }
        Self { codes }
    }

    fn build_codes(node: &Node<S>, prefix: Vec<u8>, codes: &mut HashMap<S, Vec<u8>>) {
        match node {
            Node::Leaf { symbol, .. } => {
                let code = if prefix.is_empty() { vec![0] } else { prefix };
                codes.insert(symbol.clone(), code);
            }
            Node::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push(0);
                Self::build_codes(left, left_prefix, codes);

                let mut right_prefix = prefix;
                right_prefix.push(1);
                Self::build_codes(right, right_prefix, codes);
            }
        }
    }

    /// The code for `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&[u8]> {
        self.codes.get(symbol).map(Vec::as_slice)
    }

    /// The code for `symbol` as a string of '0' and '1'.
    pub fn code_string(&self, symbol: &S) -> Option<String> {
        self.get(symbol)
            .map(|code| code.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect())
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if there are no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All `(symbol, code)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &[u8])> + '_ {
        self.codes.iter().map(|(s, c)| (s, c.as_slice()))
    }

    /// True if no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&[u8]> = self.codes.values().map(Vec::as_slice).collect();
        // After sorting, a prefix sorts directly before some code it prefixes.
        codes.sort_unstable();
        codes.windows(2).all(|w| !w[1].starts_with(w[0]))
    }

    /// Bits needed to encode every occurrence counted in `table`.
    ///
    /// Symbols missing from this table are ignored.
    pub fn encoded_len(&self, table: &FrequencyTable<S>) -> u64 {
        table
            .iter()
            .filter_map(|(s, n)| self.get(s).map(|code| code.len() as u64 * n))
            .sum()
    }
}
