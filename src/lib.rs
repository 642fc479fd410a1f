//! # Huffman coding
//!
//! *Optimal prefix-free codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code gives `E` a single dot because `E` is common, and `Q` a long
//! dash-dash-dot-dash because it is rare. Huffman coding does the same thing
//! for an arbitrary alphabet, and does it optimally: no other symbol-by-symbol
//! binary code spends fewer bits on the same input.
//!
//! The code is read off a binary tree. Every symbol is a leaf; walking from the
//! root, a left edge writes `0` and a right edge writes `1`. Because symbols only
//! sit at leaves, no code is a prefix of another, and a bitstream can be split
//! back into symbols without any separators.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down splitting, not always optimal
//! 1952  Huffman     Bottom-up greedy merging: optimal prefix codes
//! 1978  Gallager    Sibling property; adaptive Huffman coding
//! 1989  Deflate     Huffman + LZ77 in PKZIP, later gzip and PNG
//! ```
//!
//! ## Mathematical Formulation
//!
//! Given symbols $s_i$ with counts $f_i$, Huffman's algorithm minimises
//! the encoded length
//!
//! ```text
//! L = sum_i f_i * len(code(s_i))
//! ```
//!
//! over all prefix-free binary codes. With $n = \sum_i f_i$ and entropy
//! $H$ (bits per symbol), the result satisfies $nH \le L < n(H + 1)$.
//!
//! ## Construction
//!
//! 1. Count every symbol ([`FrequencyTable`]).
//! 2. Put one leaf per symbol into a min-priority queue keyed on frequency.
//! 3. Pop the two lightest nodes, join them under a new node whose weight is
//!    their sum (first popped on the left), push it back.
//! 4. Stop when one node remains: the root of the [`HuffmanTree`].
//!
//! Huffman trees are not unique when weights tie. Here the queue is a binary
//! heap with a fixed sift order and leaves enter it in order of first
//! occurrence, so the same input always yields the same code (see
//! [`MinQueue`] for the exact order).
//!
//! ## Edge Cases
//!
//! - **Empty input**: no tree root, an empty stream, and decoding gives nothing back.
//! - **One distinct symbol**: the root is a leaf and gets the code `0`, so
//!   `"aaaaaa"` encodes to `000000`.
//! - **Truncated stream**: decoding fails with [`Error::TruncatedStream`]
//!   instead of returning a shortened result.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(S \log S)$ for $S$ distinct symbols.
//! - **Encode**: $O(L)$ code lookups for an input of length $L$.
//! - **Decode**: $O(B)$ tree steps for $B$ bits.
//!
//! ## Example
//!
//! ```
//! let encoded = huffman::encode_str("The bird is the word")?;
//! assert_eq!(
//!     encoded.stream().to_string(),
//!     "1000111111100100001101110000101110110110100011111111001101010011100001"
//! );
//! assert_eq!(encoded.decode_string()?, "The bird is the word");
//! # Ok::<(), huffman::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Gallager, R. G. (1978). "Variations on a Theme by Huffman."

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::fmt::Debug;
use std::hash::Hash;

pub mod bits;
pub mod code;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod queue;
pub mod tree;

pub use bits::EncodedStream;
pub use code::CodeTable;
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use huffman::{
    encode, encode_str, CompressionStats, Encoded, HuffmanDecoder, HuffmanEncoder,
};
pub use queue::MinQueue;
pub use tree::{HuffmanTree, Node};

/// A unit of the coded alphabet.
///
/// Implemented for every type that can key a `HashMap` and be cloned and
/// printed, e.g. `char`, `u8` or `String`.
pub trait Symbol: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Symbol for T {}
