//! Huffman encoder and decoder.
//!
//! The encoder concatenates the code of every input symbol; the decoder
//! walks the tree one bit at a time and restarts at the root whenever it
//! lands on a leaf. A code is meaningless without its tree, so the one-shot
//! [`encode`] returns both together as an [`Encoded`].

use log::debug;

use crate::bits::EncodedStream;
use crate::code::CodeTable;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};
use crate::Symbol;

/// Huffman encoder.
#[derive(Debug, Clone)]
pub struct HuffmanEncoder<S> {
    tree: HuffmanTree<S>,
    codes: CodeTable<S>,
}

impl<S: Symbol> HuffmanEncoder<S> {
    /// Create an encoder for an existing tree.
    pub fn new(tree: HuffmanTree<S>) -> Self {
        let codes = tree.code_table();
        Self { tree, codes }
    }

    /// Create an encoder from symbol frequencies.
    pub fn from_frequencies(table: &FrequencyTable<S>) -> Self {
        Self::new(HuffmanTree::from_frequencies(table))
    }

    /// Encode a symbol sequence into a bit stream.
    ///
    /// # Errors
    /// Returns `Error::MissingSymbol` if a symbol has no code in this tree.
    pub fn encode(&self, data: &[S]) -> Result<EncodedStream> {
        let mut stream = EncodedStream::with_capacity(data.len());
        for (index, symbol) in data.iter().enumerate() {
            let code = self
                .codes
                .get(symbol)
                .ok_or(Error::MissingSymbol { index })?;
            stream.extend_from_code(code);
        }
        debug!("encoded {} symbols into {} bits", data.len(), stream.len());
        Ok(stream)
    }

    /// The tree codes are derived from.
    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    /// The symbol-to-code mapping.
    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }

    /// Give up the code table and keep the tree for decoding.
    pub fn into_tree(self) -> HuffmanTree<S> {
        self.tree
    }
}

/// Huffman decoder.
#[derive(Debug, Clone)]
pub struct HuffmanDecoder<S> {
    tree: HuffmanTree<S>,
}

impl<S: Symbol> HuffmanDecoder<S> {
    /// Create a decoder for an existing tree.
    pub fn new(tree: HuffmanTree<S>) -> Self {
        Self { tree }
    }

    /// Create a decoder from symbol frequencies.
    ///
    /// The tree matches the encoder's as long as the table lists the same
    /// counts in the same first-occurrence order.
    pub fn from_frequencies(table: &FrequencyTable<S>) -> Self {
        Self::new(HuffmanTree::from_frequencies(table))
    }

    /// Decode a bit slice (one 0 or 1 per element) into a symbol sequence.
    pub fn decode(&self, bits: &[u8]) -> Result<Vec<S>> {
        decode_bits(&self.tree, bits)
    }

    /// Decode an encoded stream.
    pub fn decode_stream(&self, stream: &EncodedStream) -> Result<Vec<S>> {
        decode_bits(&self.tree, stream.as_bits())
    }

    /// The tree used for decoding.
    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }
}

/// Walk `tree` bit by bit.
///
/// A leaf root has no branches: each `0` emits its symbol and a `1` is an
/// unknown code. Output is only returned when the last bit completes a code.
fn decode_bits<S: Symbol>(tree: &HuffmanTree<S>, bits: &[u8]) -> Result<Vec<S>> {
    let root = match tree.root() {
        Some(root) => root,
        None => {
            crate::bits::check_bits(bits)?;
            if bits.is_empty() {
                return Ok(Vec::new());
            }
            return Err(Error::UnknownCode { position: 0 });
        }
    };

    let mut out = Vec::new();
    let mut curr = root;
    let mut pending = 0;
    for (position, &bit) in bits.iter().enumerate() {
        let next: &Node<S> = match (curr, bit) {
            (_, value) if value > 1 => return Err(Error::InvalidBit { position, value }),
            (Node::Internal { left, .. }, 0) => left,
            (Node::Internal { right, .. }, _) => right,
            (Node::Leaf { .. }, 0) => curr,
            (Node::Leaf { .. }, _) => return Err(Error::UnknownCode { position }),
        };
        pending += 1;

        if let Node::Leaf { symbol, .. } = next {
            out.push(symbol.clone());
            curr = root;
            pending = 0;
        } else {
            curr = next;
        }
    }

    if pending > 0 {
        return Err(Error::TruncatedStream { pending });
    }
    debug!("decoded {} bits into {} symbols", bits.len(), out.len());
    Ok(out)
}

/// Size summary of an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Symbols in the original input.
    pub symbols: u64,
    /// Distinct symbols (leaves in the tree).
    pub distinct: usize,
    /// Length of the encoded stream in bits.
    pub bits: usize,
    /// Bytes needed to store the stream packed eight bits per byte.
    pub bytes: usize,
}

impl CompressionStats {
    /// Average code length.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.symbols == 0 {
            return 0.0;
        }
        self.bits as f64 / self.symbols as f64
    }
}

/// An encoded stream together with the tree needed to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded<S> {
    tree: HuffmanTree<S>,
    stream: EncodedStream,
}

impl<S: Symbol> Encoded<S> {
    /// Reconstruct the original sequence.
    pub fn decode(&self) -> Result<Vec<S>> {
        decode_bits(&self.tree, self.stream.as_bits())
    }

    /// Size summary.
    pub fn stats(&self) -> CompressionStats {
        CompressionStats {
            symbols: self.tree.weight(),
            distinct: self.tree.symbol_count(),
            bits: self.stream.len(),
            bytes: self.stream.byte_len(),
        }
    }
}

impl<S> Encoded<S> {
    /// The tree built for the input.
    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    /// The encoded bits.
    pub fn stream(&self) -> &EncodedStream {
        &self.stream
    }

    /// Split into tree and stream.
    pub fn into_parts(self) -> (HuffmanTree<S>, EncodedStream) {
        (self.tree, self.stream)
    }
}

impl Encoded<char> {
    /// Decode back into a string.
    pub fn decode_string(&self) -> Result<String> {
        Ok(self.decode()?.into_iter().collect())
    }
}

/// Count, build the tree and encode in one pass.
///
/// Empty input gives an empty tree and an empty stream.
pub fn encode<S: Symbol>(data: &[S]) -> Result<Encoded<S>> {
    let freqs = FrequencyTable::from_symbols(data.iter().cloned());
    let encoder = HuffmanEncoder::from_frequencies(&freqs);
    let stream = encoder.encode(data)?;
    Ok(Encoded {
        tree: encoder.into_tree(),
        stream,
    })
}

/// [`encode`] the characters of a string.
pub fn encode_str(text: &str) -> Result<Encoded<char>> {
    let chars: Vec<char> = text.chars().collect();
    encode(&chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = "The bird is the word";
    const SENTENCE_BITS: &str =
        "1000111111100100001101110000101110110110100011111111001101010011100001";

    #[test]
    fn test_reference_sentence() {
        let encoded = encode_str(SENTENCE).unwrap();
        assert_eq!(encoded.stream().to_string(), SENTENCE_BITS);
        assert_eq!(encoded.decode_string().unwrap(), SENTENCE);
    }

    #[test]
    fn test_reference_bits_decode_with_rebuilt_tree() {
        let chars: Vec<char> = SENTENCE.chars().collect();
        let decoder = HuffmanDecoder::new(HuffmanTree::from_symbols(&chars));
        let stream: EncodedStream = SENTENCE_BITS.parse().unwrap();
        let decoded: String = decoder.decode_stream(&stream).unwrap().into_iter().collect();
        assert_eq!(decoded, SENTENCE);
    }

    #[test]
    fn test_single_symbol_one_bit_per_occurrence() {
        let encoded = encode_str("aaaaaa").unwrap();
        assert_eq!(encoded.stream().to_string(), "000000");
        assert_eq!(encoded.decode_string().unwrap(), "aaaaaa");
    }

    #[test]
    fn test_single_character() {
        let encoded = encode_str("A").unwrap();
        assert_eq!(encoded.stream().to_string(), "0");
        assert_eq!(encoded.decode_string().unwrap(), "A");
    }

    #[test]
    fn test_empty_input() {
        let encoded = encode_str("").unwrap();
        assert!(encoded.tree().is_empty());
        assert!(encoded.stream().is_empty());
        assert_eq!(encoded.decode_string().unwrap(), "");
        assert_eq!(encoded.stats().bits_per_symbol(), 0.0);
    }

    #[test]
    fn test_empty_tree_rejects_bits() {
        let decoder = HuffmanDecoder::new(HuffmanTree::<char>::from_symbols(&[]));
        assert_eq!(decoder.decode(&[]).unwrap(), Vec::<char>::new());
        assert_eq!(
            decoder.decode(&[0]).unwrap_err(),
            Error::UnknownCode { position: 0 }
        );
        assert_eq!(
            decoder.decode(&[3]).unwrap_err(),
            Error::InvalidBit { position: 0, value: 3 }
        );
    }

    #[test]
    fn test_truncated_stream() {
        let encoded = encode_str(SENTENCE).unwrap();
        let bits = encoded.stream().as_bits();
        // The last code ('d') is three bits long.
        let decoder = HuffmanDecoder::new(encoded.tree().clone());
        assert_eq!(
            decoder.decode(&bits[..bits.len() - 1]).unwrap_err(),
            Error::TruncatedStream { pending: 2 }
        );
        assert_eq!(
            decoder.decode(&bits[..1]).unwrap_err(),
            Error::TruncatedStream { pending: 1 }
        );
    }

    #[test]
    fn test_invalid_bit_value() {
        let encoded = encode_str("ab").unwrap();
        let decoder = HuffmanDecoder::new(encoded.tree().clone());
        assert_eq!(
            decoder.decode(&[0, 1, 2]).unwrap_err(),
            Error::InvalidBit { position: 2, value: 2 }
        );
    }

    #[test]
    fn test_leaf_root_rejects_one_bit() {
        let encoded = encode_str("zzz").unwrap();
        let decoder = HuffmanDecoder::new(encoded.tree().clone());
        assert_eq!(decoder.decode(&[0, 0]).unwrap(), vec!['z', 'z']);
        assert_eq!(
            decoder.decode(&[0, 1]).unwrap_err(),
            Error::UnknownCode { position: 1 }
        );
    }

    #[test]
    fn test_missing_symbol() {
        let encoder = HuffmanEncoder::new(HuffmanTree::from_symbols(&['a', 'b']));
        assert_eq!(
            encoder.encode(&['a', 'c']).unwrap_err(),
            Error::MissingSymbol { index: 1 }
        );
    }

    #[test]
    fn test_encoder_decoder_from_frequencies() {
        let data = b"abracadabra";
        let freqs = FrequencyTable::from_symbols(data.iter().copied());

        let encoder = HuffmanEncoder::from_frequencies(&freqs);
        let bits = encoder.encode(data).unwrap();
        assert_eq!(bits.to_string(), "01111100100010101111100");

        let decoder = HuffmanDecoder::from_frequencies(&freqs);
        assert_eq!(decoder.decode_stream(&bits).unwrap(), data.to_vec());
    }

    #[test]
    fn test_roundtrip_with_huge_counts() {
        let freqs = FrequencyTable::from_counts(vec![('a', u64::MAX), ('b', u64::MAX), ('c', 3)]);
        let encoder = HuffmanEncoder::from_frequencies(&freqs);
        let data = ['a', 'c', 'b', 'a'];
        let stream = encoder.encode(&data).unwrap();
        let decoder = HuffmanDecoder::new(encoder.into_tree());
        assert_eq!(decoder.decode_stream(&stream).unwrap(), data.to_vec());
    }

    #[test]
    fn test_stats() {
        let stats = encode_str(SENTENCE).unwrap().stats();
        assert_eq!(
            stats,
            CompressionStats {
                symbols: 20,
                distinct: 12,
                bits: 70,
                bytes: 9,
            }
        );
        assert!((stats.bits_per_symbol() - 3.5).abs() < 1e-12);
    }
}
