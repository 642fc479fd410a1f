//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for encoding and decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bit slice contained a value other than 0 or 1.
    #[error("invalid bit value {value} at position {position}")]
    InvalidBit {
        /// Offset of the offending bit.
        position: usize,
        /// The value that was found.
        value: u8,
    },

    /// A textual bitstring contained a character other than '0' or '1'.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit {
        /// Character offset of the offending digit.
        position: usize,
        /// The character that was found.
        found: char,
    },

    /// A bit leads nowhere in the tree (e.g. any bit against an empty tree).
    #[error("bit at position {position} does not continue any code")]
    UnknownCode {
        /// Offset of the offending bit.
        position: usize,
    },

    /// The stream ended part-way through a code.
    #[error("truncated stream: {pending} trailing bit(s) do not complete a code")]
    TruncatedStream {
        /// Number of bits consumed since the last complete symbol.
        pending: usize,
    },

    /// The encoder met a symbol that has no code.
    #[error("symbol at input index {index} has no code in the table")]
    MissingSymbol {
        /// Offset of the symbol in the input sequence.
        index: usize,
    },
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
