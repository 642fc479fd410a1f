//! Encoded bit sequences.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An ordered sequence of bits, one `u8` (0 or 1) per bit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EncodedStream {
    bits: Vec<u8>,
}

impl EncodedStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create an empty stream with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    /// Wrap a bit vector, checking every element is 0 or 1.
    pub fn from_bits(bits: Vec<u8>) -> Result<Self> {
        check_bits(&bits)?;
        Ok(Self { bits })
    }

    /// Append a code. Callers guarantee `code` holds only 0 and 1.
    pub(crate) fn extend_from_code(&mut self, code: &[u8]) {
        self.bits.extend_from_slice(code);
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if the stream holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits as a slice.
    pub fn as_bits(&self) -> &[u8] {
        &self.bits
    }

    /// Consume the stream, returning its bits.
    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }

    /// Pack the bits MSB-first into bytes, zero-padding the last byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | (bit << (7 - i)))
            })
            .collect()
    }

    /// Number of bytes [`to_bytes`](Self::to_bytes) produces.
    pub fn byte_len(&self) -> usize {
        self.bits.len().div_ceil(8)
    }
}

/// Reject any element that is not 0 or 1.
pub(crate) fn check_bits(bits: &[u8]) -> Result<()> {
    match bits.iter().position(|&b| b > 1) {
        Some(position) => Err(Error::InvalidBit {
            position,
            value: bits[position],
        }),
        None => Ok(()),
    }
}

impl fmt::Display for EncodedStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self
            .bits
            .iter()
            .map(|&b| if b == 0 { '0' } else { '1' })
            .collect();
        f.write_str(&text)
    }
}

impl FromStr for EncodedStream {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                found => Err(Error::InvalidDigit { position, found }),
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { bits })
    }
}

impl AsRef<[u8]> for EncodedStream {
    fn as_ref(&self) -> &[u8] {
        &self.bits
    }
}

impl TryFrom<Vec<u8>> for EncodedStream {
    type Error = Error;

    fn try_from(bits: Vec<u8>) -> Result<Self> {
        Self::from_bits(bits)
    }
}
