//! Move-to-Front encoder.
//!
//! The encoder replaces each byte with its rank in a recency-ordered list
//! and then moves that byte to the front. Runs of a repeated byte therefore
//! turn into runs of zeros, which is what makes MTF output attractive to a
//! downstream entropy coder.

use crate::MAX_ALPHABET;
use crate::error::{MtfError, Result};

/// Move-to-front encoder over a bounded byte alphabet.
///
/// The dual of [`MtfDecoder`](crate::MtfDecoder). The encoder looks symbols
/// up by value rather than by rank, so the recency order is kept as a plain
/// front-to-back list and scanned linearly; frequent symbols sit near the
/// front, keeping the scan short on compressible input.
#[derive(Debug, Clone)]
pub struct MtfEncoder {
    /// Alphabet in current recency order, front first.
    symbols: Vec<u8>,
}

impl MtfEncoder {
    /// Create an encoder with an explicit initial symbol list.
    ///
    /// `symbols` is the initial recency order; index 0 is the front. It must
    /// match the alphabet of the decoder that will consume the ranks.
    ///
    /// # Panics
    ///
    /// Panics if `symbols` holds more than [`MAX_ALPHABET`] entries.
    pub fn new(symbols: &[u8]) -> Self {
        Self::from_symbols(symbols.to_vec())
    }

    /// Create an encoder with the identity alphabet `0, 1, ..., n - 1`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`MAX_ALPHABET`].
    pub fn with_range(n: usize) -> Self {
        Self::from_symbols((0..n).map(|i| i as u8).collect())
    }

    fn from_symbols(symbols: Vec<u8>) -> Self {
        assert!(
            symbols.len() <= MAX_ALPHABET,
            "MTF alphabet limited to {} symbols, got {}",
            MAX_ALPHABET,
            symbols.len()
        );

        Self { symbols }
    }

    /// Return the symbol at the front of the list without encoding.
    ///
    /// # Panics
    ///
    /// Panics if the alphabet is empty.
    pub fn first(&self) -> u8 {
        self.symbols[0]
    }

    /// Encode `byte` as its rank in the current order and move it to the
    /// front.
    ///
    /// Rank 0 means `byte` is already at the front and nothing moves. A byte
    /// that is not part of the alphabet is reported as
    /// [`MtfError::UnknownSymbol`] and the order is left untouched.
    pub fn encode(&mut self, byte: u8) -> Result<usize> {
        let rank = self
            .symbols
            .iter()
            .position(|&b| b == byte)
            .ok_or(MtfError::UnknownSymbol { symbol: byte })?;

        if rank > 0 {
            self.symbols.copy_within(..rank, 1);
            self.symbols[0] = byte;
        }

        Ok(rank)
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in the current recency order, most recent first.
    pub fn recency_order(&self) -> Vec<u8> {
        self.symbols.clone()
    }
}
