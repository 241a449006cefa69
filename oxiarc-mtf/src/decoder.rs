//! Move-to-Front decoder.
//!
//! The decoder turns a stream of rank indices back into bytes: each rank
//! names a symbol by its distance from the front of a recency-ordered list,
//! and decoding a symbol moves it to the front. After a Burrows-Wheeler
//! transform the rank stream is dominated by zeros, which is what the
//! downstream entropy coder exploits.
//!
//! Rather than keeping an actual list in memory, the symbols are stored as a
//! circular, doubly linked chain whose links are positions into fixed-size
//! arrays sized to the alphabet. This avoids per-node allocation and pointer
//! chasing for a structure that never exceeds 256 entries.

use crate::MAX_ALPHABET;
use crate::error::{MtfError, Result};

/// Move-to-front decoder over a bounded byte alphabet.
///
/// The alphabet is fixed at construction; only the recency order of its
/// symbols changes afterwards. `next[i]` and `prev[i]` name the positions
/// that follow and precede position `i` in the current order, and the symbol
/// indexed by `head` is at the front. An 8-bit position index bounds the
/// alphabet to [`MAX_ALPHABET`] symbols.
#[derive(Debug, Clone)]
pub struct MtfDecoder {
    /// Byte value stored at each position of the original alphabet.
    symbols: Vec<u8>,
    /// Position following each position in the current recency order.
    next: Vec<u8>,
    /// Position preceding each position in the current recency order.
    prev: Vec<u8>,
    /// Position currently at the front of the list.
    head: u8,
}

impl MtfDecoder {
    /// Create a decoder with an explicit initial symbol list.
    ///
    /// `symbols` is the initial recency order; index 0 is the front. An
    /// empty alphabet is permitted and yields a decoder usable only for
    /// streams that decode nothing.
    ///
    /// # Panics
    ///
    /// Panics if `symbols` holds more than [`MAX_ALPHABET`] entries. The
    /// alphabet size comes from format constants in a correctly driven
    /// pipeline, so a larger slice is a caller bug, not runtime data.
    pub fn new(symbols: &[u8]) -> Self {
        Self::from_symbols(symbols.to_vec())
    }

    /// Create a decoder with the identity alphabet `0, 1, ..., n - 1`.
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

        let n = symbols.len();
        let mut decoder = Self {
            symbols,
            next: vec![0; n],
            prev: vec![0; n],
            head: 0,
        };
        decoder.thread_list();
        decoder
    }

    /// Thread the initial circular chain in alphabet order.
    fn thread_list(&mut self) {
        let n = self.symbols.len();
        if n == 0 {
            return;
        }

        self.prev[0] = (n - 1) as u8;
        for i in 0..n - 1 {
            self.next[i] = (i + 1) as u8;
            self.prev[i + 1] = i as u8;
        }
        self.next[n - 1] = 0;
    }

    /// Return the symbol at the front of the list without decoding.
    ///
    /// # Panics
    ///
    /// Panics if the alphabet is empty.
    pub fn first(&self) -> u8 {
        self.symbols[self.head as usize]
    }

    /// Decode the symbol at `rank` and move it to the front of the list.
    ///
    /// Rank 0 names the front symbol and leaves the list unchanged. For any
    /// other rank the target is unlinked from its place and relinked
    /// immediately before the head, so the symbol that was at `rank` is at
    /// rank 0 afterwards while all other symbols keep their relative order.
    /// Cost is O(`rank`).
    ///
    /// The caller must guarantee `rank < self.len()`. The chain is circular
    /// and no bounds check is performed: a larger rank silently wraps around
    /// and decodes some other symbol, and a positive multiple of the
    /// alphabet size lands back on the head and degrades the links. Use
    /// [`try_decode`](Self::try_decode) when ranks come from untrusted
    /// input.
    ///
    /// # Panics
    ///
    /// Panics if the alphabet is empty.
    pub fn decode(&mut self, rank: usize) -> u8 {
        // Rank zero dominates BWT output and needs no relinking.
        if rank == 0 {
            return self.symbols[self.head as usize];
        }

        let mut pos = self.head;
        for _ in 0..rank {
            pos = self.next[pos as usize];
        }
        let b = self.symbols[pos as usize];
        let i = pos as usize;

        // Unlink position i, then relink it immediately before the head.
        self.next[self.prev[i] as usize] = self.next[i];
        self.prev[self.next[i] as usize] = self.prev[i];
        self.next[i] = self.head;
        self.prev[i] = self.prev[self.head as usize];
        self.next[self.prev[self.head as usize] as usize] = pos;
        self.prev[self.head as usize] = pos;
        self.head = pos;

        b
    }

    /// Decode the symbol at `rank`, rejecting ranks outside the alphabet.
    ///
    /// Stricter than [`decode`](Self::decode): a rank of `self.len()` or
    /// more returns [`MtfError::InvalidRank`] and leaves the list untouched
    /// instead of wrapping around the circular chain. Never panics; on an
    /// empty alphabet every rank is invalid.
    pub fn try_decode(&mut self, rank: usize) -> Result<u8> {
        if rank >= self.symbols.len() {
            return Err(MtfError::InvalidRank {
                rank,
                alphabet_len: self.symbols.len(),
            });
        }
        Ok(self.decode(rank))
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
        let mut order = Vec::with_capacity(self.symbols.len());
        if self.symbols.is_empty() {
            return order;
        }

        let mut pos = self.head;
        for _ in 0..self.symbols.len() {
            order.push(self.symbols[pos as usize]);
            pos = self.next[pos as usize];
        }
        order
    }
}
