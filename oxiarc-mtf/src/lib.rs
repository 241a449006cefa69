//! Move-to-Front coding for OxiArc.
//!
//! This crate provides the Move-to-Front (MTF) stage used by BWT-based
//! compressors such as BZip2. MTF maintains a list of symbols ordered by
//! recency of use and references each symbol by its rank, the distance from
//! the front of the list. Referencing a symbol moves it to the front, so a
//! repeated symbol is encoded with many zeros; after a Burrows-Wheeler
//! Transform, which clusters similar contexts together, this makes the data
//! highly compressible for the entropy coder that follows:
//!
//! ```text
//! RLE -> BWT -> MTF (this crate) -> Zero-Run RLE -> Huffman
//! ```
//!
//! The crate exposes exactly the MTF stage: [`MtfDecoder`] turns a rank
//! stream back into bytes, [`MtfEncoder`] produces the rank stream, and
//! slice-level helpers wrap both for whole buffers. Block framing,
//! checksums, entropy coding and the inverse BWT belong to the surrounding
//! pipeline, not this crate.
//!
//! The decoder keeps the alphabet as a circular, doubly linked list whose
//! links are positions into fixed-size arrays instead of allocated nodes,
//! so decoding the common rank 0 is a single array read and promotion is a
//! handful of index writes.
//!
//! # Example
//!
//! ```rust
//! use oxiarc_mtf::{MtfDecoder, MtfEncoder};
//!
//! // Rank streams produced by the encoder decode back to the input.
//! let mut encoder = MtfEncoder::with_range(256);
//! let ranks: Vec<usize> = b"banana"
//!     .iter()
//!     .map(|&b| encoder.encode(b).unwrap())
//!     .collect();
//!
//! let mut decoder = MtfDecoder::with_range(256);
//! let decoded: Vec<u8> = ranks.iter().map(|&r| decoder.decode(r)).collect();
//! assert_eq!(decoded, b"banana");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod encoder;
mod error;

pub use decoder::MtfDecoder;
pub use encoder::MtfEncoder;
pub use error::{MtfError, Result};

/// Maximum number of symbols in an MTF alphabet.
///
/// The list links are 8-bit position indices, so the alphabet can never
/// exceed 256 entries.
pub const MAX_ALPHABET: usize = 256;

/// Perform the Move-to-Front transform over the full byte alphabet.
///
/// Every possible byte value is in the initial list (in identity order), so
/// every input byte has a rank and every rank fits in a `u8`.
///
/// # Example
///
/// ```rust
/// // Repeated bytes collapse to zeros after the first occurrence.
/// assert_eq!(oxiarc_mtf::encode(b"aaaa"), vec![97, 0, 0, 0]);
/// ```
pub fn encode(data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut encoder = MtfEncoder::with_range(MAX_ALPHABET);
    data.iter()
        .map(|&byte| {
            let rank = encoder
                .encode(byte)
                .expect("MTF: byte must exist in the full 0-255 alphabet");
            rank as u8
        })
        .collect()
}

/// Perform the inverse Move-to-Front transform over the full byte alphabet.
///
/// The inverse of [`encode`]: a `u8` rank is always within the 256-symbol
/// list, so the transform cannot fail.
///
/// # Example
///
/// ```rust
/// let ranks = oxiarc_mtf::encode(b"abracadabra");
/// assert_eq!(oxiarc_mtf::decode(&ranks), b"abracadabra");
/// ```
pub fn decode(ranks: &[u8]) -> Vec<u8> {
    if ranks.is_empty() {
        return Vec::new();
    }

    let mut decoder = MtfDecoder::with_range(MAX_ALPHABET);
    ranks
        .iter()
        .map(|&rank| decoder.decode(rank as usize))
        .collect()
}

/// Perform the Move-to-Front transform over a restricted alphabet.
///
/// `alphabet` lists the symbols in their initial recency order, the way
/// BZip2 restricts each block to the byte values that actually occur in it.
/// A data byte outside the alphabet is reported as
/// [`MtfError::UnknownSymbol`].
///
/// # Panics
///
/// Panics if `alphabet` holds more than [`MAX_ALPHABET`] entries.
///
/// # Example
///
/// ```rust
/// let ranks = oxiarc_mtf::encode_with_alphabet(b"abab", b"ab").unwrap();
/// assert_eq!(ranks, vec![0, 1, 1, 1]);
/// ```
pub fn encode_with_alphabet(data: &[u8], alphabet: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = MtfEncoder::new(alphabet);
    let mut ranks = Vec::with_capacity(data.len());

    for &byte in data {
        ranks.push(encoder.encode(byte)? as u8);
    }

    Ok(ranks)
}

/// Perform the inverse Move-to-Front transform over a restricted alphabet.
///
/// The inverse of [`encode_with_alphabet`]. Every rank is validated against
/// the alphabet size before use; an out-of-range rank is reported as
/// [`MtfError::InvalidRank`] instead of silently wrapping the circular
/// list, which is the right behavior for rank streams of unknown origin.
///
/// # Panics
///
/// Panics if `alphabet` holds more than [`MAX_ALPHABET`] entries.
///
/// # Example
///
/// ```rust
/// let data = oxiarc_mtf::decode_with_alphabet(&[0, 1, 1, 1], b"ab").unwrap();
/// assert_eq!(data, b"abab");
/// ```
pub fn decode_with_alphabet(ranks: &[u8], alphabet: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = MtfDecoder::new(alphabet);
    let mut data = Vec::with_capacity(ranks.len());

    for &rank in ranks {
        data.push(decoder.try_decode(rank as usize)?);
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mtf_empty() {
        assert!(encode(b"").is_empty());
        assert!(decode(&[]).is_empty());
    }

    #[test]
    fn test_mtf_single() {
        assert_eq!(encode(b"a"), vec![b'a']); // 'a' starts at rank 97
    }

    #[test]
    fn test_mtf_repeated() {
        // Repeated bytes should produce zeros after the first
        assert_eq!(encode(b"aaaa"), vec![b'a', 0, 0, 0]);
    }

    #[test]
    fn test_mtf_roundtrip() {
        let test_cases = [
            b"hello".as_slice(),
            b"banana",
            b"abracadabra",
            b"the quick brown fox",
        ];

        for data in test_cases {
            let ranks = encode(data);
            let recovered = decode(&ranks);
            assert_eq!(recovered, data, "Failed for: {:?}", data);
        }
    }

    #[test]
    fn test_mtf_produces_low_values() {
        // After BWT, similar bytes are grouped, so MTF should produce many
        // low values
        let data = b"bbbbbaaaacccc";
        let ranks = encode(data);

        let zeros = ranks.iter().filter(|&&r| r == 0).count();
        assert!(
            zeros > data.len() / 2,
            "MTF should produce many zeros for runs"
        );
    }

    #[test]
    fn test_mtf_with_alphabet_roundtrip() {
        let data = b"abab";
        let alphabet = b"ab";

        let ranks = encode_with_alphabet(data, alphabet).unwrap();
        // 'a' at rank 0, 'b' at rank 1, then each at rank 1 after the swap
        assert_eq!(ranks, vec![0, 1, 1, 1]);

        let recovered = decode_with_alphabet(&ranks, alphabet).unwrap();
        assert_eq!(recovered, data.as_slice());
    }

    #[test]
    fn test_encode_with_alphabet_unknown_symbol() {
        let result = encode_with_alphabet(b"abz", b"ab");
        assert!(matches!(
            result,
            Err(MtfError::UnknownSymbol { symbol: b'z' })
        ));
    }

    #[test]
    fn test_decode_with_alphabet_invalid_rank() {
        let result = decode_with_alphabet(&[0, 2], b"ab");
        assert!(matches!(
            result,
            Err(MtfError::InvalidRank {
                rank: 2,
                alphabet_len: 2,
            })
        ));
    }

    #[test]
    fn test_decode_with_alphabet_initial_order_matters() {
        // The same ranks decode differently under different initial orders.
        let ranks = [1, 0];
        assert_eq!(decode_with_alphabet(&ranks, b"ab").unwrap(), b"bb");
        assert_eq!(decode_with_alphabet(&ranks, b"ba").unwrap(), b"aa");
    }
}
