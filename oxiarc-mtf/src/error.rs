//! MTF-specific error types.

use thiserror::Error;

/// MTF encoding/decoding errors.
#[derive(Debug, Error)]
pub enum MtfError {
    /// Rank lies outside the current alphabet.
    #[error("Invalid MTF rank: {rank} (alphabet has {alphabet_len} symbols)")]
    InvalidRank {
        /// The out-of-range rank.
        rank: usize,
        /// Number of symbols in the alphabet.
        alphabet_len: usize,
    },

    /// Byte value not present in the alphabet.
    #[error("Symbol {symbol:#04x} is not in the alphabet")]
    UnknownSymbol {
        /// The offending byte value.
        symbol: u8,
    },
}

/// Result type for MTF operations.
pub type Result<T> = std::result::Result<T, MtfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MtfError::InvalidRank {
            rank: 300,
            alphabet_len: 16,
        };
        assert!(err.to_string().contains("300"));
        assert!(err.to_string().contains("16"));

        let err = MtfError::UnknownSymbol { symbol: 0xAB };
        assert!(err.to_string().contains("0xab"));
    }
}
