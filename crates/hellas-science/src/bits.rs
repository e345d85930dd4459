//! Bit helpers

/// Errors from bit manipulation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BitError {
    /// Offset does not fit the integer width
    #[error("bit offset {offset} out of range for {bits}-bit value")]
    OffsetOutOfRange {
        /// Requested bit
        offset: u32,
        /// Width of the value
        bits: u32,
    },
}

/// Set the bit at `offset` in `value`
///
/// # Errors
/// Returns [`BitError::OffsetOutOfRange`] if `offset >= 64`
///
/// # Example
/// ```rust
/// use hellas_science::bit_set;
///
/// assert_eq!(bit_set(2, 0).unwrap(), 4);
/// assert_eq!(bit_set(2, 4).unwrap(), 4);
/// assert_eq!(bit_set(16, 0).unwrap(), 0b1_0000_0000_0000_0000);
/// ```
pub fn bit_set(offset: u32, value: u64) -> Result<u64, BitError> {
    1u64.checked_shl(offset)
        .map(|bit| value | bit)
        .ok_or(BitError::OffsetOutOfRange {
            offset,
            bits: u64::BITS,
        })
}

/// Number of bits set to one
#[inline]
#[must_use]
pub const fn bits_count(value: u64) -> u32 {
    value.count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_bits() {
        assert_eq!(bits_count(1_234_567), 11);
        assert_eq!(bits_count(0), 0);
        assert_eq!(bits_count(u64::MAX), 64);
    }

    #[test]
    fn highest_bit() {
        assert_eq!(bit_set(63, 0).unwrap(), 1 << 63);
    }

    #[test]
    fn offset_out_of_range() {
        assert_eq!(
            bit_set(64, 0),
            Err(BitError::OffsetOutOfRange { offset: 64, bits: 64 })
        );
    }
}
