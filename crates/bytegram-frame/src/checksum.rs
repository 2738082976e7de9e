//! Chainable 8-bit integrity checksum.

/// Fold a byte slice into an 8-bit checksum, starting from `seed`.
///
/// Each byte advances the state as `cs = (cs ^ byte) + 1` (wrapping).
/// The function is deterministic and order-dependent, and it chains:
/// seeding a later range with an earlier range's result gives the same
/// value as one pass over the concatenation. An empty slice returns
/// the seed.
///
/// Wire compatibility requires this exact fold — do not substitute a
/// CRC.
pub fn checksum(data: &[u8], seed: u8) -> u8 {
    data.iter()
        .fold(seed, |cs, &byte| (cs ^ byte).wrapping_add(1))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_slice_returns_seed() {
        assert_eq!(checksum(&[], 0), 0);
        assert_eq!(checksum(&[], 0xA7), 0xA7);
    }

    #[test]
    fn known_vectors() {
        // Header bytes of the canonical 3-byte-payload frame.
        assert_eq!(checksum(&[0x55], 0), 0x56);
        assert_eq!(checksum(&[0x55, 0x07], 0), 0x52);
    }

    #[test]
    fn order_dependent() {
        assert_ne!(checksum(&[0x01, 0x02], 0), checksum(&[0x02, 0x01], 0));
    }

    #[test]
    fn wraps_at_byte_boundary() {
        // 0xFF ^ 0 = 0xFF, + 1 wraps to 0.
        assert_eq!(checksum(&[0xFF], 0), 0x00);
    }

    proptest! {
        #[test]
        fn chaining_matches_single_pass(
            a in proptest::collection::vec(any::<u8>(), 0..32),
            b in proptest::collection::vec(any::<u8>(), 0..32),
            seed in any::<u8>(),
        ) {
            let mut joined = a.clone();
            joined.extend_from_slice(&b);
            prop_assert_eq!(
                checksum(&joined, seed),
                checksum(&b, checksum(&a, seed))
            );
        }

        #[test]
        fn single_byte_change_changes_result(
            data in proptest::collection::vec(any::<u8>(), 1..32),
            index in any::<proptest::sample::Index>(),
            flip in 1..=255u8,
        ) {
            let index = index.index(data.len());
            let mut mutated = data.clone();
            mutated[index] ^= flip;
            // Each fold step is a bijection of the running state, so a
            // change in any input byte always reaches the output.
            prop_assert_ne!(checksum(&data, 0), checksum(&mutated, 0));
        }
    }
}
