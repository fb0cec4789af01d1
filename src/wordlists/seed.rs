//! Reproducible target selection from seed text
//!
//! The index for a seed is `SHA-1(seed)`, read as one big-endian unsigned
//! integer, modulo the length of the target list. Any implementation using
//! the same list in the same order picks the same word for a seed.

use rand::Rng;
use sha1::{Digest, Sha1};

/// Length of generated seeds
const SEED_LENGTH: usize = 5;

/// Index into a list of `len` words for `seed`
///
/// # Panics
/// Panics if `len` is zero.
///
/// # Examples
/// ```
/// use pbwordle::wordlists::seed_index;
///
/// assert_eq!(seed_index("abc", 7), 4);
/// assert_eq!(seed_index("abc", 7), seed_index("abc", 7));
/// ```
#[must_use]
pub fn seed_index(seed: &str, len: usize) -> usize {
    assert!(len > 0, "cannot select from an empty word list");
    let digest = Sha1::digest(seed.as_bytes());
    let modulus = len as u128;

    // Horner reduction keeps the accumulator below `len`, so the full
    // 160-bit digest never has to be materialized
    let index = digest
        .iter()
        .fold(0u128, |acc, &byte| (acc * 256 + u128::from(byte)) % modulus);

    index as usize
}

/// A random lowercase seed, so unseeded rounds can still be shared
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SEED_LENGTH)
        .map(|_| char::from(rng.random_range(b'a'..=b'z')))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn seed_index_matches_big_integer_modulus() {
        assert_eq!(seed_index("abc", 7), 4);
        assert_eq!(seed_index("abc", 1_000_003), 629_791);
        assert_eq!(seed_index("", 10), 5);
        assert_eq!(seed_index("pbwordle", 5), 4);
    }

    #[test]
    fn seed_index_hashes_utf8_bytes() {
        assert_eq!(seed_index("héllo", 13), 1);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn seed_index_large_modulus() {
        assert_eq!(
            seed_index("abc", 18_446_744_073_709_551_557),
            15_479_046_774_603_278_750
        );
    }

    #[test]
    fn seed_index_single_entry() {
        assert_eq!(seed_index("anything", 1), 0);
    }

    #[test]
    #[should_panic(expected = "empty word list")]
    fn seed_index_empty_list_panics() {
        let _ = seed_index("abc", 0);
    }

    #[test]
    fn random_seed_is_five_lowercase_letters() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let seed = random_seed(&mut rng);
            assert_eq!(seed.len(), SEED_LENGTH);
            assert!(seed.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
