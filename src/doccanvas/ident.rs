//! Element identifier generation.
//!
//! Element ids are short opaque strings: the current Unix millisecond
//! timestamp in base 36, followed by 7 random base-36 characters. Two
//! elements created in the same millisecond differ in the suffix, which has
//! 36^7 (~78 billion) possible values per millisecond bucket. Uniqueness is
//! only required within one page's element list during one editing session,
//! so this is deliberately not a UUID.
//!
//! Generation never fails and has no dependencies beyond the clock and a
//! random source; [`compose`] takes both as parameters so tests can pin
//! them.

use chrono::Utc;
use rand::Rng;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 7;

/// Generate a fresh element id from the wall clock and thread-local RNG.
pub fn new_id() -> String {
    compose(Utc::now().timestamp_millis(), &mut rand::thread_rng())
}

pub(crate) fn compose<R: Rng>(millis: i64, rng: &mut R) -> String {
    let mut id = to_base36(millis.max(0) as u64);
    for _ in 0..SUFFIX_LEN {
        id.push(ALPHABET[rng.gen_range(0..ALPHABET.len())] as char);
    }
    id
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = [0u8; 13]; // u64::MAX is 13 base-36 digits
    let mut len = 0;
    while n > 0 {
        digits[len] = ALPHABET[(n % 36) as usize];
        n /= 36;
        len += 1;
    }
    digits[..len].iter().rev().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_in_a_tight_loop() {
        let ids: HashSet<String> = (0..1000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn same_millisecond_ids_differ() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = compose(1_700_000_000_000, &mut rng);
        let b = compose(1_700_000_000_000, &mut rng);
        assert_ne!(a, b);
        // Both share the timestamp prefix
        assert_eq!(&a[..a.len() - SUFFIX_LEN], &b[..b.len() - SUFFIX_LEN]);
    }

    #[test]
    fn id_is_base36_with_fixed_suffix_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = compose(1_700_000_000_000, &mut rng);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_eq!(id.len(), to_base36(1_700_000_000_000).len() + SUFFIX_LEN);
    }

    #[test]
    fn base36_renders_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn negative_clock_is_tolerated() {
        let mut rng = StdRng::seed_from_u64(1);
        let id = compose(-5, &mut rng);
        assert_eq!(id.len(), 1 + SUFFIX_LEN);
        assert!(id.starts_with('0'));
    }
}
