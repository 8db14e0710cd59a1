use crate::domain::constants::{
    BIG_NETWORK_NODES, DEFAULT_MASS, MAX_SIZE, MEDIUM_NETWORK_FLOOR, MEDIUM_NETWORK_MASS,
    NEUTRAL_SIZE,
};
use crate::domain::models::Stats;

/// Maps `volume` linearly from `[stats.min, stats.max]` onto `0..=MAX_SIZE`,
/// truncating toward zero.
pub fn derive_size(volume: u64, stats: &Stats) -> u32 {
    if stats.max <= stats.min {
        return NEUTRAL_SIZE;
    }
    let clamped = volume.clamp(stats.min, stats.max);
    let offset = u128::from(clamped - stats.min);
    let span = u128::from(stats.max - stats.min);
    // offset <= span, so the quotient never exceeds MAX_SIZE.
    (offset * u128::from(MAX_SIZE) / span) as u32
}

pub fn derive_mass(node_count: usize) -> f64 {
    if node_count > MEDIUM_NETWORK_FLOOR && node_count < BIG_NETWORK_NODES {
        MEDIUM_NETWORK_MASS
    } else {
        DEFAULT_MASS
    }
}

pub fn is_big_network(node_count: usize) -> bool {
    node_count >= BIG_NETWORK_NODES
}

#[cfg(test)]
mod tests {
    use super::{derive_mass, derive_size, is_big_network};
    use crate::domain::constants::{MAX_SIZE, NEUTRAL_SIZE};
    use crate::domain::models::Stats;
    use proptest::prelude::*;

    fn stats(min: u64, max: u64) -> Stats {
        Stats { min, max, total: 0 }
    }

    #[test]
    fn size_spans_zero_to_max() {
        let s = stats(100, 300);
        assert_eq!(derive_size(100, &s), 0);
        assert_eq!(derive_size(300, &s), MAX_SIZE);
        assert_eq!(derive_size(200, &s), 6);
    }

    #[test]
    fn size_truncates_toward_zero() {
        // 1/3 * 12 = 4, 2/3 * 12 = 8, 0.999.. * 12 stays below 12
        let s = stats(0, 3);
        assert_eq!(derive_size(1, &s), 4);
        assert_eq!(derive_size(2, &s), 8);
        let s = stats(0, 1000);
        assert_eq!(derive_size(999, &s), 11);
    }

    #[test]
    fn equal_volumes_get_neutral_size() {
        let s = stats(500, 500);
        assert_eq!(derive_size(500, &s), NEUTRAL_SIZE);
        assert_eq!(derive_size(0, &s), NEUTRAL_SIZE);
    }

    #[test]
    fn out_of_range_volume_is_clamped() {
        let s = stats(10, 20);
        assert_eq!(derive_size(0, &s), 0);
        assert_eq!(derive_size(u64::MAX, &s), MAX_SIZE);
    }

    #[test]
    fn mass_is_lighter_only_for_medium_networks() {
        assert_eq!(derive_mass(1), 2.5);
        assert_eq!(derive_mass(30), 2.5);
        assert_eq!(derive_mass(31), 1.5);
        assert_eq!(derive_mass(99), 1.5);
        assert_eq!(derive_mass(100), 2.5);
    }

    #[test]
    fn big_network_threshold() {
        assert!(!is_big_network(99));
        assert!(is_big_network(100));
    }

    proptest! {
        #[test]
        fn size_is_bounded(min in 0u64..1_000_000, span in 0u64..1_000_000, volume in 0u64..3_000_000) {
            let s = stats(min, min + span);
            prop_assert!(derive_size(volume, &s) <= MAX_SIZE);
        }

        #[test]
        fn size_is_monotonic(min in 0u64..1_000_000, span in 1u64..1_000_000, a in 0u64..1_000_000, b in 0u64..1_000_000) {
            let s = stats(min, min + span);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(derive_size(min + lo, &s) <= derive_size(min + hi, &s));
        }
    }
}
