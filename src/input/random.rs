// Random array generation

use super::{InputError, MAX_VALUES};
use rand::Rng;
use std::ops::RangeInclusive;

/// Values drawn for random arrays
pub const RANDOM_VALUE_RANGE: RangeInclusive<i32> = 1..=100;

/// Draw `count` values from `rng`; pass a seeded generator for reproducible arrays
pub fn random_values_with<R: Rng>(rng: &mut R, count: usize) -> Result<Vec<i32>, InputError> {
    if count == 0 || count > MAX_VALUES {
        return Err(InputError::InvalidCount {
            count,
            max: MAX_VALUES,
        });
    }
    Ok((0..count)
        .map(|_| rng.random_range(RANDOM_VALUE_RANGE))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_count_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_values_with(&mut rng, 0).is_err());
        assert!(random_values_with(&mut rng, 32).is_err());
        assert_eq!(random_values_with(&mut rng, 31).unwrap().len(), 31);
    }

    #[test]
    fn test_values_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = random_values_with(&mut rng, 20).unwrap();
        assert!(values.iter().all(|v| RANDOM_VALUE_RANGE.contains(v)));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = random_values_with(&mut StdRng::seed_from_u64(3), 10).unwrap();
        let b = random_values_with(&mut StdRng::seed_from_u64(3), 10).unwrap();
        assert_eq!(a, b);
    }
}
