use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded randomness for one engine or match; the seed is kept so a run can be replayed.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.random_range(0..items.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(17);
        let mut b = SessionRng::new(17);
        let xs: Vec<usize> = (0..20).map(|_| a.random_range(0..9)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.random_range(0..9)).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), 17);
    }

    #[test]
    fn test_choose_empty_slice() {
        let mut rng = SessionRng::new(1);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn test_choose_returns_member() {
        let mut rng = SessionRng::new(5);
        let items = [3, 5, 7];
        for _ in 0..50 {
            assert!(items.contains(&rng.choose(&items).unwrap()));
        }
    }
}
