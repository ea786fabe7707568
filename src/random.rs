use rand::RngCore;

/// fills buffers with bytes an observer of earlier passes cannot predict
pub trait RandomSource {
    fn fill_random(&mut self, buffer: &mut [u8]);
}

// ThreadRng in production, seeded StdRng in tests
impl<R: RngCore + ?Sized> RandomSource for R {
    fn fill_random(&mut self, buffer: &mut [u8]) {
        self.fill_bytes(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let (mut left, mut right) = ([0u8; 64], [0u8; 64]);

        a.fill_random(&mut left);
        b.fill_random(&mut right);
        assert_eq!(left, right);
    }

    #[test]
    fn test_consecutive_fills_differ() {
        let mut rng = rand::thread_rng();
        let (mut first, mut second) = ([0u8; 64], [0u8; 64]);

        rng.fill_random(&mut first);
        rng.fill_random(&mut second);
        assert_ne!(first, second);
    }
}
