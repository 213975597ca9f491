use rand::Rng;

/// Draws a 6-digit join code not already in `owned`.
///
/// Only the calling instructor's codes are checked; another instructor may hold the same code.
pub fn generate_class_code<R: Rng + ?Sized>(owned: &[String], rng: &mut R) -> String {
    loop {
        let code = rng.gen_range(100_000..=999_999u32).to_string();
        if !owned.iter().any(|c| c == &code) {
            return code;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_code_is_six_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let code = generate_class_code(&[], &mut rng);
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            assert!(!code.starts_with('0'));
        }
    }

    #[test]
    fn test_code_skips_owned_codes() {
        // Replay the same stream to learn which codes it yields, then own them.
        let mut rng = StdRng::seed_from_u64(11);
        let owned: Vec<String> = (0..5)
            .map(|_| rng.gen_range(100_000..=999_999u32).to_string())
            .collect();

        let mut rng = StdRng::seed_from_u64(11);
        let code = generate_class_code(&owned, &mut rng);
        assert!(!owned.contains(&code));
    }
}
