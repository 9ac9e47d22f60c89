//! Property tests for sampler invariants.
//!
//! Uses proptest to verify:
//! 1. Normalization: exact percentages sum to 100 and stay within the range
//! 2. Tally shape: every range value is a key and counts sum to `times`
//! 3. Bias monotonicity: more strength never weakens the center against the floor
//! 4. Determinism: the bucket model is a pure function of the configuration
//! 5. Validation: out-of-range configurations are always rejected

use proptest::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rangebias::distribution::{distribution, draw_many_with, draw_with};
use rangebias::{configure, BucketModel, SamplerConfig, SamplerError};

// ── Strategies (proptest) ────────────────────────────────────────────

prop_compose! {
    fn arb_config()(
        min in -1_000i64..1_000,
        width in 1i64..200,
        center_frac in 0.0..=1.0f64,
        strength in 0u32..=100,
        spread in 0u64..300,
        granularity in 10u32..=100,
    ) -> SamplerConfig {
        let max = min + width;
        let center = min + (center_frac * width as f64).round() as i64;
        configure(min, max, center, strength, spread, granularity).unwrap()
    }
}

// ── 1. Normalization ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn percentages_sum_to_hundred(config in arb_config()) {
        let dist = distribution(&config).unwrap();
        let sum: f64 = dist.values().sum();
        prop_assert!((sum - 100.0).abs() < 1e-6, "sum = {}", sum);
    }

    #[test]
    fn percentage_keys_within_range(config in arb_config()) {
        let dist = distribution(&config).unwrap();
        prop_assert!(!dist.is_empty());
        for (&value, &percent) in &dist {
            prop_assert!(value >= config.min && value <= config.max);
            prop_assert!(percent > 0.0);
        }
    }

    /// The center always holds the largest quota.
    #[test]
    fn center_is_mode(config in arb_config()) {
        let model = BucketModel::build(&config).unwrap();
        let center = model.quota(config.center).unwrap();
        prop_assert_eq!(Some(center), model.quotas().iter().copied().max());
    }
}

// ── 2. Tally Shape ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn tally_covers_range_and_sums(config in arb_config(), times in 0u64..2_000, seed in any::<u64>()) {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let counts = draw_many_with(&config, times, &mut rng).unwrap();

        prop_assert_eq!(counts.len() as i64, config.max - config.min + 1);
        prop_assert_eq!(*counts.keys().next().unwrap(), config.min);
        prop_assert_eq!(*counts.keys().last().unwrap(), config.max);
        prop_assert_eq!(counts.values().sum::<u64>(), times);
    }

    /// A value with zero quota is never drawn.
    #[test]
    fn draws_only_reachable_values(config in arb_config(), seed in any::<u64>()) {
        let model = BucketModel::build(&config).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        for _ in 0..50 {
            let value = draw_with(&config, &mut rng).unwrap();
            prop_assert!(model.quota(value).unwrap() > 0);
        }
    }
}

// ── 3. Bias Monotonicity ─────────────────────────────────────────────

proptest! {
    /// Center quota relative to the uniform floor grows with strength.
    ///
    /// Compared by cross-multiplication so a zero floor (strength 100) counts
    /// as an infinite ratio.
    #[test]
    fn stronger_bias_never_weakens_center(
        config in arb_config(),
        low in 0u32..=100,
        high in 0u32..=100,
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let weak = configure(config.min, config.max, config.center, low, config.spread, config.granularity).unwrap();
        let strong = configure(config.min, config.max, config.center, high, config.spread, config.granularity).unwrap();

        let floor = |c: &SamplerConfig| u128::from(c.granularity) * u128::from(100 - c.strength) / 100;
        let weak_center = u128::from(BucketModel::build(&weak).unwrap().quota(config.center).unwrap());
        let strong_center = u128::from(BucketModel::build(&strong).unwrap().quota(config.center).unwrap());

        prop_assert!(
            strong_center * floor(&weak) >= weak_center * floor(&strong),
            "strength {} -> {}: center {} -> {}", low, high, weak_center, strong_center
        );
    }

    #[test]
    fn zero_strength_is_uniform(config in arb_config()) {
        let uniform = configure(config.min, config.max, config.center, 0, config.spread, config.granularity).unwrap();
        let model = BucketModel::build(&uniform).unwrap();
        let granularity = u64::from(config.granularity);
        prop_assert!(model.quotas().iter().all(|&quota| quota == granularity));
    }
}

// ── 4. Determinism ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn model_is_deterministic(config in arb_config()) {
        prop_assert_eq!(BucketModel::build(&config).unwrap(), BucketModel::build(&config).unwrap());
    }

    #[test]
    fn seeded_draws_reproducible(config in arb_config(), seed in any::<u64>()) {
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(seed);
        prop_assert_eq!(
            draw_many_with(&config, 100, &mut rng1).unwrap(),
            draw_many_with(&config, 100, &mut rng2).unwrap()
        );
    }
}

// ── 5. Validation ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn rejects_empty_or_inverted_range(min in -1_000i64..1_000, drop in 0i64..100) {
        let max = min - drop;
        let result = configure(min, max, min, 50, 1, 100);
        prop_assert!(matches!(result, Err(SamplerError::InvalidConfiguration(_))));
    }

    #[test]
    fn rejects_center_outside_range(min in -1_000i64..1_000, width in 1i64..100, past in 1i64..100) {
        let max = min + width;
        prop_assert!(configure(min, max, max + past, 50, 1, 100).is_err());
        prop_assert!(configure(min, max, min - past, 50, 1, 100).is_err());
    }

    #[test]
    fn rejects_granularity_outside_bounds(granularity in prop_oneof![0u32..10, 101u32..10_000]) {
        prop_assert!(configure(1, 10, 5, 50, 1, granularity).is_err());
    }

    #[test]
    fn rejects_strength_above_hundred(strength in 101u32..10_000) {
        prop_assert!(configure(1, 10, 5, strength, 1, 100).is_err());
    }
}
