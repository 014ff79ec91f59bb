//! Property checks for the score newtype and the weighted fusion rules.

use proptest::prelude::*;

use tessera_core::config::{QualityWeights, ScoringWeights};
use tessera_core::models::{Score, ScoreBreakdown};

/// All of f64, the non-finite values included.
fn arb_raw() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => any::<f64>(),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn arb_breakdown() -> impl Strategy<Value = ScoreBreakdown> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(k, s, m)| ScoreBreakdown {
        keyword: Score::new(k),
        synonym: Score::new(s),
        semantic: Score::new(m),
    })
}

// ── Construction ──

proptest! {
    #[test]
    fn any_input_lands_in_unit_range(raw in arb_raw()) {
        let score = Score::new(raw);
        prop_assert!(
            (0.0..=1.0).contains(&score.value()),
            "Score::new({}) escaped the unit range: {}",
            raw,
            score.value()
        );
    }

    #[test]
    fn in_band_values_pass_through(raw in 0.0f64..=1.0) {
        prop_assert_eq!(Score::new(raw).value(), raw);
    }

    #[test]
    fn ordering_follows_the_raw_values(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        prop_assert_eq!(a <= b, Score::new(a) <= Score::new(b));
    }
}

// ── Arithmetic ──

proptest! {
    #[test]
    fn arithmetic_never_escapes_the_band(
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        factor in -10.0f64..10.0,
    ) {
        let (a, b) = (Score::new(a), Score::new(b));
        for result in [a + b, a - b, a * factor] {
            prop_assert!(
                (0.0..=1.0).contains(&result.value()),
                "arithmetic produced {}",
                result.value()
            );
        }
    }

    #[test]
    fn max_is_commutative_and_exact(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (sa, sb) = (Score::new(a), Score::new(b));
        prop_assert_eq!(sa.max(sb), sb.max(sa));
        prop_assert_eq!(sa.max(sb).value(), a.max(b));
    }
}

// ── Fusion ──

proptest! {
    #[test]
    fn fused_total_stays_in_unit_range(breakdown in arb_breakdown()) {
        let total = ScoringWeights::default().fuse(&breakdown);
        prop_assert!((0.0..=1.0).contains(&total.value()));
    }

    #[test]
    fn fusion_is_monotone_in_every_dimension(
        breakdown in arb_breakdown(),
        bump in 0.0f64..=1.0,
    ) {
        let weights = ScoringWeights::default();
        let base = weights.fuse(&breakdown);
        let lifted = Score::new(bump);

        for raised in [
            ScoreBreakdown { keyword: breakdown.keyword.max(lifted), ..breakdown },
            ScoreBreakdown { synonym: breakdown.synonym.max(lifted), ..breakdown },
            ScoreBreakdown { semantic: breakdown.semantic.max(lifted), ..breakdown },
        ] {
            prop_assert!(
                weights.fuse(&raised) >= base,
                "raising one dimension lowered the fused total"
            );
        }
    }

    #[test]
    fn combined_quality_stays_in_unit_range(
        relevance in 0.0f64..=1.0,
        completeness in 0.0f64..=1.0,
        accuracy in 0.0f64..=1.0,
        clarity in 0.0f64..=1.0,
    ) {
        let overall = QualityWeights::default().combine(
            Score::new(relevance),
            Score::new(completeness),
            Score::new(accuracy),
            Score::new(clarity),
        );
        prop_assert!((0.0..=1.0).contains(&overall.value()));
    }
}

// ── Serialization ──

proptest! {
    #[test]
    fn json_round_trip_preserves_the_value(raw in 0.0f64..=1.0) {
        let score = Score::new(raw);
        let json = serde_json::to_string(&score).unwrap();
        let back: Score = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, score);
    }
}
