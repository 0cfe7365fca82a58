//! Credit limit derivation.
//!
//! Every recorded emotion re-rolls the owning user's credit limit: a fixed
//! base per emotion kind plus a uniform random bonus scaled by intensity.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Mutex, PoisonError};

/// The two accepted emotion categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionKind {
    Positive,
    Negative,
}

impl EmotionKind {
    /// Wire/storage representation ("positive" / "negative").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }

    /// Parse the wire representation. Case-sensitive: anything other than
    /// the two canonical strings is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }

    #[must_use]
    pub const fn base_limit(self) -> f64 {
        match self {
            Self::Positive => 500.0,
            Self::Negative => 100.0,
        }
    }
}

/// Derives credit limits from emotions using an owned random source.
///
/// The source is injected at construction so tests can seed it; production
/// code seeds from OS entropy and there is deliberately no re-seeding hook.
pub struct LimitCalculator {
    rng: Mutex<StdRng>,
}

impl LimitCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Compute a limit for a validated (kind, intensity) pair.
    ///
    /// Result is `base + uniform[0,1) * intensity * 10`, formatted with
    /// exactly two decimal places. Intensity must already be in [1,10].
    #[must_use]
    pub fn compute(&self, kind: EmotionKind, intensity: i32) -> String {
        let roll: f64 = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random();

        let value = kind.base_limit() + roll * f64::from(intensity) * 10.0;
        format!("{value:.2}")
    }
}

impl Default for LimitCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_stays_within_band() {
        let calc = LimitCalculator::with_seed(7);

        for kind in [EmotionKind::Positive, EmotionKind::Negative] {
            for intensity in 1..=10 {
                let value: f64 = calc.compute(kind, intensity).parse().unwrap();
                assert!(value >= kind.base_limit());
                assert!(value < kind.base_limit() + f64::from(intensity) * 10.0);
            }
        }
    }

    #[test]
    fn formats_exactly_two_decimal_places() {
        let calc = LimitCalculator::with_seed(1);

        for intensity in [1, 5, 10] {
            let value = calc.compute(EmotionKind::Positive, intensity);
            let (whole, frac) = value.split_once('.').expect("decimal point");
            assert!(!whole.is_empty());
            assert_eq!(frac.len(), 2);
        }
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let a = LimitCalculator::with_seed(99);
        let b = LimitCalculator::with_seed(99);

        for _ in 0..5 {
            assert_eq!(
                a.compute(EmotionKind::Negative, 4),
                b.compute(EmotionKind::Negative, 4)
            );
        }
    }

    #[test]
    fn parse_rejects_unknown_categories() {
        assert_eq!(EmotionKind::parse("positive"), Some(EmotionKind::Positive));
        assert_eq!(EmotionKind::parse("negative"), Some(EmotionKind::Negative));
        assert_eq!(EmotionKind::parse("neutral"), None);
        assert_eq!(EmotionKind::parse("POSITIVE"), None);
        assert_eq!(EmotionKind::parse(""), None);
    }
}
