//! Truth values and the NAL truth functions the rewrite cascade needs.
//!
//! A truth value is a `(frequency, confidence)` pair. Only two operations
//! ever combine them during translation:
//!
//! - **Deduction** discounts the running truth of a sentence each time a
//!   rewrite rule fires, using the rule's own truth as the second premise.
//! - **Revision** merges the truth of a freshly induced grammar rule with
//!   an identical rule learned earlier, accumulating evidence.
//!
//! Conversions between confidence and evidential weight use an evidential
//! horizon of 1, so `w = c / (1 - c)` and `c = w / (w + 1)`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound for confidence after revision.
pub const MAX_REVISED_CONFIDENCE: f64 = 0.99;

/// A `(frequency, confidence)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Truth {
    /// Degree to which the evidence supports the statement, in `[0, 1]`.
    pub frequency: f64,
    /// Stability of the frequency estimate, in `[0, 1)`.
    pub confidence: f64,
}

impl Truth {
    pub const fn new(frequency: f64, confidence: f64) -> Self {
        Truth {
            frequency,
            confidence,
        }
    }

    /// The truth every sentence starts from before any rule fires.
    pub const fn input() -> Self {
        Truth::new(1.0, 0.9)
    }

    /// The truth of a grammar rule the first time it is induced.
    pub const fn induced() -> Self {
        Truth::new(1.0, 0.45)
    }

    /// Expected frequency, pulled towards 0.5 by low confidence.
    pub fn expectation(&self) -> f64 {
        expectation(*self)
    }

    /// Deduce `self` through `rule`.
    pub fn deduce(&self, rule: Truth) -> Truth {
        deduction(*self, rule)
    }

    /// Merge `self` with independent evidence about the same thing.
    pub fn revise(&self, other: Truth) -> Truth {
        revision(*self, other)
    }
}

/// Renders as the `{frequency confidence}` suffix the reasoning engine
/// accepts. Integral values keep their trailing `.0` (`{1.0 0.891}`).
impl fmt::Display for Truth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?} {:?}}}", self.frequency, self.confidence)
    }
}

/// `(f1*f2, f1*f2*c1*c2)`
pub fn deduction(a: Truth, b: Truth) -> Truth {
    Truth {
        frequency: a.frequency * b.frequency,
        confidence: a.frequency * b.frequency * a.confidence * b.confidence,
    }
}

pub fn weight_from_confidence(confidence: f64) -> f64 {
    confidence / (1.0 - confidence)
}

pub fn confidence_from_weight(weight: f64) -> f64 {
    weight / (weight + 1.0)
}

pub fn expectation(truth: Truth) -> f64 {
    truth.confidence * (truth.frequency - 0.5) + 0.5
}

/// Weighted average of the frequencies, confidence from the pooled weight.
///
/// The revised confidence never drops below either premise and never
/// exceeds [`MAX_REVISED_CONFIDENCE`].
pub fn revision(a: Truth, b: Truth) -> Truth {
    let w1 = weight_from_confidence(a.confidence);
    let w2 = weight_from_confidence(b.confidence);
    let w = w1 + w2;
    let frequency = ((w1 * a.frequency + w2 * b.frequency) / w).clamp(0.0, 1.0);
    let confidence = MAX_REVISED_CONFIDENCE.min(
        confidence_from_weight(w)
            .max(a.confidence)
            .max(b.confidence),
    );
    Truth {
        frequency,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn deduction_of_certain_premises_is_certain() {
        let certain = Truth::new(1.0, 1.0);
        assert_eq!(deduction(certain, certain), certain);
    }

    #[test]
    fn deduction_discounts_by_rule_truth() {
        let t = deduction(Truth::input(), Truth::new(1.0, 0.99));
        assert_eq!(t, Truth::new(1.0, 0.891));

        let t = deduction(Truth::new(0.5, 0.8), Truth::new(0.5, 0.5));
        assert!(close(t.frequency, 0.25));
        assert!(close(t.confidence, 0.1));
    }

    #[test]
    fn weight_conversions_invert_each_other() {
        assert!(close(weight_from_confidence(0.5), 1.0));
        assert!(close(weight_from_confidence(0.9), 9.0));
        assert!(close(confidence_from_weight(1.0), 0.5));
        assert!(close(confidence_from_weight(weight_from_confidence(0.45)), 0.45));
    }

    #[test]
    fn expectation_values() {
        assert!(close(expectation(Truth::new(1.0, 0.9)), 0.95));
        assert!(close(expectation(Truth::new(0.0, 0.9)), 0.05));
        assert!(close(expectation(Truth::new(1.0, 0.45)), 0.725));
    }

    #[test]
    fn revision_of_two_induced_rules() {
        let revised = revision(Truth::induced(), Truth::induced());
        assert!(close(revised.frequency, 1.0));
        assert!(close(revised.confidence, 0.6206896551724138));
    }

    #[test]
    fn revision_increases_confidence() {
        let belief = Truth::new(1.0, 0.9);
        let revised = revision(belief, belief);
        assert!(revised.confidence > 0.9);
        assert!(close(revised.confidence, 18.0 / 19.0));
    }

    #[test]
    fn revision_caps_confidence() {
        let revised = revision(Truth::new(1.0, 0.995), Truth::new(1.0, 0.995));
        assert_eq!(revised.confidence, MAX_REVISED_CONFIDENCE);
    }

    #[test]
    fn revision_weights_frequencies_by_evidence() {
        let revised = revision(Truth::new(1.0, 0.9), Truth::new(0.0, 0.5));
        assert!(close(revised.frequency, 0.9));
    }

    #[test]
    fn display_matches_engine_suffix() {
        assert_eq!(Truth::new(1.0, 0.891).to_string(), "{1.0 0.891}");
        assert_eq!(Truth::new(0.0, 0.45).to_string(), "{0.0 0.45}");
    }

    proptest! {
        #[test]
        fn expectation_of_half_frequency_is_half(c in 0.0f64..1.0) {
            prop_assert!(close(expectation(Truth::new(0.5, c)), 0.5));
        }

        #[test]
        fn revised_confidence_is_bounded(
            f1 in 0.0f64..=1.0, c1 in 0.01f64..0.99,
            f2 in 0.0f64..=1.0, c2 in 0.01f64..0.99,
        ) {
            let revised = revision(Truth::new(f1, c1), Truth::new(f2, c2));
            prop_assert!(revised.confidence <= MAX_REVISED_CONFIDENCE);
            prop_assert!(revised.confidence >= c1.min(MAX_REVISED_CONFIDENCE));
            prop_assert!(revised.confidence >= c2.min(MAX_REVISED_CONFIDENCE));
            prop_assert!((0.0..=1.0).contains(&revised.frequency));
        }
    }
}
