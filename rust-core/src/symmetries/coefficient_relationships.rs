use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::formula::EisensteinTerm;

/// Named relationship between two (term, multiplier) pairs.
///
/// Each relationship is both a transform (build the partner of a term) and a
/// predicate (is this pair the partner of that one). The names read as the
/// partner's powers written in terms of the original `(n, m)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CoefficientRelationship {
    PlusNPlusM,
    PlusMPlusN,
    MinusNMinusM,
    MinusMMinusN,
    PlusMMinusN,
    MinusMPlusN,
    PlusNMinusM,
    MinusNPlusM,
    PlusMMinusSumNAndM,
    MinusSumNAndMPlusN,
    PlusMPlusNNegateMultiplierIfOddPowerSum,
    MinusMMinusNNegateMultiplierIfOddPowerSum,
    PlusNMinusMNegateMultiplierIfOddPowerN,
    MinusNPlusMNegateMultiplierIfOddPowerN,
    PlusNMinusMNegateMultiplierIfOddPowerSum,
    MinusNPlusMNegateMultiplierIfOddPowerSum,
}

/// How the partner's multiplier follows from the original one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MultiplierRule {
    Same,
    NegateIfOddPowerSum,
    NegateIfOddPowerN,
}

impl MultiplierRule {
    fn apply(self, term: &EisensteinTerm, multiplier: Complex64) -> Complex64 {
        let keep = match self {
            MultiplierRule::Same => true,
            MultiplierRule::NegateIfOddPowerSum => term.power_sum_is_even(),
            MultiplierRule::NegateIfOddPowerN => term.power_n_is_even(),
        };
        if keep {
            multiplier
        } else {
            -multiplier
        }
    }
}

impl CoefficientRelationship {
    pub const ALL: [CoefficientRelationship; 16] = [
        CoefficientRelationship::PlusNPlusM,
        CoefficientRelationship::PlusMPlusN,
        CoefficientRelationship::MinusNMinusM,
        CoefficientRelationship::MinusMMinusN,
        CoefficientRelationship::PlusMMinusN,
        CoefficientRelationship::MinusMPlusN,
        CoefficientRelationship::PlusNMinusM,
        CoefficientRelationship::MinusNPlusM,
        CoefficientRelationship::PlusMMinusSumNAndM,
        CoefficientRelationship::MinusSumNAndMPlusN,
        CoefficientRelationship::PlusMPlusNNegateMultiplierIfOddPowerSum,
        CoefficientRelationship::MinusMMinusNNegateMultiplierIfOddPowerSum,
        CoefficientRelationship::PlusNMinusMNegateMultiplierIfOddPowerN,
        CoefficientRelationship::MinusNPlusMNegateMultiplierIfOddPowerN,
        CoefficientRelationship::PlusNMinusMNegateMultiplierIfOddPowerSum,
        CoefficientRelationship::MinusNPlusMNegateMultiplierIfOddPowerSum,
    ];

    /// Powers of the partner term.
    ///
    /// Negation and summing wrap at the `i32` bounds, so `-i32::MIN` is `i32::MIN`.
    pub fn transform_powers(self, term: &EisensteinTerm) -> EisensteinTerm {
        use CoefficientRelationship::*;

        let (n, m) = (term.power_n, term.power_m);
        let (minus_n, minus_m) = (n.wrapping_neg(), m.wrapping_neg());
        let minus_sum = n.wrapping_add(m).wrapping_neg();
        let (power_n, power_m) = match self {
            PlusNPlusM => (n, m),
            PlusMPlusN | PlusMPlusNNegateMultiplierIfOddPowerSum => (m, n),
            MinusNMinusM => (minus_n, minus_m),
            MinusMMinusN | MinusMMinusNNegateMultiplierIfOddPowerSum => (minus_m, minus_n),
            PlusMMinusN => (m, minus_n),
            MinusMPlusN => (minus_m, n),
            PlusNMinusM
            | PlusNMinusMNegateMultiplierIfOddPowerN
            | PlusNMinusMNegateMultiplierIfOddPowerSum => (n, minus_m),
            MinusNPlusM
            | MinusNPlusMNegateMultiplierIfOddPowerN
            | MinusNPlusMNegateMultiplierIfOddPowerSum => (minus_n, m),
            PlusMMinusSumNAndM => (m, minus_sum),
            MinusSumNAndMPlusN => (minus_sum, n),
        };
        EisensteinTerm::new(power_n, power_m)
    }

    fn multiplier_rule(self) -> MultiplierRule {
        use CoefficientRelationship::*;

        match self {
            PlusMPlusNNegateMultiplierIfOddPowerSum
            | MinusMMinusNNegateMultiplierIfOddPowerSum
            | PlusNMinusMNegateMultiplierIfOddPowerSum
            | MinusNPlusMNegateMultiplierIfOddPowerSum => MultiplierRule::NegateIfOddPowerSum,
            PlusNMinusMNegateMultiplierIfOddPowerN | MinusNPlusMNegateMultiplierIfOddPowerN => {
                MultiplierRule::NegateIfOddPowerN
            }
            _ => MultiplierRule::Same,
        }
    }

    /// Partner term and multiplier of `(term, multiplier)`.
    pub fn apply(self, term: &EisensteinTerm, multiplier: Complex64) -> (EisensteinTerm, Complex64) {
        (
            self.transform_powers(term),
            self.multiplier_rule().apply(term, multiplier),
        )
    }
}

/// Exact comparison, no tolerance.
pub fn multipliers_are_the_same(multiplier1: Complex64, multiplier2: Complex64) -> bool {
    multiplier1 == multiplier2
}

pub fn multipliers_are_negated(multiplier1: Complex64, multiplier2: Complex64) -> bool {
    multiplier1 == -multiplier2
}

/// Does `(term2, multiplier2)` relate to `(term1, multiplier1)` via `relationship`?
pub fn satisfies_relationship(
    term1: &EisensteinTerm,
    term2: &EisensteinTerm,
    multiplier1: Complex64,
    multiplier2: Complex64,
    relationship: CoefficientRelationship,
) -> bool {
    if !multipliers_are_the_same(multiplier1, multiplier2)
        && !multipliers_are_negated(multiplier1, multiplier2)
    {
        return false;
    }

    let (expected_term, expected_multiplier) = relationship.apply(term1, multiplier1);
    expected_term == *term2 && multipliers_are_the_same(expected_multiplier, multiplier2)
}

/// Every relationship that holds between the two pairs, in declaration order.
pub fn get_all_possible_term_relationships(
    term1: &EisensteinTerm,
    term2: &EisensteinTerm,
    multiplier1: Complex64,
    multiplier2: Complex64,
) -> Vec<CoefficientRelationship> {
    CoefficientRelationship::ALL
        .into_iter()
        .filter(|relationship| {
            satisfies_relationship(term1, term2, multiplier1, multiplier2, *relationship)
        })
        .collect()
}
