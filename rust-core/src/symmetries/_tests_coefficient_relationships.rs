#[cfg(test)]
mod _tests_coefficient_relationships {
    use super::super::coefficient_relationships::*;
    use crate::formula::EisensteinTerm;
    use num_complex::Complex64;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn t(power_n: i32, power_m: i32) -> EisensteinTerm {
        EisensteinTerm::new(power_n, power_m)
    }

    // ==================== Multiplier gate ====================

    #[test]
    fn test_unrelated_multipliers_fail_every_relationship() {
        let term = t(0, 0);
        for relationship in CoefficientRelationship::ALL {
            assert!(
                !satisfies_relationship(&term, &term, c(1.0, 0.0), c(2.0, 0.0), relationship),
                "{:?} should be rejected by the multiplier gate",
                relationship
            );
            assert!(
                !satisfies_relationship(&term, &term, c(1.0, 1.0), c(-1.0, 1.0), relationship),
                "{:?} should be rejected for partially negated multipliers",
                relationship
            );
        }
    }

    #[test]
    fn test_multiplier_comparison_is_exact() {
        let a = c(0.1 + 0.2, 0.0);
        let b = c(0.3, 0.0);
        assert!(!multipliers_are_the_same(a, b));
        assert!(multipliers_are_the_same(a, a));
        assert!(multipliers_are_negated(c(1.5, -2.0), c(-1.5, 2.0)));
        assert!(!multipliers_are_negated(c(1.5, -2.0), c(1.5, -2.0)));
    }

    #[test]
    fn test_zero_multiplier_is_its_own_negation() {
        let zero = c(0.0, 0.0);
        assert!(multipliers_are_the_same(zero, -zero));
        assert!(satisfies_relationship(
            &t(1, 2),
            &t(2, 1),
            zero,
            zero,
            CoefficientRelationship::PlusMPlusNNegateMultiplierIfOddPowerSum
        ));
    }

    // ==================== Power transforms ====================

    #[test]
    fn test_power_transforms() {
        use CoefficientRelationship::*;

        let term = t(3, -5);
        let expected = [
            (PlusNPlusM, t(3, -5)),
            (PlusMPlusN, t(-5, 3)),
            (MinusNMinusM, t(-3, 5)),
            (MinusMMinusN, t(5, -3)),
            (PlusMMinusN, t(-5, -3)),
            (MinusMPlusN, t(5, 3)),
            (PlusNMinusM, t(3, 5)),
            (MinusNPlusM, t(-3, -5)),
            (PlusMMinusSumNAndM, t(-5, 2)),
            (MinusSumNAndMPlusN, t(2, 3)),
            (PlusMPlusNNegateMultiplierIfOddPowerSum, t(-5, 3)),
            (MinusMMinusNNegateMultiplierIfOddPowerSum, t(5, -3)),
            (PlusNMinusMNegateMultiplierIfOddPowerN, t(3, 5)),
            (MinusNPlusMNegateMultiplierIfOddPowerN, t(-3, -5)),
            (PlusNMinusMNegateMultiplierIfOddPowerSum, t(3, 5)),
            (MinusNPlusMNegateMultiplierIfOddPowerSum, t(-3, -5)),
        ];

        for (relationship, partner) in expected {
            assert_eq!(
                relationship.transform_powers(&term),
                partner,
                "wrong partner for {:?}",
                relationship
            );
        }
    }

    #[test]
    fn test_power_transforms_wrap_at_integer_bounds() {
        use CoefficientRelationship::*;

        let term = t(i32::MAX, 1);
        assert_eq!(PlusMMinusSumNAndM.transform_powers(&term), t(1, i32::MIN));
        assert_eq!(MinusSumNAndMPlusN.transform_powers(&term), t(i32::MIN, i32::MAX));
        assert_eq!(MinusNMinusM.transform_powers(&term), t(-i32::MAX, -1));

        let term = t(i32::MIN, 0);
        assert_eq!(MinusNMinusM.transform_powers(&term), t(i32::MIN, 0));
        assert_eq!(PlusMMinusN.transform_powers(&term), t(0, i32::MIN));

        // n = MAX odd, n + m even: only the power-n rule negates
        let term = t(i32::MAX, 1);
        let m = c(1.0, 0.0);
        assert_eq!(PlusMPlusNNegateMultiplierIfOddPowerSum.apply(&term, m).1, m);
        assert_eq!(PlusNMinusMNegateMultiplierIfOddPowerN.apply(&term, m).1, -m);
    }

    #[test]
    fn test_hexagonal_transforms_cycle_with_period_three() {
        let start = t(1, -2);
        let once = CoefficientRelationship::PlusMMinusSumNAndM.transform_powers(&start);
        let twice = CoefficientRelationship::PlusMMinusSumNAndM.transform_powers(&once);
        let thrice = CoefficientRelationship::PlusMMinusSumNAndM.transform_powers(&twice);
        assert_eq!(once, t(-2, 1));
        assert_eq!(twice, t(1, 1));
        assert_eq!(thrice, start);
        assert_eq!(
            CoefficientRelationship::MinusSumNAndMPlusN.transform_powers(&start),
            twice
        );
    }

    // ==================== Parity-conditioned multipliers ====================

    #[test]
    fn test_odd_power_sum_requires_negated_multiplier() {
        use CoefficientRelationship::*;

        let (term1, term2) = (t(1, 2), t(2, 1));
        let one = c(1.0, 0.0);

        assert!(satisfies_relationship(&term1, &term2, one, -one, PlusMPlusNNegateMultiplierIfOddPowerSum));
        assert!(!satisfies_relationship(&term1, &term2, one, one, PlusMPlusNNegateMultiplierIfOddPowerSum));
        assert!(satisfies_relationship(&term1, &term2, one, one, PlusMPlusN));
        assert!(!satisfies_relationship(&term1, &term2, one, -one, PlusMPlusN));
    }

    #[test]
    fn test_even_power_sum_keeps_multiplier() {
        use CoefficientRelationship::*;

        let m = c(0.5, -0.25);
        assert!(satisfies_relationship(&t(2, 4), &t(-4, -2), m, m, MinusMMinusNNegateMultiplierIfOddPowerSum));
        assert!(!satisfies_relationship(&t(2, 4), &t(-4, -2), m, -m, MinusMMinusNNegateMultiplierIfOddPowerSum));
    }

    #[test]
    fn test_power_n_parity_is_independent_of_power_sum() {
        use CoefficientRelationship::*;

        let m = c(2.0, 1.0);
        // n = 2 even, n + m = 3 odd
        let (term1, term2) = (t(2, 1), t(2, -1));
        assert!(satisfies_relationship(&term1, &term2, m, m, PlusNMinusMNegateMultiplierIfOddPowerN));
        assert!(!satisfies_relationship(&term1, &term2, m, m, PlusNMinusMNegateMultiplierIfOddPowerSum));
        assert!(satisfies_relationship(&term1, &term2, m, -m, PlusNMinusMNegateMultiplierIfOddPowerSum));

        // n = -3 odd, n + m = -1 odd
        let (term1, term2) = (t(-3, 2), t(3, 2));
        assert!(satisfies_relationship(&term1, &term2, m, -m, MinusNPlusMNegateMultiplierIfOddPowerN));
        assert!(satisfies_relationship(&term1, &term2, m, -m, MinusNPlusMNegateMultiplierIfOddPowerSum));
        assert!(!satisfies_relationship(&term1, &term2, m, -m, MinusNPlusM));
    }

    #[test]
    fn test_apply_produces_a_satisfying_partner() {
        let term = t(-3, 4);
        let multiplier = c(0.7, -1.1);
        for relationship in CoefficientRelationship::ALL {
            let (partner, partner_multiplier) = relationship.apply(&term, multiplier);
            assert!(
                satisfies_relationship(&term, &partner, multiplier, partner_multiplier, relationship),
                "{:?} does not accept its own partner",
                relationship
            );
        }
    }

    // ==================== All relationships ====================

    #[test]
    fn test_all_relationships_for_swapped_terms() {
        use CoefficientRelationship::*;

        let one = c(1.0, 0.0);
        assert_eq!(
            get_all_possible_term_relationships(&t(1, 2), &t(2, 1), one, one),
            vec![PlusMPlusN]
        );
        assert_eq!(
            get_all_possible_term_relationships(&t(1, 2), &t(2, 1), one, -one),
            vec![PlusMPlusNNegateMultiplierIfOddPowerSum]
        );
    }

    #[test]
    fn test_all_relationships_for_symmetric_term() {
        use CoefficientRelationship::*;

        let one = c(1.0, 0.0);
        assert_eq!(
            get_all_possible_term_relationships(&t(1, 1), &t(1, 1), one, one),
            vec![PlusNPlusM, PlusMPlusN, PlusMPlusNNegateMultiplierIfOddPowerSum]
        );
    }

    #[test]
    fn test_constant_term_satisfies_everything() {
        let one = c(1.0, 0.0);
        let all = get_all_possible_term_relationships(&t(0, 0), &t(0, 0), one, one);
        assert_eq!(all.len(), CoefficientRelationship::ALL.len());
    }

    #[test]
    fn test_no_relationships_for_unrelated_terms() {
        let one = c(1.0, 0.0);
        assert!(get_all_possible_term_relationships(&t(1, 2), &t(5, 7), one, one).is_empty());
    }
}
