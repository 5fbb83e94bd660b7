//! Property-based tests for the rational value type.

#[cfg(test)]
mod tests {
    use num_integer::Integer;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::Rational;

    // Small enough that every cross product stays far from i64 overflow.
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational<i64>> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        // Canonical form

        #[test]
        fn canonical_pair_is_reduced(n in small_int(), d in non_zero_int()) {
            let value = Rational::new(n, d).unwrap();
            prop_assert!(*value.denom() > 0);
            prop_assert_eq!(value.numer().gcd(value.denom()), 1);
            // same number as the input
            prop_assert_eq!(value.numer() * d, n * value.denom());
        }

        #[test]
        fn display_pair_keeps_input(n in small_int(), d in non_zero_int()) {
            let value = Rational::new(n, d).unwrap();
            let (dn, dd) = if d < 0 { (-n, -d) } else { (n, d) };
            prop_assert_eq!(value.to_string(), format!("{}/{}", dn, dd));
        }

        #[test]
        fn sign_law(n in small_int(), d in non_zero_int()) {
            prop_assert_eq!(Rational::new(-n, d).unwrap(), Rational::new(n, -d).unwrap());
            prop_assert_eq!(Rational::new(-n, -d).unwrap(), Rational::new(n, d).unwrap());
        }

        #[test]
        fn scaling_does_not_change_value(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
            prop_assert_eq!(Rational::new(n * k, d * k).unwrap(), Rational::new(n, d).unwrap());
        }

        // Comparison

        #[test]
        fn ordering_matches_cross_multiplication(a in rational(), b in rational()) {
            let lhs = a.numer() * b.denom();
            let rhs = b.numer() * a.denom();
            prop_assert_eq!(a == b, lhs == rhs);
            prop_assert_eq!(a < b, lhs < rhs);
            prop_assert_eq!(a <= b, lhs <= rhs);
            prop_assert_eq!(a > b, lhs > rhs);
            prop_assert_eq!(a >= b, lhs >= rhs);
        }

        #[test]
        fn integer_comparison_matches_whole_rational(a in rational(), n in small_int()) {
            let whole = Rational::from(n);
            prop_assert_eq!(a == n, a == whole);
            prop_assert_eq!(a < n, a < whole);
            prop_assert_eq!(n > a, whole > a);
        }

        // Hashing

        #[test]
        fn equal_values_hash_equal(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
            let a = Rational::new(n, d).unwrap();
            let b = Rational::new(n * k, d * k).unwrap();
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }

        #[test]
        fn whole_values_hash_like_integers(n in small_int(), k in non_zero_int()) {
            let value = Rational::new(n * k, k).unwrap();
            prop_assert_eq!(hash_of(&value), hash_of(&n));
        }

        // Field axioms

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn sub_then_add_is_identity(a in rational(), b in rational()) {
            prop_assert_eq!(a - b + b, a);
        }

        #[test]
        fn multiplicative_inverse(n in non_zero_int(), d in non_zero_int()) {
            let a = Rational::new(n, d).unwrap();
            let inv = Rational::integer_divided_by(&1, &a).unwrap();
            prop_assert_eq!(a * inv, 1);
        }

        // Display normalization

        #[test]
        fn forward_results_display_reduced(a in rational(), b in rational(), n in non_zero_int()) {
            prop_assert!(!(a + b).has_unreduced_display());
            prop_assert!(!(a - b).has_unreduced_display());
            prop_assert!(!(a * b).has_unreduced_display());
            prop_assert!(!(a - n).has_unreduced_display());
            prop_assert!(!(a / n).has_unreduced_display());
            prop_assert!(!(n + a).has_unreduced_display());
            prop_assert!(!(n * a).has_unreduced_display());
        }

        #[test]
        fn integer_operands_match_whole_rationals(a in rational(), n in small_int()) {
            let whole = Rational::from(n);
            prop_assert_eq!(a + n, a + whole);
            prop_assert_eq!(n - a, whole - a);
            prop_assert_eq!(a * n, a * whole);
        }

        #[test]
        fn reflected_division_shows_formula(n in non_zero_int(), d in non_zero_int(), k in small_int()) {
            let a = Rational::new(n, d).unwrap();
            let q = k / a;
            let (dn, dd) = if *a.numer() < 0 {
                (-(k * a.denom()), -a.numer())
            } else {
                (k * a.denom(), *a.numer())
            };
            prop_assert_eq!(q.to_string(), format!("{}/{}", dn, dd));
            prop_assert_eq!(q, Rational::new(dn, dd).unwrap());
        }
    }
}
