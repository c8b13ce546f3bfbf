//! Building blocks for synthesizing operators from a minimal set of primitives.
//!
//! A type opts into binary arithmetic by implementing the compound-assignment
//! traits (`AddAssign`, `MulAssign`, ...) and deriving the matching capability
//! from `operators_derive`. Comparisons are synthesized from the two primitive
//! traits declared here, [`Equal`] and [`LessThan`].
//!
//! Every derived operator forwards to one of the free functions in this crate,
//! so the same synthesis rules are available to hand-written code.

use std::cmp::Ordering;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Primitive equality, from which `==` and `!=` are derived.
pub trait Equal {
    fn equal(&self, other: &Self) -> bool;
}

/// Primitive strict weak ordering, from which `<`, `>`, `<=` and `>=` are derived.
///
/// Implementations must be irreflexive and transitive, and incomparability
/// must be transitive as well.
pub trait LessThan {
    fn less_than(&self, other: &Self) -> bool;
}

// Arithmetic

#[inline]
pub fn add<T: AddAssign<U>, U>(a: T, b: U) -> T {
    let mut result = a;
    result += b;
    result
}

#[inline]
pub fn sub<T: SubAssign<U>, U>(a: T, b: U) -> T {
    let mut result = a;
    result -= b;
    result
}

#[inline]
pub fn mul<T: MulAssign<U>, U>(a: T, b: U) -> T {
    let mut result = a;
    result *= b;
    result
}

#[inline]
pub fn div<T: DivAssign<U>, U>(a: T, b: U) -> T {
    let mut result = a;
    result /= b;
    result
}

/// `a + b` with the secondary operand on the left; the result has the primary type.
#[inline]
pub fn add_commuted<T: AddAssign<U>, U>(a: U, b: T) -> T {
    let mut result = b;
    result += a;
    result
}

/// `a * b` with the secondary operand on the left; the result has the primary type.
#[inline]
pub fn mul_commuted<T: MulAssign<U>, U>(a: U, b: T) -> T {
    let mut result = b;
    result *= a;
    result
}

// Comparison

#[inline]
pub fn not_equal<T: Equal + ?Sized>(a: &T, b: &T) -> bool {
    !a.equal(b)
}

#[inline]
pub fn greater<T: LessThan + ?Sized>(a: &T, b: &T) -> bool {
    b.less_than(a)
}

#[inline]
pub fn less_equal<T: LessThan + ?Sized>(a: &T, b: &T) -> bool {
    !b.less_than(a)
}

#[inline]
pub fn greater_equal<T: LessThan + ?Sized>(a: &T, b: &T) -> bool {
    !a.less_than(b)
}

/// Total comparison under the strict weak ordering: incomparable values are
/// reported as `Equal`.
#[inline]
pub fn weak_order<T: LessThan + ?Sized>(a: &T, b: &T) -> Ordering {
    if a.less_than(b) {
        Ordering::Less
    } else if b.less_than(a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Comparison consistent with both `<` and `==`: values that are neither
/// ordered nor equal yield `None`.
#[inline]
pub fn partial_order<T: LessThan + PartialEq + ?Sized>(a: &T, b: &T) -> Option<Ordering> {
    match weak_order(a, b) {
        Ordering::Equal if a != b => None,
        ordering => Some(ordering),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Meters(i64);

    impl AddAssign for Meters {
        fn add_assign(&mut self, rhs: Self) {
            self.0 += rhs.0;
        }
    }

    impl SubAssign<i64> for Meters {
        fn sub_assign(&mut self, rhs: i64) {
            self.0 -= rhs;
        }
    }

    impl MulAssign<i64> for Meters {
        fn mul_assign(&mut self, rhs: i64) {
            self.0 *= rhs;
        }
    }

    impl DivAssign<i64> for Meters {
        fn div_assign(&mut self, rhs: i64) {
            self.0 /= rhs;
        }
    }

    impl Equal for Meters {
        fn equal(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl LessThan for Meters {
        fn less_than(&self, other: &Self) -> bool {
            self.0 < other.0
        }
    }

    #[test]
    fn arithmetic_uses_compound_assignment() {
        assert_eq!(add(Meters(2), Meters(3)), Meters(5));
        assert_eq!(sub(Meters(2), 3_i64), Meters(-1));
        assert_eq!(mul(Meters(2), 4_i64), Meters(8));
        assert_eq!(div(Meters(9), 2_i64), Meters(4));
    }

    #[test]
    fn commuted_arithmetic_keeps_primary_type() {
        assert_eq!(mul_commuted(3_i64, Meters(5)), Meters(15));
        assert_eq!(add_commuted(Meters(1), Meters(5)), Meters(6));
    }

    #[test]
    fn inputs_are_not_mutated() {
        let a = Meters(7);
        let _ = add(a, Meters(1));
        assert_eq!(a, Meters(7));
    }

    #[test]
    fn derived_comparisons() {
        let (one, two) = (Meters(1), Meters(2));

        assert!(not_equal(&one, &two));
        assert!(!not_equal(&one, &one));
        assert!(greater(&two, &one));
        assert!(!greater(&one, &one));
        assert!(less_equal(&one, &one));
        assert!(less_equal(&one, &two));
        assert!(greater_equal(&two, &two));
        assert!(!greater_equal(&one, &two));
    }

    #[test]
    fn weak_order_reports_equivalence_as_equal() {
        assert_eq!(weak_order(&Meters(1), &Meters(2)), Ordering::Less);
        assert_eq!(weak_order(&Meters(2), &Meters(1)), Ordering::Greater);
        assert_eq!(weak_order(&Meters(2), &Meters(2)), Ordering::Equal);
    }

    #[test]
    fn partial_order_rejects_unequal_equivalents() {
        // Ordered by length only, equal only when identical.
        #[derive(PartialEq)]
        struct Word(&'static str);

        impl LessThan for Word {
            fn less_than(&self, other: &Self) -> bool {
                self.0.len() < other.0.len()
            }
        }

        assert_eq!(partial_order(&Word("ab"), &Word("abc")), Some(Ordering::Less));
        assert_eq!(partial_order(&Word("ab"), &Word("ab")), Some(Ordering::Equal));
        assert_eq!(partial_order(&Word("ab"), &Word("cd")), None);
        assert_eq!(weak_order(&Word("ab"), &Word("cd")), Ordering::Equal);
    }
}
