use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use operators::{Equal, LessThan};

use crate::{Scalar, Vector};

impl<S: Scalar, const N: usize> Equal for Vector<S, N> {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self.iter().zip(other).all(|(a, b)| a == b)
    }
}

/// Lexicographic, coordinate 0 first, using only the scalar `<`.
impl<S: Scalar, const N: usize> LessThan for Vector<S, N> {
    fn less_than(&self, other: &Self) -> bool {
        for (a, b) in self.iter().zip(other) {
            if a < b {
                return true;
            }
            if b < a {
                return false;
            }
        }
        false
    }
}

impl<S: Scalar + Eq, const N: usize> Eq for Vector<S, N> {}

impl<S: Scalar + Ord, const N: usize> Ord for Vector<S, N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        operators::weak_order(self, other)
    }
}

impl<S: Scalar + Hash, const N: usize> Hash for Vector<S, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_array().hash(state);
    }
}
