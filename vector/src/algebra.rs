use crate::{Scalar, Vector};

/// Sum of the coordinatewise products, accumulated in `S`.
///
/// Integer dot products are exact as long as they do not overflow `S`.
///
/// # Panics
///
/// Integer overflow panics in debug builds and wraps in release builds.
#[inline]
pub fn dot<S: Scalar, const N: usize>(a: &Vector<S, N>, b: &Vector<S, N>) -> S {
    a.iter().zip(b).fold(S::ZERO, |sum, (&x, &y)| sum + x * y)
}

/// # Panics
///
/// Same overflow behaviour as [`dot`].
#[inline]
pub fn norm_squared<S: Scalar, const N: usize>(v: &Vector<S, N>) -> S {
    dot(v, v)
}

/// Euclidean length; truncated for integer scalars.
///
/// # Panics
///
/// Same overflow behaviour as [`dot`].
#[inline]
pub fn norm<S: Scalar, const N: usize>(v: &Vector<S, N>) -> S {
    norm_squared(v).sqrt()
}

impl<S: Scalar, const N: usize> Vector<S, N> {
    #[inline]
    pub fn dot(&self, other: &Self) -> S {
        dot(self, other)
    }

    #[inline]
    pub fn norm_squared(&self) -> S {
        norm_squared(self)
    }

    #[inline]
    pub fn norm(&self) -> S {
        norm(self)
    }
}
