use std::ops::{Index, IndexMut};
use std::{array, slice};

use operators_derive::{
    Addable, CommutativeMultipliable, Dividable, EqualityComparable, LessThanComparable, Multipliable, Subtractable,
};

use crate::Scalar;

/// A point or direction in `N`-dimensional space with coordinates of type `S`.
///
/// The vector is exactly `N` contiguous scalars: `size_of::<Vector<S, N>>()`
/// equals `N * size_of::<S>()` and a `&[Vector<S, N>]` can be packed as a flat
/// scalar buffer.
///
/// Binary operators are synthesized from the compound assignments: `+` and
/// `-` between vectors, `*` and `/` coordinatewise between vectors, `v * s`,
/// `s * v` and `v / s` with a scalar of the vector's own type. Comparison is
/// coordinatewise for equality and lexicographic for ordering.
///
/// Accessors that only make sense above a dimension threshold are rejected at
/// build time:
///
/// ```compile_fail
/// use vector::Vector;
///
/// let _ = Vector::<f64, 3>::unit_w();
/// ```
///
/// ```compile_fail
/// use vector::Vector;
///
/// let v = Vector::new([1.0_f32]);
/// let _ = v.y();
/// ```
#[derive(Debug, Clone, Copy)]
#[derive(EqualityComparable, LessThanComparable)]
#[derive(Addable, Subtractable, Multipliable, Dividable, CommutativeMultipliable)]
#[dividable(Self, S)]
#[commutative_multipliable(S in i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64)]
#[repr(transparent)]
pub struct Vector<S: Scalar, const N: usize>([S; N]);

impl<S: Scalar, const N: usize> Vector<S, N> {
    pub const DIMENSION: usize = N;

    /// Builds a vector from exactly `N` coordinates.
    ///
    /// ```compile_fail
    /// use vector::Vector;
    ///
    /// let _: Vector<i32, 3> = Vector::new([1, 2]);
    /// ```
    #[inline]
    pub const fn new(coordinates: [S; N]) -> Self {
        const { assert!(N > 0, "a vector needs at least one dimension") };
        Self(coordinates)
    }

    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> S) -> Self {
        Self::new(array::from_fn(f))
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new([S::ZERO; N])
    }

    /// The vector with `1` at `index` and `0` elsewhere.
    #[inline]
    pub fn unit(index: usize) -> Self {
        let mut unit = Self::zero();
        *unit.slot_mut(index) = S::ONE;
        unit
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::unit(0)
    }

    #[inline]
    pub fn unit_y() -> Self {
        const { assert!(N > 1, "unit_y() needs a vector of dimension 2 or more") };
        Self::unit(1)
    }

    #[inline]
    pub fn unit_z() -> Self {
        const { assert!(N > 2, "unit_z() needs a vector of dimension 3 or more") };
        Self::unit(2)
    }

    #[inline]
    pub fn unit_w() -> Self {
        const { assert!(N > 3, "unit_w() needs a vector of dimension 4 or more") };
        Self::unit(3)
    }

    // Every accessor resolves through these two. Out-of-range indices are a
    // caller bug and panic through the array's own bounds check.
    #[inline(always)]
    fn slot(&self, index: usize) -> &S {
        debug_assert!(index < N, "index {index} out of range for a vector of dimension {N}");
        &self.0[index]
    }

    #[inline(always)]
    fn slot_mut(&mut self, index: usize) -> &mut S {
        debug_assert!(index < N, "index {index} out of range for a vector of dimension {N}");
        &mut self.0[index]
    }

    /// Same as `self[index]`.
    #[inline]
    pub fn at(&self, index: usize) -> &S {
        self.slot(index)
    }

    /// Same as `&mut self[index]`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> &mut S {
        self.slot_mut(index)
    }

    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &S {
        debug_assert!(index < N);
        unsafe { self.0.get_unchecked(index) }
    }

    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut S {
        debug_assert!(index < N);
        unsafe { self.0.get_unchecked_mut(index) }
    }

    #[inline]
    pub fn x(&self) -> S {
        *self.slot(0)
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut S {
        self.slot_mut(0)
    }

    #[inline]
    pub fn y(&self) -> S {
        const { assert!(N > 1, "y() needs a vector of dimension 2 or more") };
        *self.slot(1)
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut S {
        const { assert!(N > 1, "y_mut() needs a vector of dimension 2 or more") };
        self.slot_mut(1)
    }

    #[inline]
    pub fn z(&self) -> S {
        const { assert!(N > 2, "z() needs a vector of dimension 3 or more") };
        *self.slot(2)
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut S {
        const { assert!(N > 2, "z_mut() needs a vector of dimension 3 or more") };
        self.slot_mut(2)
    }

    #[inline]
    pub fn w(&self) -> S {
        const { assert!(N > 3, "w() needs a vector of dimension 4 or more") };
        *self.slot(3)
    }

    #[inline]
    pub fn w_mut(&mut self) -> &mut S {
        const { assert!(N > 3, "w_mut() needs a vector of dimension 4 or more") };
        self.slot_mut(3)
    }

    /// Coordinates in index order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, S> {
        self.0.iter_mut()
    }

    #[inline]
    pub const fn as_array(&self) -> &[S; N] {
        &self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[S] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [S] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [S; N] {
        self.0
    }
}

impl<S: Scalar, const N: usize> Default for Vector<S, N> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar, const N: usize> From<[S; N]> for Vector<S, N> {
    #[inline]
    fn from(coordinates: [S; N]) -> Self {
        Self::new(coordinates)
    }
}

impl<S: Scalar, const N: usize> From<Vector<S, N>> for [S; N] {
    #[inline]
    fn from(v: Vector<S, N>) -> Self {
        v.into_array()
    }
}

impl<S: Scalar, const N: usize> Index<usize> for Vector<S, N> {
    type Output = S;

    #[inline]
    fn index(&self, index: usize) -> &S {
        self.slot(index)
    }
}

impl<S: Scalar, const N: usize> IndexMut<usize> for Vector<S, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut S {
        self.slot_mut(index)
    }
}

impl<S: Scalar, const N: usize> AsRef<[S]> for Vector<S, N> {
    #[inline]
    fn as_ref(&self) -> &[S] {
        self.as_slice()
    }
}

impl<S: Scalar, const N: usize> AsMut<[S]> for Vector<S, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [S] {
        self.as_mut_slice()
    }
}

impl<S: Scalar, const N: usize> IntoIterator for Vector<S, N> {
    type Item = S;
    type IntoIter = array::IntoIter<S, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, S: Scalar, const N: usize> IntoIterator for &'a Vector<S, N> {
    type Item = &'a S;
    type IntoIter = slice::Iter<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S: Scalar, const N: usize> IntoIterator for &'a mut Vector<S, N> {
    type Item = &'a mut S;
    type IntoIter = slice::IterMut<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
