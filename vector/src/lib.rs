//! Fixed-dimension vectors over primitive numeric scalars.
//!
//! `Vector<S, N>` is a plain array of `N` scalars with value semantics. Its
//! binary arithmetic and comparison operators are synthesized by
//! `operators_derive` from a handful of primitives: the compound assignments
//! in this crate and the `operators::Equal` / `operators::LessThan` impls.
//!
//! ```
//! use vector::{Vector3d, dot, norm, vector};
//!
//! let a: Vector3d = vector![-1.0, -2.0, 3.0];
//! let b = Vector3d::new([1.0, 1.0, 1.0]);
//!
//! assert_eq!(a + b, vector![0.0, -1.0, 4.0]);
//! assert_eq!(-1.5 * a, vector![1.5, 3.0, -4.5]);
//! assert_eq!(dot(&a, &b), 0.0);
//! assert_eq!(norm(&vector![3.0, 4.0]), 5.0);
//! assert_eq!(a.to_string(), "(-1, -2, 3)");
//! ```
//!
//! Coordinates are read through `v[i]`, `v.at(i)` or `v.x()`..`v.w()`. An
//! out-of-range index panics. `get_unchecked`/`get_unchecked_mut` skip the
//! check for callers that have already proven `i < N`:
//!
//! ```
//! use vector::Vector3i;
//!
//! let mut v = Vector3i::new([1, 2, 3]);
//! for i in 0..Vector3i::DIMENSION {
//!     // SAFETY: `i` is below the dimension.
//!     unsafe { *v.get_unchecked_mut(i) *= 10 };
//! }
//! assert_eq!(v, Vector3i::new([10, 20, 30]));
//! assert_eq!(unsafe { *v.get_unchecked(2) }, v[2]);
//! ```

mod algebra;
mod arithmetic;
mod base;
mod compare;
mod display;
#[cfg(feature = "nalgebra")]
mod interop;
mod scalar;

pub use algebra::{dot, norm, norm_squared};
pub use base::Vector;
pub use scalar::Scalar;

pub type Vector2<S> = Vector<S, 2>;
pub type Vector3<S> = Vector<S, 3>;
pub type Vector4<S> = Vector<S, 4>;

pub type Vector2i = Vector<i32, 2>;
pub type Vector2f = Vector<f32, 2>;
pub type Vector2d = Vector<f64, 2>;

pub type Vector3i = Vector<i32, 3>;
pub type Vector3f = Vector<f32, 3>;
pub type Vector3d = Vector<f64, 3>;

pub type Vector4i = Vector<i32, 4>;
pub type Vector4f = Vector<f32, 4>;
pub type Vector4d = Vector<f64, 4>;

const _: () = assert!(size_of::<Vector3d>() == 3 * size_of::<f64>());
const _: () = assert!(size_of::<Vector<i32, 10>>() == 10 * size_of::<i32>());
const _: () = assert!(align_of::<Vector4f>() == align_of::<f32>());

/// Builds a [`Vector`] from its coordinates; the count must match the dimension.
///
/// ```compile_fail
/// use vector::{Vector3i, vector};
///
/// let _: Vector3i = vector![1, 2];
/// ```
#[macro_export]
macro_rules! vector {
    ($($coordinate:expr),+ $(,)?) => {
        $crate::Vector::new([$($coordinate),+])
    };
}
