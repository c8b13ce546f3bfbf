//! Compound assignment, the primitives every binary vector operator is
//! synthesized from.

use std::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};

use crate::{Scalar, Vector};

macro_rules! impl_coordinatewise {
    ($($assign_trait:ident :: $assign_method:ident => $operator:tt),* $(,)?) => {
        $(
            impl<S: Scalar, const N: usize> $assign_trait for Vector<S, N> {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    for (coordinate, other) in self.iter_mut().zip(rhs) {
                        *coordinate $operator other;
                    }
                }
            }
        )*
    };
}

macro_rules! impl_uniform {
    ($($assign_trait:ident :: $assign_method:ident => $operator:tt),* $(,)?) => {
        $(
            impl<S: Scalar, const N: usize> $assign_trait<S> for Vector<S, N> {
                #[inline]
                fn $assign_method(&mut self, rhs: S) {
                    for coordinate in self.iter_mut() {
                        *coordinate $operator rhs;
                    }
                }
            }
        )*
    };
}

impl_coordinatewise! {
    AddAssign::add_assign => +=,
    SubAssign::sub_assign => -=,
    MulAssign::mul_assign => *=,
    DivAssign::div_assign => /=,
}

impl_uniform! {
    MulAssign::mul_assign => *=,
    DivAssign::div_assign => /=,
}

impl<S: Scalar + Neg<Output = S>, const N: usize> Neg for Vector<S, N> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self {
        for coordinate in self.iter_mut() {
            *coordinate = -*coordinate;
        }
        self
    }
}
