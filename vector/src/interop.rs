use nalgebra::SVector;

use crate::{Scalar, Vector};

impl<S: Scalar, const N: usize> Vector<S, N> {
    pub fn to_svector(&self) -> SVector<S, N> {
        SVector::from(self.into_array())
    }

    pub fn from_svector(v: &SVector<S, N>) -> Self {
        Self::from_fn(|i| v[i])
    }
}

impl<S: Scalar, const N: usize> From<Vector<S, N>> for SVector<S, N> {
    fn from(v: Vector<S, N>) -> Self {
        v.to_svector()
    }
}

impl<S: Scalar, const N: usize> From<SVector<S, N>> for Vector<S, N> {
    fn from(v: SVector<S, N>) -> Self {
        Self::from_svector(&v)
    }
}
