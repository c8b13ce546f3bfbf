use std::fmt;

use crate::{Scalar, Vector};

/// Renders `(x, y, ...)`. Width and precision apply to every coordinate.
impl<S: Scalar, const N: usize> fmt::Display for Vector<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, coordinate) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(coordinate, f)?;
        }
        f.write_str(")")
    }
}
