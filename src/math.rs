//! Generic arithmetic helpers.

use std::ops::Add;

/// Add two values of any addable type.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}
