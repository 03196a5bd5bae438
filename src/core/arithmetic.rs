use std::ops::{Add, Sub};

/// Returns `a + b`.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Returns `a - b`.
pub fn subtract<T: Sub<Output = T>>(a: T, b: T) -> T {
    a - b
}
