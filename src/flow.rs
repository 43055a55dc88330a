use std::{
    fmt::Debug,
    ops::{Add, Neg, Sub},
};

use num::{Bounded, Zero};

/// Capacity and flow quantity. Reverse arcs carry negated flow, so the type must be signed.
pub trait Flow:
    Copy
    + Ord
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Zero
    + Bounded
{
}

impl<T> Flow for T where
    T: Copy
        + Ord
        + Debug
        + Add<Output = T>
        + Sub<Output = T>
        + Neg<Output = T>
        + Zero
        + Bounded
{
}
