use std::{
    fmt::Debug,
    ops::{Add, Mul, Sub},
};

use num::{rational::Ratio, Complex, Zero};

/// Element type of [`crate::Vector`] and [`crate::Matrix`].
///
/// The capacity ceilings are associated constants so that they can be
/// referenced symbolically (`<i32 as Scalar>::MAX_VECTOR_SIZE`) and tuned per
/// element type by downstream implementations.
pub trait Scalar:
    Clone + PartialEq + Debug + Zero + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Largest number of elements a single vector may hold
    const MAX_VECTOR_SIZE: usize = 100_000_000;

    /// Largest dimension of a square matrix
    const MAX_MATRIX_SIZE: usize = 10_000;
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(impl Scalar for $t {})*
    };
}

impl_scalar!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    Complex<f32>,
    Complex<f64>,
    Ratio<i32>,
    Ratio<i64>,
);
