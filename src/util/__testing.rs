//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;

use crate::{Matrix, Vector};

/// Endless stream of random `i64` values in `min..=max`
pub struct RandStreamI64 {
    state: Rng,
    min: i64,
    max: i64,
}

impl RandStreamI64 {
    #[must_use]
    pub fn new(seed: u64, min: i64, max: i64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            state: Rng::with_seed(seed),
            min,
            max,
        }
    }

    /// Random size in `1..=max`
    pub fn size(&mut self, max: usize) -> usize {
        self.state.usize(1..=max)
    }
}

impl Iterator for RandStreamI64 {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.i64(self.min..=self.max))
    }
}

/// A vector of `size` random elements indexed from `start_index`
///
/// # Panics
/// If `size` is zero
pub fn rand_vector(stream: &mut RandStreamI64, size: usize, start_index: usize) -> Vector<i64> {
    Vector::from_vec(start_index, stream.by_ref().take(size).collect())
        .expect("size should be in range")
}

/// A matrix whose stored upper triangle is filled with random elements
///
/// # Panics
/// If `size` is zero
pub fn rand_matrix(stream: &mut RandStreamI64, size: usize) -> Matrix<i64> {
    let mut m = Matrix::new(size).expect("size should be in range");
    for i in 0..size {
        for x in &mut m[i] {
            *x = stream.next().expect("stream is endless");
        }
    }
    m
}

/// Check that every stored element of `v` equals `f(l, r)` of the
/// corresponding elements of `lhs` and `rhs`
pub fn check_elementwise(
    v: &Vector<i64>,
    lhs: &Vector<i64>,
    rhs: &Vector<i64>,
    f: impl Fn(i64, i64) -> i64,
) -> bool {
    let same_size = v.size() == lhs.size() && lhs.size() == rhs.size();
    let expected = lhs.iter().zip(rhs.iter()).map(|(l, r)| f(*l, *r));
    same_size && v.iter().copied().eq(expected)
}
