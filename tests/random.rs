//! Exploratory tests which use randomized test cases

use fastrand::Rng;
use utmatrix::{
    Matrix,
    __testing::{check_elementwise, rand_matrix, rand_vector, RandStreamI64},
};

const ITER: usize = 500;
const MAX_LEN: usize = 32;

fn init_logger() {
    // several tests race to install the logger, only the first one wins
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .init();
}

#[test]
fn copies_are_independent() {
    init_logger();
    let mut seed_stream = Rng::with_seed(1);
    let mut values = RandStreamI64::new(seed_stream.u64(..), -1000, 1000);
    for _ in 0..ITER {
        let size = values.size(MAX_LEN);
        let start = seed_stream.usize(0..10);
        let original = rand_vector(&mut values, size, start);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        let index = seed_stream.usize(start..start + size);
        copy[index] += 1;
        assert_ne!(copy, original);
    }
}

#[test]
fn add_then_sub_is_identity() {
    init_logger();
    let mut seed_stream = Rng::with_seed(2);
    let mut values = RandStreamI64::new(seed_stream.u64(..), -1000, 1000);
    for i in 0..ITER {
        let size = values.size(MAX_LEN);
        let a = rand_vector(&mut values, size, 0);
        let b = rand_vector(&mut values, size, 0);
        let sum = a.try_add(&b).unwrap();
        let elementwise = check_elementwise(&sum, &a, &b, |l, r| l + r);
        assert!(elementwise, "@ iter = {i}");
        assert_eq!(sum.try_sub(&b).unwrap(), a, "@ iter = {i}");
    }
}

#[test]
fn dot_is_symmetric() {
    init_logger();
    let mut seed_stream = Rng::with_seed(3);
    let mut values = RandStreamI64::new(seed_stream.u64(..), -100, 100);
    for _ in 0..ITER {
        let size = values.size(MAX_LEN);
        let a = rand_vector(&mut values, size, seed_stream.usize(0..5));
        let b = rand_vector(&mut values, size, seed_stream.usize(0..5));
        assert_eq!(a.dot(&b), b.dot(&a));
    }
}

#[test]
fn mismatched_sizes_always_fail() {
    init_logger();
    let mut seed_stream = Rng::with_seed(4);
    let mut values = RandStreamI64::new(seed_stream.u64(..), -100, 100);
    for _ in 0..ITER {
        let size = values.size(MAX_LEN);
        let a = rand_vector(&mut values, size, 0);
        let b = rand_vector(&mut values, size + 1, 0);
        assert!(a.try_add(&b).unwrap_err().is_size_mismatch());
        assert!(b.try_sub(&a).unwrap_err().is_size_mismatch());
        assert!(a.dot(&b).unwrap_err().is_size_mismatch());
        assert_ne!(a, b);
    }
}

#[test]
fn matrix_add_matches_cellwise_sum() {
    init_logger();
    let mut seed_stream = Rng::with_seed(5);
    let mut values = RandStreamI64::new(seed_stream.u64(..), -1000, 1000);
    for _ in 0..ITER / 10 {
        let size = values.size(MAX_LEN / 2);
        let a = rand_matrix(&mut values, size);
        let b = rand_matrix(&mut values, size);
        let sum = a.try_add(&b).unwrap();
        for i in 0..size {
            assert!(check_elementwise(&sum[i], &a[i], &b[i], |l, r| l + r));
        }
        assert_eq!(sum.try_sub(&b).unwrap(), a);
    }
}

#[test]
fn matrix_assign_adopts_any_size() {
    init_logger();
    let mut seed_stream = Rng::with_seed(6);
    let mut values = RandStreamI64::new(seed_stream.u64(..), -10, 10);
    let mut target: Matrix<i64> = rand_matrix(&mut values, 1);
    for _ in 0..ITER / 10 {
        let size = values.size(MAX_LEN / 2);
        let source = rand_matrix(&mut values, size);
        target.assign(&source);
        assert_eq!(target.size(), size);
        assert_eq!(target, source);
    }
}
