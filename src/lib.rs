//! Bounds-checked containers for numeric values.
//!
//! - [`Vector`]: a fixed-size vector whose valid indices start at an
//!   arbitrary non-negative offset.
//! - [`Matrix`]: a square upper-triangular matrix made of [`Vector`] rows of
//!   shrinking length.
//!
//! Both containers are plain values: cloning copies the storage, and
//! assignment adopts the source's size and contents. Every access is checked
//! and reports failures through [`Error`].
//!
//! ```
//! use utmatrix::{Matrix, Vector};
//!
//! let v = Vector::from_vec(0, vec![1, 2, 3]).unwrap();
//! assert_eq!(v.clone() + 5, Vector::from_vec(0, vec![6, 7, 8]).unwrap());
//! assert!(v.dot(&Vector::new(4).unwrap()).is_err());
//!
//! let mut m = Matrix::<i32>::new(3).unwrap();
//! m[0][2] = 3;
//! assert_eq!(m.get(0, 2), Ok(3));
//! assert_eq!(m.get(2, 0), Ok(0));
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod error;
pub use error::{Error, Result};

mod scalar;
pub use scalar::Scalar;

mod vector;
pub use vector::Vector;

mod matrix;
pub use matrix::{LowerTriangle, Matrix};

mod util;

#[doc(hidden)]
pub use util::__testing;
