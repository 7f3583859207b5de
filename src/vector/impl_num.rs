// Implementation of traits related to numeric operations and operators

use itertools::Itertools;
use std::ops::{Add, Mul, Sub};

use crate::{util::doc_macros::errors_size_mismatch, Error, Result, Scalar, Vector};

impl<T: Scalar> Vector<T> {
    fn check_same_size(&self, other: &Self) -> Result<()> {
        if self.size() == other.size() {
            Ok(())
        } else {
            Err(Error::size_mismatch(self.size(), other.size()))
        }
    }

    /// Combine two equally sized vectors element by element. The result
    /// keeps the start index of `self`.
    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        self.check_same_size(other)?;
        let data = self
            .data
            .iter()
            .zip_eq(other.data.iter())
            .map(|(l, r)| f(l.clone(), r.clone()))
            .collect();
        Ok(Self::from_parts_unchecked(self.start_index(), data))
    }

    /// Elementwise sum of two vectors of equal size.
    ///
    /// # Errors
    #[doc = errors_size_mismatch!()]
    ///
    /// # Examples
    /// ```
    /// use utmatrix::Vector;
    ///
    /// let v1 = Vector::from_vec(0, vec![6, 7, 8]).unwrap();
    /// let v2 = Vector::from_vec(0, vec![6, 7, 8]).unwrap();
    /// assert_eq!(v1.try_add(&v2).unwrap(), Vector::from_vec(0, vec![12, 14, 16]).unwrap());
    /// ```
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |l, r| l + r)
    }

    /// Elementwise difference of two vectors of equal size.
    ///
    /// # Errors
    #[doc = errors_size_mismatch!()]
    ///
    /// # Examples
    /// ```
    /// use utmatrix::Vector;
    ///
    /// let v1 = Vector::from_vec(0, vec![2, 1, 8]).unwrap();
    /// let v2 = Vector::from_vec(0, vec![1, 2, 3]).unwrap();
    /// assert_eq!(v1.try_sub(&v2).unwrap(), Vector::from_vec(0, vec![1, -1, 5]).unwrap());
    /// ```
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |l, r| l - r)
    }

    /// Dot product of two vectors of equal size.
    ///
    /// # Errors
    #[doc = errors_size_mismatch!()]
    ///
    /// # Examples
    /// ```
    /// use utmatrix::Vector;
    ///
    /// let v1 = Vector::from_vec(0, vec![1, 2, 6]).unwrap();
    /// let v2 = Vector::from_vec(0, vec![1, 3, 2]).unwrap();
    /// assert_eq!(v1.dot(&v2), Ok(19));
    /// ```
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_same_size(other)?;
        Ok(self
            .data
            .iter()
            .zip_eq(other.data.iter())
            .fold(T::zero(), |acc, (l, r)| acc + l.clone() * r.clone()))
    }
}

// scalar operators can't fail, so they are exposed as plain operators
macro_rules! impl_scalar_op {
    ($tr:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $tr<T> for Vector<T> {
            type Output = Self;

            fn $method(mut self, rhs: T) -> Self::Output {
                self.data
                    .iter_mut()
                    .for_each(|x| *x = x.clone() $op rhs.clone());
                self
            }
        }

        impl<T: Scalar> $tr<&T> for Vector<T> {
            type Output = Self;

            fn $method(self, rhs: &T) -> Self::Output {
                self $op rhs.clone()
            }
        }

        impl<T: Scalar> $tr<T> for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: T) -> Self::Output {
                self.clone() $op rhs
            }
        }

        impl<T: Scalar> $tr<&T> for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &T) -> Self::Output {
                self.clone() $op rhs.clone()
            }
        }
    };
}

impl_scalar_op!(Add, add, +);
impl_scalar_op!(Sub, sub, -);
impl_scalar_op!(Mul, mul, *);
