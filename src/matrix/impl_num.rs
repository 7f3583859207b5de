// Implementation of matrix arithmetic, delegating to row arithmetic

use itertools::Itertools;

use crate::{util::doc_macros::errors_size_mismatch, Error, Matrix, Result, Scalar, Vector};

impl<T: Scalar> Matrix<T> {
    fn zip_rows(
        &self,
        other: &Self,
        f: impl Fn(&Vector<T>, &Vector<T>) -> Result<Vector<T>>,
    ) -> Result<Self> {
        if self.size() != other.size() {
            return Err(Error::size_mismatch(self.size(), other.size()));
        }
        // rows replaced through `row_mut` or `[]` may still differ in length
        let rows = self
            .rows
            .iter()
            .zip_eq(other.rows.iter())
            .map(|(l, r)| f(l, r))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rows: Vector::from_parts_unchecked(0, rows),
            lower: self.lower,
        })
    }

    /// Sum of two matrices of equal size. The result keeps the
    /// lower-triangle policy of `self`.
    ///
    /// # Errors
    #[doc = errors_size_mismatch!()]
    ///
    /// The rows are added pairwise, so a row that was replaced with a vector
    /// of another length also yields `SizeMismatch`, carrying the row sizes.
    ///
    /// # Examples
    /// ```
    /// use utmatrix::Matrix;
    ///
    /// let mut m1 = Matrix::<i32>::new(2).unwrap();
    /// let mut m2 = Matrix::<i32>::new(2).unwrap();
    /// m1[0][1] = 1;
    /// m2[0][1] = 2;
    /// assert_eq!(m1.try_add(&m2).unwrap()[0][1], 3);
    /// assert!(m1.try_add(&Matrix::new(3).unwrap()).is_err());
    /// ```
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_rows(other, Vector::try_add)
    }

    /// Difference of two matrices of equal size. The result keeps the
    /// lower-triangle policy of `self`.
    ///
    /// # Errors
    #[doc = errors_size_mismatch!()]
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_rows(other, Vector::try_sub)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::LowerTriangle;

    fn filled(size: usize, value: i32) -> Matrix<i32> {
        let mut m = Matrix::new(size).unwrap();
        for i in 0..size {
            m[i].iter_mut().for_each(|x| *x = value);
        }
        m
    }

    #[test]
    fn add_and_sub() {
        let m1 = filled(3, 1);
        let m2 = filled(3, 2);
        assert_eq!(m2.try_add(&m1).unwrap(), filled(3, 3));
        assert_eq!(m2.try_sub(&m1).unwrap(), filled(3, 1));
    }

    #[test]
    fn mismatched_sizes() {
        let m1 = filled(3, 1);
        let m2 = filled(4, 1);
        assert_eq!(m2.try_add(&m1), Err(Error::SizeMismatch { lhs: 4, rhs: 3 }));
        assert!(m2.try_sub(&m1).unwrap_err().is_size_mismatch());
        assert_eq!(m1, filled(3, 1));
    }

    #[test]
    fn replaced_row_is_a_size_mismatch() {
        let mut m1 = filled(3, 1);
        *m1.row_mut(0).unwrap() = Vector::new(5).unwrap();
        let m2 = filled(3, 1);
        assert_eq!(m1.try_add(&m2), Err(Error::SizeMismatch { lhs: 5, rhs: 3 }));
        assert!(m2.try_sub(&m1).unwrap_err().is_size_mismatch());
    }

    #[test]
    fn result_keeps_left_policy() {
        let l = Matrix::<i32>::with_policy(2, LowerTriangle::Symmetric).unwrap();
        let r = Matrix::<i32>::new(2).unwrap();
        let sum = l.try_add(&r).unwrap();
        assert_eq!(sum.lower_triangle(), LowerTriangle::Symmetric);
        let sum = r.try_add(&l).unwrap();
        assert_eq!(sum.lower_triangle(), LowerTriangle::Zero);
    }
}
