use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

use itertools::Itertools;

use crate::{
    util::doc_macros::{errors_index_out_of_range, errors_invalid_argument, panic_index_operator},
    vector::dimension,
    Error, Result, Scalar, Vector,
};

mod impl_num;

/// How cells below the diagonal of a [`Matrix`] are read and written.
///
/// Only the upper triangle is stored, so a cell `(i, j)` with `j < i` has no
/// storage of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LowerTriangle {
    /// Lower cells read as zero and cannot be written
    #[default]
    Zero,

    /// Lower cells mirror the upper triangle, `(i, j)` is `(j, i)`
    Symmetric,
}

/// A square upper-triangular matrix.
///
/// Row `i` is a [`Vector`] of `size - i` elements whose start index is `i`,
/// so `m[i][j]` addresses column `j` directly and is only valid for
/// `i <= j < size`.
///
/// ```
/// use utmatrix::Matrix;
///
/// let mut m = Matrix::<i32>::new(3).unwrap();
/// m[0][2] = 3;
/// m[2][2] = 8;
/// assert_eq!(m[0].get(2), Ok(&3));
/// assert_eq!(m[2].size(), 1);
/// assert!(m[2].get(0).is_err());
/// ```
#[derive(Debug)]
pub struct Matrix<T> {
    rows: Vector<Vector<T>>,
    lower: LowerTriangle,
}

impl<T: Scalar> Matrix<T> {
    /// Largest dimension accepted by the constructors, see [`Scalar::MAX_MATRIX_SIZE`]
    pub const MAX_SIZE: usize = T::MAX_MATRIX_SIZE;

    /// Create a zero-initialized `size` x `size` matrix whose lower triangle
    /// reads as zero.
    ///
    /// # Errors
    #[doc = errors_invalid_argument!("MAX_MATRIX_SIZE")]
    pub fn new<S>(size: S) -> Result<Self>
    where
        S: TryInto<usize> + Display + Copy,
    {
        Self::with_policy(size, LowerTriangle::default())
    }

    /// Create a zero-initialized `size` x `size` matrix with the given
    /// lower-triangle policy.
    ///
    /// # Errors
    #[doc = errors_invalid_argument!("MAX_MATRIX_SIZE")]
    ///
    /// # Examples
    /// ```
    /// use utmatrix::{LowerTriangle, Matrix};
    ///
    /// let mut m = Matrix::<i32>::with_policy(3, LowerTriangle::Symmetric).unwrap();
    /// m.set(0, 2, 5).unwrap();
    /// assert_eq!(m.get(2, 0), Ok(5));
    /// ```
    pub fn with_policy<S>(size: S, lower: LowerTriangle) -> Result<Self>
    where
        S: TryInto<usize> + Display + Copy,
    {
        let size = dimension(size, "size", Self::MAX_SIZE)?;
        log::trace!(
            "allocating triangular matrix {{size: {size}, elements: {}, lower: {lower:?}}}",
            size * (size + 1) / 2
        );
        let rows = (0..size)
            .map(|i| Vector::with_start_index(size - i, i))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rows: Vector::from_parts_unchecked(0, rows),
            lower,
        })
    }

    /// Read the cell at row `i`, column `j`, applying the lower-triangle
    /// policy when `j < i`.
    ///
    /// # Errors
    #[doc = errors_index_out_of_range!()]
    pub fn get(&self, i: isize, j: isize) -> Result<T> {
        match self.stored_cell(i, j)? {
            Some((r, c)) => self.rows[r].get(c).cloned(),
            None => Ok(T::zero()),
        }
    }

    /// Write the cell at row `i`, column `j`. With [`LowerTriangle::Zero`]
    /// cells below the diagonal are not writable.
    ///
    /// # Errors
    #[doc = errors_index_out_of_range!()]
    pub fn set(&mut self, i: isize, j: isize, value: T) -> Result<()> {
        match self.stored_cell(i, j)? {
            Some((r, c)) => self.rows[r].set(c, value),
            // `i` was validated above, row `i` holds columns `i..size`
            None => Err(Error::index_out_of_range(j, i.unsigned_abs(), self.size())),
        }
    }

    /// Validate `(i, j)` and find where it is stored, if anywhere, as a
    /// row offset and the column index within that row
    fn stored_cell(&self, i: isize, j: isize) -> Result<Option<(usize, isize)>> {
        let n = self.size();
        let check = |k: isize| {
            usize::try_from(k)
                .ok()
                .filter(|k| *k < n)
                .ok_or_else(|| Error::index_out_of_range(k, 0, n))
        };
        let (row_i, row_j) = (check(i)?, check(j)?);
        if j >= i {
            return Ok(Some((row_i, j)));
        }
        match self.lower {
            LowerTriangle::Zero => Ok(None),
            LowerTriangle::Symmetric => Ok(Some((row_j, i))),
        }
    }
}

impl<T> Matrix<T> {
    /// Number of rows, which is also the number of columns
    #[must_use]
    pub const fn size(&self) -> usize {
        self.rows.size()
    }

    #[must_use]
    pub const fn lower_triangle(&self) -> LowerTriangle {
        self.lower
    }

    /// Borrow row `i`, which holds columns `i..size`.
    ///
    /// # Errors
    #[doc = errors_index_out_of_range!()]
    pub fn row(&self, i: isize) -> Result<&Vector<T>> {
        self.rows.get(i)
    }

    /// Mutably borrow row `i`, which holds columns `i..size`.
    ///
    /// Replacing the row with a vector of another size or start index makes
    /// the cells it no longer covers unreachable: [`Matrix::get`] and
    /// [`Matrix::set`] report them as out of range, and pairwise operations
    /// report the row's size mismatch.
    ///
    /// # Errors
    #[doc = errors_index_out_of_range!()]
    pub fn row_mut(&mut self, i: isize) -> Result<&mut Vector<T>> {
        self.rows.get_mut(i)
    }

    pub fn rows(&self) -> std::slice::Iter<'_, Vector<T>> {
        self.rows.iter()
    }
}

impl<T: Clone> Matrix<T> {
    /// Replace the size, policy and contents with those of `other`, reusing
    /// row storage where possible.
    ///
    /// ```
    /// use utmatrix::Matrix;
    ///
    /// let m1 = Matrix::<i32>::new(3).unwrap();
    /// let mut m2 = Matrix::<i32>::new(4).unwrap();
    /// m2.assign(&m1);
    /// assert_eq!(m2.size(), 3);
    /// assert_eq!(m1, m2);
    /// ```
    pub fn assign(&mut self, other: &Self) {
        self.rows.assign(&other.rows);
        self.lower = other.lower;
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            lower: self.lower,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

/// Matrices are equal when they have the same size and equal rows. The
/// lower-triangle policy is not compared.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T> Index<usize> for Matrix<T> {
    type Output = Vector<T>;

    /// # Panics
    #[doc = panic_index_operator!()]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    /// # Panics
    #[doc = panic_index_operator!()]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

/// One row per line, with the lower triangle filled in according to the
/// policy. Fails if a replaced row no longer covers its columns.
impl<T: Scalar + Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = isize::try_from(self.size()).map_err(|_| std::fmt::Error)?;
        for i in 0..n {
            if i > 0 {
                writeln!(f)?;
            }
            let cells = (0..n)
                .map(|j| self.get(i, j))
                .collect::<Result<Vec<_>>>()
                .map_err(|_| std::fmt::Error)?;
            write!(f, "{}", cells.iter().join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rows_shrink() {
        let m = Matrix::<i32>::new(4).unwrap();
        for (i, row) in m.rows().enumerate() {
            assert_eq!(row.size(), 4 - i);
            assert_eq!(row.start_index(), i);
        }
    }

    #[test]
    fn rejects_bad_sizes() {
        assert!(Matrix::<i32>::new(0).unwrap_err().is_invalid_argument());
        assert!(Matrix::<i32>::new(-5).unwrap_err().is_invalid_argument());
        assert!(Matrix::<i32>::new(Matrix::<i32>::MAX_SIZE + 1)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn row_access() {
        let mut m = Matrix::<i32>::new(3).unwrap();
        m.row_mut(1).unwrap().set(2, 7).unwrap();
        assert_eq!(m.row(1).unwrap().get(2), Ok(&7));
        assert!(m.row(3).unwrap_err().is_index_out_of_range());
        assert!(m.row(-1).unwrap_err().is_index_out_of_range());
    }

    #[test]
    fn zero_policy() {
        let mut m = Matrix::<i32>::new(3).unwrap();
        m.set(0, 1, 4).unwrap();
        assert_eq!(m.get(0, 1), Ok(4));
        assert_eq!(m.get(1, 0), Ok(0));
        assert_eq!(m.set(1, 0, 4), Err(Error::index_out_of_range(0, 1, 3)));
        assert!(m.get(3, 0).unwrap_err().is_index_out_of_range());
        assert!(m.get(0, -1).unwrap_err().is_index_out_of_range());
    }

    #[test]
    fn symmetric_policy() {
        let mut m = Matrix::<i32>::with_policy(3, LowerTriangle::Symmetric).unwrap();
        m.set(2, 1, 9).unwrap();
        assert_eq!(m[1][2], 9);
        assert_eq!(m.get(2, 1), Ok(9));
    }

    #[test]
    fn assign_adopts_policy() {
        let src = Matrix::<i32>::with_policy(2, LowerTriangle::Symmetric).unwrap();
        let mut dst = Matrix::<i32>::new(5).unwrap();
        dst.clone_from(&src);
        assert_eq!(dst.size(), 2);
        assert_eq!(dst.lower_triangle(), LowerTriangle::Symmetric);
    }

    #[test]
    fn replaced_row_reports_errors() {
        let mut m = Matrix::<i32>::new(3).unwrap();
        m[1] = Vector::new(1).unwrap();

        assert_eq!(m.get(1, 1), Err(Error::index_out_of_range(1, 0, 1)));
        assert!(m.set(1, 2, 5).unwrap_err().is_index_out_of_range());
        assert_eq!(m.get(0, 1), Ok(0));

        let mut out = String::new();
        assert!(std::fmt::write(&mut out, format_args!("{m}")).is_err());
    }

    #[test]
    fn display() {
        let mut m = Matrix::<i32>::new(3).unwrap();
        m[0][0] = 1;
        m[0][2] = 3;
        m[1][1] = 1;
        m[2][2] = 8;
        assert_eq!(m.to_string(), "1 0 3\n0 1 0\n0 0 8");

        let mut s = Matrix::<i32>::with_policy(2, LowerTriangle::Symmetric).unwrap();
        s[0][1] = 5;
        assert_eq!(s.to_string(), "0 5\n5 0");
    }
}
