use std::fmt::Display;

use itertools::Itertools;

use crate::{util::doc_macros::errors_invalid_argument, Error, Result, Scalar};

mod conversions;
mod impl_num;
mod indexing;

/// A bounds-checked vector whose valid indices start at an arbitrary
/// non-negative offset.
///
/// Valid indices are `start_index..start_index + size`. The size is fixed at
/// construction and only changes through [`Vector::assign`].
#[derive(Debug)]
pub struct Vector<T> {
    start_index: usize,
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Largest size accepted by the constructors, see [`Scalar::MAX_VECTOR_SIZE`]
    pub const MAX_SIZE: usize = T::MAX_VECTOR_SIZE;

    /// Create a zero-initialized vector of `size` elements, indexed from zero.
    ///
    /// # Errors
    #[doc = errors_invalid_argument!("MAX_VECTOR_SIZE")]
    ///
    /// # Examples
    /// ```
    /// use utmatrix::Vector;
    ///
    /// let v = Vector::<i32>::new(3).unwrap();
    /// assert_eq!(v.size(), 3);
    /// assert_eq!(v.get(0), Ok(&0));
    ///
    /// assert!(Vector::<i32>::new(-5).is_err());
    /// assert!(Vector::<i32>::new(Vector::<i32>::MAX_SIZE + 1).is_err());
    /// ```
    pub fn new<S>(size: S) -> Result<Self>
    where
        S: TryInto<usize> + Display + Copy,
    {
        Self::with_start_index(size, 0)
    }

    /// Create a zero-initialized vector of `size` elements whose first valid
    /// index is `start_index`.
    ///
    /// # Errors
    #[doc = errors_invalid_argument!("MAX_VECTOR_SIZE")]
    ///
    /// # Examples
    /// ```
    /// use utmatrix::Vector;
    ///
    /// let v = Vector::<i32>::with_start_index(4, 2).unwrap();
    /// assert_eq!(v.start_index(), 2);
    /// assert!(v.get(1).is_err());
    /// assert!(v.get(5).is_ok());
    /// assert!(v.get(6).is_err());
    ///
    /// assert!(Vector::<i32>::with_start_index(5, -2).is_err());
    /// ```
    pub fn with_start_index<S, I>(size: S, start_index: I) -> Result<Self>
    where
        S: TryInto<usize> + Display + Copy,
        I: TryInto<usize> + Display + Copy,
    {
        let size = dimension(size, "size", Self::MAX_SIZE)?;
        let start_index = start_index.try_into().map_err(|_| {
            log::debug!("rejecting start index {{start_index: {start_index}}}");
            Error::invalid_argument(format!("start index must be non-negative, got {start_index}"))
        })?;
        Self::from_parts(start_index, vec![T::zero(); size])
    }

    /// Take ownership of `values`, indexing them from `start_index`.
    ///
    /// # Errors
    #[doc = errors_invalid_argument!("MAX_VECTOR_SIZE")]
    ///
    /// # Examples
    /// ```
    /// use utmatrix::Vector;
    ///
    /// let v = Vector::from_vec(1, vec![1, 2, 3]).unwrap();
    /// assert_eq!(v[1], 1);
    /// assert_eq!(v[3], 3);
    /// ```
    pub fn from_vec(start_index: usize, values: Vec<T>) -> Result<Self> {
        dimension(values.len(), "size", Self::MAX_SIZE)?;
        Self::from_parts(start_index, values)
    }

    fn from_parts(start_index: usize, data: Vec<T>) -> Result<Self> {
        if start_index.checked_add(data.len()).is_none()
            || isize::try_from(start_index + data.len()).is_err()
        {
            log::debug!(
                "rejecting index range {{start_index: {start_index}, size: {}}}",
                data.len()
            );
            return Err(Error::invalid_argument(
                "start index plus size exceeds the addressable range",
            ));
        }
        Ok(Self { start_index, data })
    }
}

impl<T> Vector<T> {
    /// Number of stored elements
    #[must_use]
    pub const fn size(&self) -> usize {
        self.data.len()
    }

    /// First valid index
    #[must_use]
    pub const fn start_index(&self) -> usize {
        self.start_index
    }

    /// One past the last valid index
    #[must_use]
    pub const fn end_index(&self) -> usize {
        self.start_index + self.size()
    }

    /// Wrap storage that is already known to satisfy the invariants.
    pub(crate) fn from_parts_unchecked(start_index: usize, data: Vec<T>) -> Self {
        debug_assert!(!data.is_empty());
        Self { start_index, data }
    }
}

impl<T: Clone> Vector<T> {
    /// Replace size, start index and contents with those of `other`,
    /// resizing if needed. Existing storage is reused where possible.
    ///
    /// # Examples
    /// ```
    /// use utmatrix::Vector;
    ///
    /// let v1 = Vector::<i32>::new(3).unwrap();
    /// let mut v2 = Vector::<i32>::new(4).unwrap();
    /// v2.assign(&v1);
    /// assert_eq!(v2.size(), 3);
    /// assert_eq!(v1, v2);
    /// ```
    pub fn assign(&mut self, other: &Self) {
        if self.size() != other.size() {
            log::trace!("resizing vector {{from: {}, to: {}}}", self.size(), other.size());
        }
        self.start_index = other.start_index;
        self.data.clone_from(&other.data);
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            start_index: self.start_index,
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

/// Vectors are equal when they have the same size and the same elements at
/// the same positions. The start index is not compared.
impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.data.iter().join(" "))
    }
}

/// Convert a user-provided dimension to `usize`, checking `0 < value <= max`.
pub(crate) fn dimension<S>(value: S, name: &str, max: usize) -> Result<usize>
where
    S: TryInto<usize> + Display + Copy,
{
    match value.try_into() {
        Ok(n) if n > 0 && n <= max => Ok(n),
        _ => {
            log::debug!("rejecting {name} {{{name}: {value}, max: {max}}}");
            Err(Error::invalid_argument(format!(
                "{name} must be in 1..={max}, got {value}"
            )))
        }
    }
}
