use std::ops::{Index, IndexMut};

use crate::{
    util::doc_macros::{errors_index_out_of_range, panic_index_operator},
    Error, Result, Vector,
};

impl<T> Vector<T> {
    /// Translate an external index into a storage offset
    fn locate(&self, index: isize) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|i| (self.start_index()..self.end_index()).contains(i))
            .map(|i| i - self.start_index())
            .ok_or_else(|| Error::index_out_of_range(index, self.start_index(), self.end_index()))
    }

    fn locate_or_panic(&self, index: usize) -> usize {
        let offset = isize::try_from(index)
            .ok()
            .and_then(|signed| self.locate(signed).ok());
        offset.unwrap_or_else(|| {
            panic!(
                "index {index} is out of range {}..{}",
                self.start_index(),
                self.end_index()
            )
        })
    }

    /// Borrow the element at `index`.
    ///
    /// # Errors
    #[doc = errors_index_out_of_range!()]
    ///
    /// # Examples
    /// ```
    /// use utmatrix::Vector;
    ///
    /// let v = Vector::from_vec(2, vec![7, 8]).unwrap();
    /// assert_eq!(v.get(3), Ok(&8));
    /// assert!(v.get(0).is_err());
    /// assert!(v.get(-5).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&T> {
        let offset = self.locate(index)?;
        Ok(&self.data[offset])
    }

    /// Mutably borrow the element at `index`.
    ///
    /// # Errors
    #[doc = errors_index_out_of_range!()]
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let offset = self.locate(index)?;
        Ok(&mut self.data[offset])
    }

    /// Overwrite the element at `index`. On error the vector is unchanged.
    ///
    /// # Errors
    #[doc = errors_index_out_of_range!()]
    ///
    /// # Examples
    /// ```
    /// use utmatrix::Vector;
    ///
    /// let mut v = Vector::<i32>::new(5).unwrap();
    /// v.set(2, 4).unwrap();
    /// assert_eq!(v.get(2), Ok(&4));
    /// assert!(v.set(5, 8).is_err());
    /// ```
    pub fn set(&mut self, index: isize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// # Panics
    #[doc = panic_index_operator!()]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[self.locate_or_panic(index)]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    /// # Panics
    #[doc = panic_index_operator!()]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let offset = self.locate_or_panic(index);
        &mut self.data[offset]
    }
}
