use crate::{Error, Scalar, Vector};

impl<T> Vector<T> {
    /// Elements in storage order, starting at [`Vector::start_index`]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Iterate over `(index, element)` pairs, using external indices
    pub fn indexed_iter(&self) -> impl Iterator<Item = (usize, &T)> {
        (self.start_index..).zip(self.data.iter())
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> Vector<T> {
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

/// Indexed from zero
impl<T: Scalar> TryFrom<Vec<T>> for Vector<T> {
    type Error = Error;

    fn try_from(value: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(0, value)
    }
}

/// Indexed from zero
impl<T: Scalar> TryFrom<&[T]> for Vector<T> {
    type Error = Error;

    fn try_from(value: &[T]) -> Result<Self, Self::Error> {
        Self::from_vec(0, value.to_vec())
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
