//! Zero-or-one iteration. Fresh iterators on every call; a present carrier
//! yields exactly one element, an absent one yields none.

use crate::core::{NullOpt, Nullable};

/// Borrowing iterator over at most one element.
#[derive(Debug, Clone)]
pub struct Iter<'a, T: Nullable> {
    inner: Option<&'a T>,
}

impl<'a, T: Nullable> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<'a, T: Nullable> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T: Nullable> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.take()
    }
}
impl<'a, T: Nullable> core::iter::FusedIterator for Iter<'a, T> {}

/// Owning iterator over at most one element.
#[derive(Debug)]
pub struct IntoIter<T: Nullable> {
    inner: Option<T>,
}

impl<T: Nullable> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T: Nullable> ExactSizeIterator for IntoIter<T> {}
impl<T: Nullable> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.take()
    }
}
impl<T: Nullable> core::iter::FusedIterator for IntoIter<T> {}

impl<T: Nullable> NullOpt<T> {
    /// Borrowing iterator. Each call starts a fresh zero-or-one sequence.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref(),
        }
    }

    /// Materialize the zero-or-one sequence.
    #[cfg(feature = "alloc")]
    #[inline]
    pub fn to_vec(self) -> alloc::vec::Vec<T> {
        match self.to_option() {
            Some(value) => alloc::vec![value],
            None => alloc::vec::Vec::new(),
        }
    }
}

impl<T: Nullable> IntoIterator for NullOpt<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.to_option(),
        }
    }
}

impl<'a, T: Nullable> IntoIterator for &'a NullOpt<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
