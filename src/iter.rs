//! Iterators over the zero-or-one values held by `Optional` and `Outcome`.
//!
//! Both families iterate the same way: `Present`/`Success` yields its value
//! once, `Absent`/`Failure` yields nothing. The iterators are built from a
//! borrowed or owned `Option`, so taking a new one from the same container
//! always restarts from the beginning.

use std::iter::FusedIterator;

/// An iterator over a reference to the contained value.
///
/// Created by `Optional::iter` and `Outcome::iter`.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    item: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(item: Option<&'a T>) -> Self {
        Self { item }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.item.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.item.is_some());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.item.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the contained value.
///
/// Created by the `IntoIterator` implementations of `Optional` and `Outcome`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    item: Option<T>,
}

impl<T> IntoIter<T> {
    pub(crate) const fn new(item: Option<T>) -> Self {
        Self { item }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.item.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.item.is_some());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.item.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
