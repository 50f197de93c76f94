use crate::{Sequence, SequenceMut};

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        <[T]>::iter(self)
    }

    fn range(
        &self,
        start: usize,
        end: usize,
    ) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        <[T]>::iter(&self[start..end])
    }
}

impl<T> SequenceMut for [T] {
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        <[T]>::iter_mut(self)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self.as_slice(), index)
    }

    fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        <[T]>::iter(self.as_slice())
    }

    fn range(
        &self,
        start: usize,
        end: usize,
    ) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        <[T]>::iter(&self.as_slice()[start..end])
    }
}

impl<T, const N: usize> SequenceMut for [T; N] {
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self.as_mut_slice(), index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self.as_mut_slice(), a, b);
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        <[T]>::iter_mut(self.as_mut_slice())
    }
}
