use crate::{GrowableSequence, Sequence, SequenceMut};

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
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

impl<T> SequenceMut for Vec<T> {
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

// Front operations shift every element: O(n).
impl<T> GrowableSequence for Vec<T> {
    fn push_back(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn push_front(&mut self, value: T) {
        Vec::insert(self, 0, value);
    }

    fn pop_front(&mut self) -> Option<T> {
        if Vec::is_empty(self) {
            None
        } else {
            Some(Vec::remove(self, 0))
        }
    }

    fn extend_back<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        Extend::extend(self, iter);
    }

    fn replace_range<I: IntoIterator<Item = T>>(&mut self, start: usize, end: usize, items: I) {
        debug_assert!(start <= end && end <= Vec::len(self));
        drop(Vec::splice(self, start..end, items));
    }
}
