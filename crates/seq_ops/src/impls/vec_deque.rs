use std::collections::VecDeque;

use crate::{GrowableSequence, Sequence, SequenceMut};

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        VecDeque::iter(self)
    }

    fn range(
        &self,
        start: usize,
        end: usize,
    ) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        VecDeque::range(self, start..end)
    }
}

impl<T> SequenceMut for VecDeque<T> {
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        VecDeque::iter_mut(self)
    }
}

impl<T> GrowableSequence for VecDeque<T> {
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    fn push_front(&mut self, value: T) {
        VecDeque::push_front(self, value);
    }

    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }

    fn extend_back<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        Extend::extend(self, iter);
    }

    fn replace_range<I: IntoIterator<Item = T>>(&mut self, start: usize, end: usize, items: I) {
        debug_assert!(start <= end && end <= VecDeque::len(self));
        let mut tail = VecDeque::split_off(self, end);
        VecDeque::truncate(self, start);
        Extend::extend(self, items);
        VecDeque::append(self, &mut tail);
    }
}
