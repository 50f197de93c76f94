/// Read access to an ordered, 0-indexed sequence.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn iter(&self) -> impl DoubleEndedIterator<Item = &Self::Item> + ExactSizeIterator;

    /// Iterates `[start, end)`. Panics unless `start <= end <= len`.
    fn range(
        &self,
        start: usize,
        end: usize,
    ) -> impl DoubleEndedIterator<Item = &Self::Item> + ExactSizeIterator;
}

/// Write access that never changes the length.
pub trait SequenceMut: Sequence {
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Panics if either index is out of range.
    fn swap(&mut self, a: usize, b: usize);

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut Self::Item>;
}

/// Length-changing access at both ends and in the middle.
///
/// - `pop_back` / `pop_front` return `None` on an empty sequence.
/// - `replace_range` expects `start <= end <= len` and puts `items` where
///   `[start, end)` used to be.
pub trait GrowableSequence: SequenceMut {
    fn push_back(&mut self, value: Self::Item);
    fn pop_back(&mut self) -> Option<Self::Item>;
    fn push_front(&mut self, value: Self::Item);
    fn pop_front(&mut self) -> Option<Self::Item>;

    fn extend_back<I: IntoIterator<Item = Self::Item>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }

    fn replace_range<I: IntoIterator<Item = Self::Item>>(
        &mut self,
        start: usize,
        end: usize,
        items: I,
    );
}
