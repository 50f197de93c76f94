use crate::GrowableSequence;

pub fn push<S: GrowableSequence + ?Sized>(seq: &mut S, value: S::Item) {
    seq.push_back(value);
}

/// Removes the last element, or returns `None` when `seq` is empty.
pub fn pop<S: GrowableSequence + ?Sized>(seq: &mut S) -> Option<S::Item> {
    seq.pop_back()
}

/// Removes the first element, or returns `None` when `seq` is empty.
///
/// O(n) on a `Vec`, O(1) on a `VecDeque`.
pub fn shift<S: GrowableSequence + ?Sized>(seq: &mut S) -> Option<S::Item> {
    seq.pop_front()
}

/// Inserts `value` at the front. O(n) on a `Vec`, O(1) on a `VecDeque`.
pub fn unshift<S: GrowableSequence + ?Sized>(seq: &mut S, value: S::Item) {
    seq.push_front(value);
}
