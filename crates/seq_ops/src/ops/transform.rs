use crate::{Sequence, SequenceMut};

/// Applies `f` to every `(index, element)` pair, in order.
pub fn map<S, O, F>(seq: &S, mut f: F) -> Vec<O>
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item) -> O,
{
    seq.iter().enumerate().map(|(i, e)| f(i, e)).collect()
}

/// Keeps the elements for which `f` returns `true`, in their original order.
pub fn filter<S, F>(seq: &S, mut f: F) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(usize, &S::Item) -> bool,
{
    seq.iter()
        .enumerate()
        .filter(|&(i, e)| f(i, e))
        .map(|(_, e)| e.clone())
        .collect()
}

pub fn for_each<S, F>(seq: &S, mut f: F)
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item),
{
    for (i, e) in seq.iter().enumerate() {
        f(i, e);
    }
}

pub fn for_each_mut<S, F>(seq: &mut S, mut f: F)
where
    S: SequenceMut + ?Sized,
    F: FnMut(usize, &mut S::Item),
{
    for (i, e) in seq.iter_mut().enumerate() {
        f(i, e);
    }
}

/// Left fold. The reducer receives `(accumulator, element, index, seq)`.
pub fn reduce<S, O, F>(seq: &S, mut reducer: F, initial: O) -> O
where
    S: Sequence + ?Sized,
    F: FnMut(O, &S::Item, usize, &S) -> O,
{
    seq.iter()
        .enumerate()
        .fold(initial, |acc, (i, e)| reducer(acc, e, i, seq))
}

/// `true` on the first match; `false` for an empty sequence.
pub fn some<S, F>(seq: &S, mut f: F) -> bool
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item) -> bool,
{
    seq.iter().enumerate().any(|(i, e)| f(i, e))
}

/// `false` on the first mismatch; `true` for an empty sequence.
pub fn every<S, F>(seq: &S, mut f: F) -> bool
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item) -> bool,
{
    seq.iter().enumerate().all(|(i, e)| f(i, e))
}
