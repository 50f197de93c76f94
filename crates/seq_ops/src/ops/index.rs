use crate::{Sequence, SequenceMut};

/// Resolves a signed index against a sequence of length `len`.
///
/// - Non-negative indices are used as-is and must be `< len`.
/// - Negative indices count back from the end (`-1` is the last element).
/// - A negative index reaching past the front clamps to `0`.
///
/// Returns `None` for an empty sequence or a non-negative index past the end.
pub fn resolve_index(len: usize, index: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if index >= 0 {
        let index = index as usize;
        return (index < len).then_some(index);
    }
    Some(len.saturating_sub(index.unsigned_abs()))
}

pub fn at<S: Sequence + ?Sized>(seq: &S, index: isize) -> Option<&S::Item> {
    let index = resolve_index(seq.len(), index)?;
    seq.get(index)
}

pub fn at_mut<S: SequenceMut + ?Sized>(seq: &mut S, index: isize) -> Option<&mut S::Item> {
    let index = resolve_index(seq.len(), index)?;
    seq.get_mut(index)
}
