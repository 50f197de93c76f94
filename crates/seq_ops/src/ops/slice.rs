use crate::Sequence;

/// Copies `[start, end)` out of `seq`.
///
/// `end` past the length is clamped to the length. An empty range, including
/// `start >= end` after clamping, yields an empty vector.
pub fn slice<S>(seq: &S, start: usize, end: usize) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let end = end.min(seq.len());
    if start >= end {
        return Vec::new();
    }
    seq.range(start, end).cloned().collect()
}
