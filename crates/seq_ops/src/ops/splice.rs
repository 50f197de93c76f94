use crate::{GrowableSequence, Sequence};

/// Removes up to `delete_count` elements starting at `start` and inserts
/// `items` in their place.
///
/// - `delete_count == 0` with no items leaves `seq` untouched.
/// - `start >= len` deletes nothing and appends `items`.
/// - `delete_count` is clamped so deletion stops at the end.
pub fn splice<S, I>(seq: &mut S, start: usize, delete_count: usize, items: I)
where
    S: GrowableSequence + ?Sized,
    I: IntoIterator<Item = S::Item>,
{
    let mut items = items.into_iter().peekable();
    if delete_count == 0 && items.peek().is_none() {
        return;
    }

    let len = seq.len();
    if start >= len {
        seq.extend_back(items);
        return;
    }

    let delete_count = delete_count.min(len - start);
    seq.replace_range(start, start + delete_count, items);
}

/// Same as [`splice`], applied to a fresh copy of `seq`.
pub fn to_spliced<S, I>(seq: &S, start: usize, delete_count: usize, items: I) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    I: IntoIterator<Item = S::Item>,
{
    let mut out: Vec<S::Item> = seq.iter().cloned().collect();
    splice(&mut out, start, delete_count, items);
    out
}
