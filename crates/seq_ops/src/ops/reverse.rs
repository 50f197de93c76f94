use crate::{Sequence, SequenceMut};

/// Reverses `seq` in place with `len / 2` swaps.
pub fn reverse<S: SequenceMut + ?Sized>(seq: &mut S) {
    let len = seq.len();
    if len < 2 {
        return;
    }

    let (mut l, mut r) = (0, len - 1);
    while l < r {
        seq.swap(l, r);
        l += 1;
        r -= 1;
    }
}

/// Returns a reversed copy; `seq` is left as is.
pub fn to_reversed<S>(seq: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    seq.iter().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    struct CountingSwaps {
        data: Vec<i32>,
        swaps: usize,
    }

    impl Sequence for CountingSwaps {
        type Item = i32;

        fn len(&self) -> usize {
            self.data.len()
        }

        fn get(&self, index: usize) -> Option<&i32> {
            self.data.as_slice().get(index)
        }

        fn iter(&self) -> impl DoubleEndedIterator<Item = &i32> + ExactSizeIterator {
            self.data.as_slice().iter()
        }

        fn range(
            &self,
            start: usize,
            end: usize,
        ) -> impl DoubleEndedIterator<Item = &i32> + ExactSizeIterator {
            self.data[start..end].iter()
        }
    }

    impl SequenceMut for CountingSwaps {
        fn get_mut(&mut self, index: usize) -> Option<&mut i32> {
            self.data.as_mut_slice().get_mut(index)
        }

        fn swap(&mut self, a: usize, b: usize) {
            self.swaps += 1;
            self.data.as_mut_slice().swap(a, b);
        }

        fn iter_mut(&mut self) -> impl Iterator<Item = &mut i32> {
            self.data.as_mut_slice().iter_mut()
        }
    }

    #[test]
    fn reverse_uses_half_len_swaps() {
        for n in 0..10 {
            let mut seq = CountingSwaps {
                data: (0..n).collect(),
                swaps: 0,
            };
            reverse(&mut seq);
            assert_eq!(seq.swaps, n as usize / 2, "n={n}");
            assert_eq!(seq.data, (0..n).rev().collect::<Vec<_>>());
        }
    }

    #[test]
    fn reverse_twice_restores() {
        let original = VecDeque::from(["a", "b", "c", "d", "e"]);
        let mut values = original.clone();
        reverse(&mut values);
        assert_eq!(values, ["e", "d", "c", "b", "a"]);
        reverse(&mut values);
        assert_eq!(values, original);
    }

    #[test]
    fn reverse_subslice() {
        let mut values = [1, 2, 3, 4, 5, 6];
        reverse(&mut values[1..5]);
        assert_eq!(values, [1, 5, 4, 3, 2, 6]);
    }

    #[test]
    fn to_reversed_copies() {
        let values = vec![1, 2, 3, 4];
        let reversed = to_reversed(&values);
        assert_eq!(values, [1, 2, 3, 4]);
        for (i, v) in reversed.iter().enumerate() {
            assert_eq!(*v, values[values.len() - 1 - i]);
        }
        assert_eq!(to_reversed(&reversed), values);
        assert!(to_reversed(&Vec::<u8>::new()).is_empty());
    }
}
