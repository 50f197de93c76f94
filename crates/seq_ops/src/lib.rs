//! Array-method style operations over ordered sequences.
//!
//! Every operation is a free function generic over the traits in [`traits`]:
//!
//! - read-only operations take `&S` and return an owned `Vec`;
//! - in-place operations take `&mut S` and mutate the caller's sequence.
//!
//! `[T]`, `[T; N]`, `Vec<T>` and `VecDeque<T>` implement the read and
//! fixed-length write traits; `Vec<T>` and `VecDeque<T>` are also growable.

mod impls;
mod ops;

pub mod traits;

pub use ops::{
    at, at_mut, every, filter, for_each, for_each_mut, map, pop, push, reduce, resolve_index,
    reverse, shift, slice, some, splice, to_reversed, to_spliced, unshift,
};
pub use traits::{GrowableSequence, Sequence, SequenceMut};
