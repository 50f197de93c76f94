mod index;
mod reverse;
mod slice;
mod splice;
mod stack;
mod transform;

pub use index::{at, at_mut, resolve_index};
pub use reverse::{reverse, to_reversed};
pub use slice::slice;
pub use splice::{splice, to_spliced};
pub use stack::{pop, push, shift, unshift};
pub use transform::{every, filter, for_each, for_each_mut, map, reduce, some};
