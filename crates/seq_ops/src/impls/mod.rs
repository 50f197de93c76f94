mod slice;
mod vec;
mod vec_deque;
