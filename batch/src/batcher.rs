use std::num::NonZeroUsize;

/// Split `items` into contiguous chunks of at most `max_per_chunk` items.
///
/// Only the last chunk may be shorter, and an empty input yields no chunk.
pub fn chunk<T>(items: &[T], max_per_chunk: NonZeroUsize) -> std::slice::Chunks<'_, T> {
    items.chunks(max_per_chunk.get())
}

/// Number of chunks [`chunk`] produces for `len` items.
pub fn chunk_count(len: usize, max_per_chunk: NonZeroUsize) -> usize {
    len.div_ceil(max_per_chunk.get())
}

/// Build one operation per chunk of `items`, in chunk order.
///
/// `make_operation` is called synchronously for each chunk before this
/// function returns; the operations themselves are not awaited here.
pub fn batch<T, F, Op>(items: &[T], max_per_chunk: NonZeroUsize, make_operation: F) -> Vec<Op>
where
    F: FnMut(&[T]) -> Op,
{
    chunk(items, max_per_chunk).map(make_operation).collect()
}
