pub const CHUNK_SIZE: usize = 500;

/// Splits `items` into contiguous, non-overlapping groups of `size`. Only the
/// last group can be shorter. An empty input gives no groups.
pub fn chunk<T>(items: &[T], size: usize) -> Vec<&[T]> {
    assert!(size > 0, "chunk size must be positive");
    items.chunks(size).collect()
}
