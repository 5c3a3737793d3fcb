/// Splits `rows` into consecutive slices of at most `size` rows, preserving
/// order. The last chunk may be shorter. Empty input yields no chunks.
///
/// Sizes coming from user configuration are validated at client construction,
/// so a zero here is a programming error.
pub fn chunk<T>(rows: &[T], size: usize) -> std::slice::Chunks<'_, T> {
    assert!(size >= 1, "Chunk size must be at least 1");
    return rows.chunks(size);
}
