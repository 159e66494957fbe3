/// Cursor-style iteration over an ordered key source.
///
/// Unlike [`Iterator`], a cursor can be repositioned: `seek` jumps to the
/// first key `>= target` and iteration continues from there. The skip
/// list's [`SkipListIterator`](crate::SkipListIterator) implements this.
pub trait KeyCursor {
    /// The key under the cursor, or `None` once it has run off the end.
    fn key(&self) -> Option<i64>;

    /// Returns true if the cursor is positioned at a valid entry.
    fn is_valid(&self) -> bool {
        self.key().is_some()
    }

    /// Advances to the next key. A no-op once the cursor is invalid.
    fn next(&mut self);

    /// Positions the cursor at the first key >= target.
    fn seek(&mut self, key: i64);

    /// Positions the cursor at the smallest key.
    fn seek_to_first(&mut self);
}
