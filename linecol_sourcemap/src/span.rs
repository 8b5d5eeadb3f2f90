/// A range of characters in a source, as a base offset and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Span {
    pub base: usize,
    pub len: usize,
}

impl Span {
    pub fn new(base: usize, len: usize) -> Self {
        Span { base, len }
    }

    /// Offset one past the last character in the span, or `None` if it does not fit in
    /// a `usize`.
    pub fn end(self) -> Option<usize> {
        self.base.checked_add(self.len)
    }
}
