use std::cmp::Ordering;
use std::fmt::{self, Display};

/// A human-readable position in a source: a character offset together with its 1-based
/// line and column numbers.
///
/// `Location`s are ordered by `offset` alone, while equality and hashing consider all three
/// fields. Two locations with the same offset but different line or column numbers are
/// therefore order-equal without being equal. This can only happen when comparing
/// locations produced by different [`LocationIndex`](crate::LocationIndex)es, which is
/// not meaningful.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Location {
    offset: usize,
    line: usize,
    column: usize,
}

impl Location {
    /// Creates a new `Location`.
    ///
    /// # Panics
    ///
    /// In debug builds, if `line` or `column` is zero. Release builds do not check this.
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        debug_assert!(line >= 1, "lines are 1-based");
        debug_assert!(column >= 1, "columns are 1-based");
        Location {
            offset,
            line,
            column,
        }
    }

    /// Zero-based character offset into the source.
    pub fn offset(self) -> usize {
        self.offset
    }

    /// 1-based line number.
    pub fn line(self) -> usize {
        self.line
    }

    /// 1-based column number, counted in characters.
    pub fn column(self) -> usize {
        self.column
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start and end locations of a [`Span`](crate::Span).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SpanLocation {
    pub start: Location,
    /// Location one past the last character of the span.
    pub end: Location,
}

impl Display for SpanLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
