use std::convert::TryFrom;
use std::ops::Range;

use hashbrown::HashMap;
use parking_lot::Mutex;

use crate::{LocateError, Location, Options, Span, SpanLocation};

/// Maps character offsets in a single source to [`Location`]s.
///
/// The index is built once per source by recording the offset at which every line begins.
/// `\r\n`, lone `\n` and lone `\r` are all recognized as line breaks, with `\r\n` counting
/// as a single break. Lookups then binary-search the line starts, so each costs
/// O(log lines).
///
/// With [`Options::caching`] enabled, lookup results are additionally memoized by offset.
/// The cache is guarded by a mutex, so an index can be shared between threads either way.
#[derive(Debug)]
pub struct LocationIndex {
    len: usize,

    /// Offset of the first character of every line. Never empty, starts with 0, and
    /// is strictly increasing.
    line_starts: Vec<usize>,

    options: Options,
    cache: Option<Mutex<HashMap<usize, Location>>>,
}

impl LocationIndex {
    /// Builds an index over `source` with the default options.
    pub fn new(source: &str) -> Self {
        Self::with_options(source, Options::default())
    }

    /// Builds an index over `source` that memoizes lookups.
    pub fn cached(source: &str) -> Self {
        Self::with_options(source, Options::cached())
    }

    pub fn with_options(source: &str, options: Options) -> Self {
        let mut line_starts = vec![0];
        let mut len = 0;

        let mut chars = source.chars().peekable();
        while let Some(c) = chars.next() {
            len += 1;
            match c {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                        len += 1;
                    }
                    line_starts.push(len);
                }
                '\n' => line_starts.push(len),
                _ => {}
            }
        }

        tracing::debug!(
            len,
            lines = line_starts.len(),
            caching = options.caching,
            "built location index"
        );

        let cache = if options.caching {
            Some(Mutex::new(HashMap::new()))
        } else {
            None
        };

        LocationIndex {
            len,
            line_starts,
            options,
            cache,
        }
    }

    /// Returns the `Location` of the character at `offset`.
    ///
    /// `offset` may be equal to [`len`](Self::len), in which case the location just past the
    /// last character is returned.
    ///
    /// # Errors
    ///
    /// [`LocateError::OffsetOutOfRange`] if `offset` is greater than the source length.
    pub fn locate(&self, offset: usize) -> Result<Location, LocateError> {
        if let Some(cache) = &self.cache {
            if let Some(location) = cache.lock().get(&offset).copied() {
                tracing::trace!(offset, "location cache hit");
                return Ok(location);
            }
        }

        let location = self.compute(offset)?;

        if let Some(cache) = &self.cache {
            cache.lock().insert(offset, location);
        }

        Ok(location)
    }

    /// Same as [`locate`](Self::locate), for callers that track offsets as signed integers.
    ///
    /// # Errors
    ///
    /// [`LocateError::OffsetOutOfRange`] if `offset` is negative or greater than the source
    /// length.
    pub fn locate_signed(&self, offset: i64) -> Result<Location, LocateError> {
        let unsigned = usize::try_from(offset).map_err(|_| {
            tracing::debug!(offset, len = self.len, "negative offset rejected");
            LocateError::out_of_range(offset, self.len)
        })?;
        self.locate(unsigned)
    }

    /// Returns the locations of the start and the end of `span`.
    ///
    /// # Errors
    ///
    /// [`LocateError::OffsetOutOfRange`] if the span extends past the end of the source.
    pub fn locate_span(&self, span: Span) -> Result<SpanLocation, LocateError> {
        let start = self.locate(span.base)?;
        let end = span
            .end()
            .ok_or_else(|| LocateError::out_of_range(i64::MAX, self.len))?;

        Ok(SpanLocation {
            start,
            end: self.locate(end)?,
        })
    }

    fn compute(&self, offset: usize) -> Result<Location, LocateError> {
        if offset > self.len {
            tracing::debug!(offset, len = self.len, "offset out of range");
            let offset = i64::try_from(offset).unwrap_or(i64::MAX);
            return Err(LocateError::out_of_range(offset, self.len));
        }

        // `line_starts[0] == 0 <= offset`, so `Err(0)` is impossible.
        let line_index = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };

        let column = offset - self.line_starts[line_index] + 1;
        Ok(Location::new(offset, line_index + 1, column))
    }

    /// Number of characters in the source.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of lines in the source. This is always at least 1.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }

    /// Returns the offset of the first character of the 1-based `line`.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        let idx = line.checked_sub(1)?;
        self.line_starts.get(idx).copied()
    }

    /// Returns the range of offsets covered by the 1-based `line`, including its line break.
    pub fn line_range(&self, line: usize) -> Option<Range<usize>> {
        let start = self.line_start(line)?;
        let end = self.line_starts.get(line).copied().unwrap_or(self.len);
        Some(start..end)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn is_caching(&self) -> bool {
        self.cache.is_some()
    }
}
