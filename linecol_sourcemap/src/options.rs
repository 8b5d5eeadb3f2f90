/// Construction-time settings of a [`LocationIndex`](crate::LocationIndex).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Options {
    /// Whether lookups are memoized by offset for the lifetime of the index.
    ///
    /// Cached and uncached lookups always produce equal results. The cache never shrinks,
    /// so it only pays off when the same offsets are looked up repeatedly.
    pub caching: bool,
}

impl Options {
    /// Returns the default options, with caching disabled. Same as `Default::default`.
    pub fn new() -> Self {
        Options { caching: false }
    }

    /// Returns options with caching enabled.
    pub fn cached() -> Self {
        Options { caching: true }
    }

    pub fn with_caching(mut self, caching: bool) -> Self {
        self.caching = caching;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caching_is_off_by_default() {
        assert!(!Options::default().caching);
        assert_eq!(Options::cached(), Options::new().with_caching(true));
    }
}
