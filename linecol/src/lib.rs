//! Convert character offsets in a source into line and column numbers.
//!
//! Build a [`LocationIndex`] once per source, then look up as many offsets as needed:
//!
//! ```
//! use linecol::{Location, LocationIndex};
//!
//! let index = LocationIndex::new("Line1\n\nLine3");
//! assert_eq!(index.locate(6).unwrap(), Location::new(6, 2, 1));
//! assert_eq!(index.locate(7).unwrap(), Location::new(7, 3, 1));
//! assert!(index.locate(12).is_ok());
//! assert!(index.locate(13).is_err());
//! ```
//!
//! `\r\n`, `\n` and `\r` are all recognized as line breaks. Offsets and columns are counted
//! in `char`s.

#[doc(inline)]
pub use linecol_sourcemap::{LocateError, Location, LocationIndex, Options, Span, SpanLocation};
