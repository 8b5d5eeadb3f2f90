//! Source-mapping for `linecol`.
//!
//! This crate is mostly intended to be an internal dependency of the
//! [`linecol`](https://github.com/linecol-rs/linecol) project. End users are expected to use
//! `linecol`, the user-facing API, instead of depending on this crate directly.
//!
//! Lexers and parsers track positions as flat character offsets into a single source buffer.
//! This is cheap to carry around, but offsets are meaningless to a human reading an error
//! message. `linecol_sourcemap` contains the facility for converting character offsets into
//! 1-based line and column numbers.
//!
//! ```
//! use linecol_sourcemap::{Location, LocationIndex};
//!
//! let index = LocationIndex::new("Line1\nLine2\r\nLine3\rLine4");
//! assert_eq!(index.locate(13).unwrap(), Location::new(13, 3, 1));
//! assert_eq!(index.locate(13).unwrap().to_string(), "3:1");
//! ```

mod error;
mod index;
mod location;
mod options;
mod span;

#[doc(inline)]
pub use error::LocateError;
#[doc(inline)]
pub use index::LocationIndex;
#[doc(inline)]
pub use location::{Location, SpanLocation};
#[doc(inline)]
pub use options::Options;
#[doc(inline)]
pub use span::Span;
