// Use pretty_assertions for `assert_eq` diffs.
use pretty_assertions::assert_eq;

use linecol::{LocateError, Location, LocationIndex, Options, Span};

#[test]
fn mixed_line_breaks() {
    let index = LocationIndex::new("Line1\nLine2\r\nLine3\rLine4");

    assert_eq!(Ok(Location::new(6, 2, 1)), index.locate(6));
    assert_eq!(Ok(Location::new(11, 2, 6)), index.locate(11));
    assert_eq!(Ok(Location::new(12, 2, 7)), index.locate(12));
    assert_eq!(Ok(Location::new(13, 3, 1)), index.locate(13));
}

#[test]
fn consecutive_line_breaks() {
    let index = LocationIndex::with_options("Line1\n\nLine3", Options::new().with_caching(true));

    assert_eq!(Ok(Location::new(6, 2, 1)), index.locate(6));
    assert_eq!(Ok(Location::new(7, 3, 1)), index.locate(7));
    assert!(index.options().caching);
}

#[test]
fn end_of_source_boundary() {
    let source = "fn main() {}\n";
    let index = LocationIndex::new(source);

    assert_eq!(13, index.len());
    assert_eq!(Ok(Location::new(13, 2, 1)), index.locate(13));
    assert_eq!(
        Err(LocateError::OffsetOutOfRange { offset: 14, len: 13 }),
        index.locate(14)
    );
    assert_eq!(
        Err(LocateError::OffsetOutOfRange { offset: -1, len: 13 }),
        index.locate_signed(-1)
    );
}

#[test]
fn empty_source() {
    for index in &[LocationIndex::new(""), LocationIndex::cached("")] {
        assert_eq!(0, index.len());
        assert_eq!(Ok(Location::new(0, 1, 1)), index.locate(0));
        assert!(index.locate(1).is_err());
    }
}

#[test]
fn sorts_token_locations() {
    let index = LocationIndex::new("a = 1\nb = a + 2\r\nprint b");
    let mut locations: Vec<_> = [17, 0, 6, 10, 23]
        .iter()
        .map(|&offset| index.locate(offset).unwrap())
        .collect();
    locations.sort();

    let rendered: Vec<_> = locations.iter().map(ToString::to_string).collect();
    assert_eq!(vec!["1:1", "2:1", "2:5", "3:1", "3:7"], rendered);
}

#[test]
fn locates_spans() {
    let index = LocationIndex::new("one\r\ntwo");
    let span = index.locate_span(Span::new(2, 4)).unwrap();

    assert_eq!("1:3-2:2", span.to_string());
}
