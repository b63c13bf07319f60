use ccdv::{record, to_vec, Encoder, Error};
use std::io::{self, Write};

#[test]
fn test_encode_table() {
    let cases: Vec<(Vec<Vec<&str>>, &str)> = vec![
        (vec![vec!["abc"]], "abc\x1e"),
        (vec![vec!["\"abc\""]], "\"abc\"\x1e"),
        (vec![vec!["a\"b"]], "a\"b\x1e"),
        (vec![vec!["\"a\"b\""]], "\"a\"b\"\x1e"),
        (vec![vec![" abc"]], " abc\x1e"),
        (vec![vec!["abc,def"]], "abc,def\x1e"),
        (vec![vec!["abc", "def"]], "abc\x1fdef\x1e"),
        (vec![vec!["abc"], vec!["def"]], "abc\x1edef\x1e"),
        (vec![vec!["abc\ndef"]], "abc\ndef\x1e"),
        (vec![vec!["abc\rdef"]], "abc\rdef\x1e"),
        (vec![vec![""]], "\x1e"),
        (vec![vec!["", ""]], "\x1f\x1e"),
        (vec![vec!["", "", ""]], "\x1f\x1f\x1e"),
        (vec![vec!["", "", "a"]], "\x1f\x1fa\x1e"),
        (vec![vec!["", "a", ""]], "\x1fa\x1f\x1e"),
        (vec![vec!["", "a", "a"]], "\x1fa\x1fa\x1e"),
        (vec![vec!["a", "", ""]], "a\x1f\x1f\x1e"),
        (vec![vec!["a", "", "a"]], "a\x1f\x1fa\x1e"),
        (vec![vec!["a", "a", ""]], "a\x1fa\x1f\x1e"),
        (vec![vec!["a", "a", "a"]], "a\x1fa\x1fa\x1e"),
        (vec![vec!["\\."]], "\\.\x1e"),
        (vec![vec!["a", "\x10dle"]], "a\x1f\x10dle\x1e"),
    ];

    for (n, (input, output)) in cases.into_iter().enumerate() {
        let got = to_vec(&input).unwrap();
        assert_eq!(got, output.as_bytes(), "#{}", n);
    }
}

#[test]
fn test_encode_binary_fields() {
    let got = to_vec([record![b"x09\x41\xb4\x1c", b"aktau"]].iter()).unwrap();
    assert_eq!(got, b"x09A\xb4\x1c\x1faktau\x1e");

    let got = to_vec([[&b",x09\x41\xb4\x1c"[..], &b"aktau"[..]]]).unwrap();
    assert_eq!(got, b",x09A\xb4\x1c\x1faktau\x1e");
}

#[test]
fn test_invalid_field_stops_encode_all() {
    let mut buffer = Vec::new();
    {
        let mut encoder = Encoder::new(&mut buffer);
        let err = encoder.encode_all([["fo\x1eo"]]).unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: 0, delimiter: 0x1E }));
        assert!(encoder.get_ref().is_empty());
    }
    assert!(buffer.is_empty());
}

#[test]
fn test_invalid_field_in_later_record_writes_nothing() {
    let mut sink = Vec::new();
    let err = ccdv::to_writer(&mut sink, [["a", "b"], ["c", "d\x1ee"]]).unwrap_err();
    assert!(matches!(err, Error::InvalidField { field: 1, delimiter: 0x1E }));
    assert!(sink.is_empty());
}

#[test]
fn test_unflushed_records_are_dropped() {
    let mut sink = Vec::new();
    {
        let mut encoder = Encoder::new(&mut sink);
        encoder.encode(["a", "b"]).unwrap();
        encoder.encode(["c"]).unwrap();
    }
    assert!(sink.is_empty());

    let mut encoder = Encoder::new(&mut sink);
    encoder.encode(["a", "b"]).unwrap();
    encoder.flush();
    drop(encoder);
    assert_eq!(sink, b"a\x1fb\x1e");
}

#[test]
fn test_group_separator_rejected() {
    let err = to_vec([["tables\x1dapart"]]).unwrap_err();
    assert!(matches!(err, Error::InvalidField { delimiter: 0x1D, .. }));
}

struct ErrorWriter;

impl Write for ErrorWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "Test"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_error() {
    let mut encoder = Encoder::new(Vec::new());
    encoder.encode(["abc"]).unwrap();
    encoder.flush();
    assert!(encoder.error().is_ok());

    let mut encoder = Encoder::new(ErrorWriter);
    encoder.encode(["abc"]).unwrap();
    encoder.flush();
    assert!(encoder.error().is_err());
}

#[test]
fn test_encode_all_reports_flush_fault() {
    let mut encoder = Encoder::new(ErrorWriter);
    let err = encoder.encode_all([["a", "b"]]).unwrap_err();
    assert_eq!(err.as_io().unwrap().kind(), io::ErrorKind::Other);
    assert!(encoder.into_inner().is_err());
}

#[test]
fn test_small_buffer_write_fault_is_sticky() {
    // A one-byte buffer forces the second byte straight to the writer.
    let mut encoder = Encoder::with_capacity(1, ErrorWriter);
    assert!(encoder.encode(["abc"]).unwrap_err().as_io().is_some());
    assert!(encoder.error().is_err());
}
