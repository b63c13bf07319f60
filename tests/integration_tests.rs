use ccdv::{
    from_reader, from_slice, from_str, record, to_string, to_vec, to_writer, Decoder,
    DecoderOptions, Encoder, Error, FieldCount, Record,
};
use std::borrow::Cow;
use std::io::Cursor;

#[test]
fn test_round_trip_awkward_text() {
    let records = vec![
        record!["id", "body", "signature"],
        record!["1", "Dear Bob,\r\n\r\n\"Hi\"\n", "-- a"],
        record!["2", "", "tab\there, comma"],
        record!["3", "\x10dle mid-record", "\x1cfile sep\x00nul"],
    ];

    let encoded = to_string(&records).unwrap();
    println!("Encoded: {:?}", encoded);

    let decoded = from_str(&encoded).unwrap();
    assert_eq!(decoded, records);
}

#[test]
fn test_round_trip_binary() {
    let records = vec![record![b"\xff\xfe\x00", b"x09\x41\xb4\x1c"], record![b"", b"\x80"]];
    let decoded = from_slice(&to_vec(&records).unwrap()).unwrap();
    assert_eq!(decoded, records);
}

#[test]
fn test_to_writer_from_reader() {
    let mut buffer = Vec::new();
    to_writer(&mut buffer, vec![vec!["a", "b"], vec!["c", "d"]]).unwrap();

    let records = from_reader(Cursor::new(buffer)).unwrap();
    assert_eq!(records, vec![record!["a", "b"], record!["c", "d"]]);
}

#[test]
fn test_stream_with_inferred_count() {
    let mut encoder = Encoder::new(Vec::new());
    encoder.encode(["name", "qty"]).unwrap();
    encoder.encode(["widget", "2"]).unwrap();
    encoder.encode(["gadget"]).unwrap();
    let bytes = encoder.into_inner().unwrap();

    let options = DecoderOptions::new().with_field_count(FieldCount::Infer);
    let mut decoder = Decoder::with_options(&bytes[..], options);

    let mut accepted = Vec::new();
    let fault = loop {
        match decoder.decode() {
            Ok(Some(record)) => accepted.push(record.into_owned()),
            Ok(None) => panic!("Expected a field count error"),
            Err(err) => break err,
        }
    };

    assert_eq!(accepted.len(), 2);
    match fault {
        Error::Parse(err) => {
            assert_eq!(err.start_line, 3);
            assert_eq!(err.line, 3);
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
    assert!(decoder.decode().unwrap().is_none());
}

#[test]
fn test_end_of_stream_repeats() {
    let mut decoder = Decoder::new(&b"a\x1fb\x1fc"[..]);
    assert_eq!(*decoder.decode().unwrap().unwrap(), ["a", "b", "c"]);
    assert!(decoder.decode().unwrap().is_none());
    assert!(decoder.decode().unwrap().is_none());
}

#[test]
fn test_reuse_record_overwrites() {
    let options = DecoderOptions::new().with_reuse_record(true);
    let mut decoder = Decoder::with_options(&b"a\x1fb\x1ec"[..], options);

    let mut seen: Vec<Record> = Vec::new();
    while let Some(record) = decoder.decode().unwrap() {
        assert!(matches!(record, Cow::Borrowed(_)));
        seen.push(record.into_owned());
    }
    assert_eq!(seen, vec![record!["a", "b"], record!["c"]]);
}

#[test]
fn test_options_from_json() {
    let options: DecoderOptions = serde_json::from_str(
        r#"{ "field_count": "infer", "trim_leading_space": true }"#,
    )
    .unwrap();
    assert_eq!(options.field_count, FieldCount::Infer);
    assert!(options.trim_leading_space);
    assert!(!options.reuse_record);

    let json = serde_json::to_string(&DecoderOptions::new().with_field_count(FieldCount::Exact(3)))
        .unwrap();
    let back: DecoderOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back.field_count, FieldCount::Exact(3));

    let defaults: DecoderOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, DecoderOptions::default());
}

#[test]
fn test_utf8_views() {
    let records = from_slice(b"caf\xc3\xa9\x1f\xb4").unwrap();
    assert_eq!(records[0].get_str(0).unwrap(), Some("caf\u{e9}"));
    assert!(records[0].get_str(1).is_err());
    assert!(records[0].to_string_vec().is_err());
}
