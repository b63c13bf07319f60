//! Property-based tests for the encode/decode round trip.

use ccdv::delim::is_reserved;
use ccdv::{from_slice, to_vec, Record};
use proptest::prelude::*;

fn field() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>().prop_filter("reserved", |b| !is_reserved(*b)), 0..16)
}

fn record() -> impl Strategy<Value = Record> {
    prop::collection::vec(field(), 1..8)
        .prop_filter("decodes as blank or comment", |fields| {
            let first = &fields[0];
            !(fields.len() == 1 && first.is_empty()) && first.first() != Some(&0x10)
        })
        .prop_map(Record::from)
}

proptest! {
    #[test]
    fn prop_round_trip(records in prop::collection::vec(record(), 0..10)) {
        let bytes = to_vec(&records).unwrap();
        let decoded = from_slice(&bytes).unwrap();
        prop_assert_eq!(decoded, records);
    }

    #[test]
    fn prop_reserved_byte_rejected(
        prefix in field(),
        sep in prop::sample::select(vec![0x1Du8, 0x1E, 0x1F]),
    ) {
        let mut bad = prefix;
        bad.push(sep);
        prop_assert!(to_vec([[bad]]).unwrap_err().is_invalid_field());
    }
}
