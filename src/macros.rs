/// Builds a [`Record`](crate::Record) from field expressions.
///
/// Each field may be anything that implements `AsRef<[u8]>`: string literals,
/// byte strings, `String`, `Vec<u8>`.
///
/// ```rust
/// use ccdv::record;
///
/// let name = String::from("Alice");
/// let r = record!["id", name, b"\x00\xff"];
/// assert_eq!(r.len(), 3);
/// assert_eq!(r.get(1), Some(&b"Alice"[..]));
///
/// assert!(record![].is_empty());
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };

    ($($field:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(
            record.push_field(::core::convert::AsRef::<[u8]>::as_ref(&$field));
        )+
        record
    }};
}
