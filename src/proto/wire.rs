//! Minimal protobuf wire primitives.
//!
//! Only the subset the schema encoder needs: unsigned varints, tagged
//! varint fields, and tagged length-delimited fields. Every operation is an
//! append-only transformation on a growable buffer; nothing here reads,
//! rewinds, or fails.

/// Wire type for varint-encoded scalar fields.
pub const WIRE_VARINT: u64 = 0;

/// Wire type for length-delimited fields (strings, bytes, submessages).
pub const WIRE_LEN: u64 = 2;

/// Append `value` using base-128 continuation encoding.
///
/// Least-significant 7 bits first, high bit of each byte signalling that
/// more bytes follow. Correct for the full u64 range even though callers
/// only pass small field tags and lengths.
pub fn put_uvarint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

/// Append a field tag: `(field_number << 3) | wire_type`, varint-encoded.
///
/// `field_number` must be >= 1 (field 0 is invalid in protobuf); callers
/// only pass the named constants from the schema encoder.
pub fn put_tag(buf: &mut Vec<u8>, field_number: u32, wire_type: u64) {
    put_uvarint(buf, (u64::from(field_number) << 3) | wire_type);
}

/// Append a varint field: tag with wire type 0, then the value.
pub fn put_uvarint_field(buf: &mut Vec<u8>, field_number: u32, value: u64) {
    put_tag(buf, field_number, WIRE_VARINT);
    put_uvarint(buf, value);
}

/// Append a length-delimited field: tag with wire type 2, varint length,
/// then the bytes verbatim.
pub fn put_bytes_field(buf: &mut Vec<u8>, field_number: u32, data: &[u8]) {
    put_tag(buf, field_number, WIRE_LEN);
    put_uvarint(buf, data.len() as u64);
    buf.extend_from_slice(data);
}

/// Append a string as a length-delimited field.
pub fn put_string_field(buf: &mut Vec<u8>, field_number: u32, value: &str) {
    put_bytes_field(buf, field_number, value.as_bytes());
}
