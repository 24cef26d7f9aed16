//! Hand-rolled protobuf encoding for the geosite message family.
//!
//! The output must be readable by any standard protobuf decoder using this
//! schema, so field numbers and wire types are fixed:
//!
//! ```text
//! message RuleSetList {
//!     repeated RuleSet geosite = 1;
//! }
//! message RuleSet {
//!     string tag = 1;
//!     repeated DomainEntry domain = 2;
//! }
//! message DomainEntry {
//!     enum Type { Plain = 0; Regex = 1; Domain = 2; Full = 3; }
//!     Type type = 1;      // elided when Plain (proto3 zero value)
//!     string value = 2;
//! }
//! ```
//!
//! Encoding is write-only and strictly bottom-up: an embedded message is
//! fully serialized before its length prefix can be written, so leaves are
//! built first and wrapped on the way up. Nesting depth is fixed at three
//! regardless of input size.

mod encoder;
mod wire;


pub use encoder::{encode_domain_entry, encode_rule_set, encode_rule_set_list};
pub use wire::{
    put_bytes_field, put_string_field, put_tag, put_uvarint, put_uvarint_field, WIRE_LEN,
    WIRE_VARINT,
};
