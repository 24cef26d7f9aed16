//! Schema encoder: maps the rule-set data model onto the fixed geosite
//! protobuf schema, field number for field number.

use super::wire::{put_bytes_field, put_string_field, put_uvarint_field};
use crate::{DomainEntry, DomainKind, RuleSet, RuleSetList};

// Field numbers from the consumer's protobuf definition. Any deviation
// produces a file silently unreadable by compliant decoders — keep this
// table auditable against the schema in one place.
const DOMAIN_FIELD_TYPE: u32 = 1;
const DOMAIN_FIELD_VALUE: u32 = 2;
const RULESET_FIELD_TAG: u32 = 1;
const RULESET_FIELD_DOMAIN: u32 = 2;
const LIST_FIELD_GEOSITE: u32 = 1;

/// Serialize a [`DomainEntry`] message.
///
/// Returns the raw submessage bytes, no outer length prefix.
pub fn encode_domain_entry(entry: &DomainEntry) -> Vec<u8> {
    let mut buf = Vec::with_capacity(entry.value.len() + 4);
    // proto3: the zero enum value (Plain) is elided from the wire.
    if entry.kind != DomainKind::Plain {
        put_uvarint_field(&mut buf, DOMAIN_FIELD_TYPE, entry.kind.wire_value());
    }
    // The string field is always emitted, even when empty.
    put_string_field(&mut buf, DOMAIN_FIELD_VALUE, &entry.value);
    buf
}

/// Serialize a [`RuleSet`] message: the tag, then one embedded
/// [`DomainEntry`] per rule, in input order.
///
/// Repeated fields need no count on the wire — each occurrence is simply
/// re-tagged, so this is a flat loop.
pub fn encode_rule_set(set: &RuleSet) -> Vec<u8> {
    let mut buf = Vec::new();
    put_string_field(&mut buf, RULESET_FIELD_TAG, &set.tag);
    for entry in &set.entries {
        put_bytes_field(&mut buf, RULESET_FIELD_DOMAIN, &encode_domain_entry(entry));
    }
    buf
}

/// Serialize a [`RuleSetList`] message: one embedded [`RuleSet`] per group,
/// in input order. An empty list encodes to an empty byte sequence.
pub fn encode_rule_set_list(list: &RuleSetList) -> Vec<u8> {
    let mut buf = Vec::new();
    for set in &list.sets {
        put_bytes_field(&mut buf, LIST_FIELD_GEOSITE, &encode_rule_set(set));
    }
    buf
}
