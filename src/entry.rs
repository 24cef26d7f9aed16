//! Domain rule kinds and entries.

use std::fmt;

/// DomainKind selects how the consumer matches a rule value.
///
/// The discriminants are the enum values of the consumer's protobuf
/// definition and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum DomainKind {
    /// Substring match against the host
    #[default]
    Plain = 0,
    /// Regular expression match
    Regex = 1,
    /// The host itself plus all subdomains
    Domain = 2,
    /// Exact full host match
    Full = 3,
}

impl DomainKind {
    /// Parse a kind from its list-file prefix word (case-sensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "plain" => Some(DomainKind::Plain),
            "regex" => Some(DomainKind::Regex),
            "domain" => Some(DomainKind::Domain),
            "full" => Some(DomainKind::Full),
            _ => None,
        }
    }

    /// Get the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainKind::Plain => "plain",
            DomainKind::Regex => "regex",
            DomainKind::Domain => "domain",
            DomainKind::Full => "full",
        }
    }

    /// Value of the `type` field on the wire.
    pub fn wire_value(self) -> u64 {
        self as u64
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single domain-matching rule: a kind plus an uninterpreted value.
///
/// The value's meaning (literal, pattern, host) is the consumer's business;
/// this crate only tags it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainEntry {
    /// Match semantics for `value`
    pub kind: DomainKind,
    /// The rule text, passed through verbatim
    pub value: String,
}

impl DomainEntry {
    /// Create a new entry.
    pub fn new(kind: DomainKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
