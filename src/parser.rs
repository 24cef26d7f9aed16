//! Plaintext domain list parser.
//!
//! One rule per line. `full:`, `domain:` and `regex:` prefixes select the
//! match kind; an unprefixed line is a `domain` rule. Blank lines and
//! `#`-comment lines are skipped. A recognized prefix with nothing after it
//! rejects the whole input.

use std::io::{BufRead, BufReader, Read};

use crate::{DomainEntry, DomainKind, Error, Result};

// Checked in order; anything else (including unknown "word:" forms) falls
// through to an unprefixed domain rule.
const PREFIXES: [(&str, DomainKind); 3] = [
    ("full:", DomainKind::Full),
    ("domain:", DomainKind::Domain),
    ("regex:", DomainKind::Regex),
];

/// Domain list parser.
pub struct ListParser;

impl ListParser {
    /// Parse entries from a reader, in input order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<DomainEntry>> {
        let mut entries = Vec::new();

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            entries.push(parse_line(line, idx + 1)?);
        }

        Ok(entries)
    }
}

fn parse_line(line: &str, line_number: usize) -> Result<DomainEntry> {
    for (prefix, kind) in PREFIXES {
        if let Some(value) = line.strip_prefix(prefix) {
            if value.is_empty() {
                return Err(Error::EmptyValue {
                    line: line_number,
                    prefix,
                });
            }
            return Ok(DomainEntry::new(kind, value));
        }
    }
    Ok(DomainEntry::new(DomainKind::Domain, line))
}
