//! geodat - compile plaintext domain lists into a geosite binary artifact.
//!
//! This crate is a build-time data compiler: it turns human-edited domain
//! list files into the single protobuf-encoded artifact that rule-based
//! routers load their domain-matching rules from.
//!
//! # Features
//!
//! - **Hand-rolled protobuf encoding**: the fixed geosite schema is emitted
//!   directly, without a general-purpose protobuf library
//! - **List parsing**: `full:`, `domain:`, `regex:` prefixes, comments,
//!   blank lines
//! - **Tag discovery**: every `<tag>.txt` in a list directory becomes a
//!   named rule set
//! - **Deterministic output**: the same lists always produce a
//!   byte-identical artifact
//!
//! # Quick Start
//!
//! ```ignore
//! use geodat::{compile_dir, Compiler};
//!
//! // Compile every list in a directory
//! let output = compile_dir("lists")?;
//! std::fs::write("geosite.dat", &output.data)?;
//!
//! // Or pick the tags explicitly
//! let compiler = Compiler::new("lists");
//! let output = compiler.compile(&["direct".into(), "proxy".into()])?;
//! for stat in &output.stats {
//!     println!("[{}] {} domains", stat.tag, stat.entries);
//! }
//! ```
//!
//! # Wire Format
//!
//! The artifact is a standard protobuf message stream; see [`proto`] for
//! the schema and the encoding rules it pins down. Encoding never fails —
//! all validation (empty values, duplicate tags, unreadable files) happens
//! while reading the lists.

mod compiler;
mod entry;
mod error;
mod parser;
mod ruleset;

pub mod proto;

// Re-export core types
pub use compiler::{compile_dir, CompileOutput, Compiler, TagStats};
pub use entry::{DomainEntry, DomainKind};
pub use error::{Error, Result};
pub use parser::ListParser;
pub use ruleset::{RuleSet, RuleSetList};
