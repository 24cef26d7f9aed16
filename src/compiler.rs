//! Compile pipeline: list files in, serialized artifact out.
//!
//! One `<tag>.txt` file per rule set. Tags come either from the caller or
//! from directory discovery; each tag's file is parsed, grouped into a
//! [`RuleSet`], and the whole batch is serialized as one [`RuleSetList`].

use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use log::warn;

use crate::parser::ListParser;
use crate::proto::encode_rule_set_list;
use crate::{DomainEntry, Error, Result, RuleSet, RuleSetList};

/// Per-tag entry count, reported after a compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagStats {
    /// The rule set's tag
    pub tag: String,
    /// Number of entries encoded for it
    pub entries: usize,
}

/// The finished artifact plus its per-tag statistics.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// Serialized rule-set list, ready to write to disk
    pub data: Vec<u8>,
    /// One entry per encoded rule set, in output order
    pub stats: Vec<TagStats>,
}

/// Compiles a directory of domain list files into one artifact.
pub struct Compiler {
    input_dir: PathBuf,
}

impl Compiler {
    /// Create a compiler reading lists from `input_dir`.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    /// Discover tags from `*.txt` filenames in the input directory.
    ///
    /// Sorted so the artifact is deterministic regardless of directory
    /// iteration order.
    pub fn discover_tags(&self) -> Result<Vec<String>> {
        let mut tags = Vec::new();
        for dir_entry in std::fs::read_dir(&self.input_dir)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                tags.push(stem.to_string());
            }
        }
        tags.sort();
        Ok(tags)
    }

    /// Compile the given tags, in order, into a serialized rule-set list.
    ///
    /// Tags must be distinct (case-insensitive). A tag whose list parses to
    /// zero entries is skipped with a warning; if nothing survives, the
    /// compile fails.
    pub fn compile(&self, tags: &[String]) -> Result<CompileOutput> {
        let mut seen = HashSet::new();
        for tag in tags {
            if !seen.insert(tag.to_ascii_lowercase()) {
                return Err(Error::DuplicateTag(tag.clone()));
            }
        }

        let mut sets = Vec::with_capacity(tags.len());
        for tag in tags {
            let entries = self.read_list(tag)?;
            if entries.is_empty() {
                warn!("[{}] list is empty, skipping tag", tag);
                continue;
            }
            sets.push(RuleSet::new(tag.clone(), entries));
        }

        if sets.is_empty() {
            return Err(Error::NoRuleSets);
        }

        let stats = sets
            .iter()
            .map(|set| TagStats {
                tag: set.tag.clone(),
                entries: set.len(),
            })
            .collect();

        Ok(CompileOutput {
            data: encode_rule_set_list(&RuleSetList::new(sets)),
            stats,
        })
    }

    /// Path of the list file backing `tag`.
    pub fn list_path(&self, tag: &str) -> PathBuf {
        self.input_dir.join(format!("{}.txt", tag))
    }

    fn read_list(&self, tag: &str) -> Result<Vec<DomainEntry>> {
        let path = self.list_path(tag);
        let file = File::open(&path).map_err(|source| Error::ReadList {
            path: path.clone(),
            source,
        })?;
        ListParser::parse(file)
    }
}

/// Convenience wrapper: discover every tag in `input_dir` and compile it.
pub fn compile_dir(input_dir: impl AsRef<Path>) -> Result<CompileOutput> {
    let compiler = Compiler::new(input_dir.as_ref());
    let tags = compiler.discover_tags()?;
    compiler.compile(&tags)
}
