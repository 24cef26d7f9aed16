//! Integration tests for the list-to-artifact compile pipeline.

use std::fs;

use geodat::proto::encode_rule_set_list;
use geodat::{
    compile_dir, Compiler, DomainEntry, DomainKind, Error, RuleSet, RuleSetList,
};
use tempfile::TempDir;

fn write_list(dir: &TempDir, tag: &str, content: &str) {
    fs::write(dir.path().join(format!("{}.txt", tag)), content).unwrap();
}

#[test]
fn test_compile_single_tag_exact_bytes() {
    let dir = TempDir::new().unwrap();
    write_list(
        &dir,
        "direct",
        "# directly routed domains\n\nexample.com\nfull:exact.example.com\n",
    );

    let output = compile_dir(dir.path()).unwrap();

    let mut expected = vec![0x0A, 0x30];
    expected.extend_from_slice(&[0x0A, 0x06]);
    expected.extend_from_slice(b"direct");
    expected.extend_from_slice(&[0x12, 0x0F, 0x08, 0x02, 0x12, 0x0B]);
    expected.extend_from_slice(b"example.com");
    expected.extend_from_slice(&[0x12, 0x15, 0x08, 0x03, 0x12, 0x11]);
    expected.extend_from_slice(b"exact.example.com");
    assert_eq!(output.data, expected);

    assert_eq!(output.stats.len(), 1);
    assert_eq!(output.stats[0].tag, "direct");
    assert_eq!(output.stats[0].entries, 2);
}

#[test]
fn test_compile_matches_direct_encoding() {
    let dir = TempDir::new().unwrap();
    write_list(&dir, "direct", "cn.example\ndomain:intranet.example\n");
    write_list(&dir, "proxy", "regex:^blocked\\.\nfull:one.example.org\n");

    let output = compile_dir(dir.path()).unwrap();

    // discovery sorts tags, so "direct" precedes "proxy"
    let expected = encode_rule_set_list(&RuleSetList::new(vec![
        RuleSet::new(
            "direct",
            vec![
                DomainEntry::new(DomainKind::Domain, "cn.example"),
                DomainEntry::new(DomainKind::Domain, "intranet.example"),
            ],
        ),
        RuleSet::new(
            "proxy",
            vec![
                DomainEntry::new(DomainKind::Regex, "^blocked\\."),
                DomainEntry::new(DomainKind::Full, "one.example.org"),
            ],
        ),
    ]));
    assert_eq!(output.data, expected);
}

#[test]
fn test_discovery_ignores_other_files_and_sorts() {
    let dir = TempDir::new().unwrap();
    write_list(&dir, "b", "b.example\n");
    write_list(&dir, "a", "a.example\n");
    write_list(&dir, "c", "c.example\n");
    fs::write(dir.path().join("README.md"), "not a list").unwrap();

    let compiler = Compiler::new(dir.path());
    assert_eq!(compiler.discover_tags().unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_explicit_tag_order_is_preserved() {
    let dir = TempDir::new().unwrap();
    write_list(&dir, "direct", "a.example\n");
    write_list(&dir, "proxy", "b.example\n");

    let compiler = Compiler::new(dir.path());
    let output = compiler
        .compile(&["proxy".to_string(), "direct".to_string()])
        .unwrap();

    let tags: Vec<_> = output.stats.iter().map(|s| s.tag.as_str()).collect();
    assert_eq!(tags, vec!["proxy", "direct"]);
}

#[test]
fn test_duplicate_tag_rejected_case_insensitively() {
    let dir = TempDir::new().unwrap();
    write_list(&dir, "direct", "a.example\n");

    let compiler = Compiler::new(dir.path());
    let err = compiler
        .compile(&["direct".to_string(), "DIRECT".to_string()])
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateTag(tag) if tag == "DIRECT"));
}

#[test]
fn test_empty_tag_skipped_others_survive() {
    let dir = TempDir::new().unwrap();
    write_list(&dir, "empty", "# nothing but comments\n\n");
    write_list(&dir, "proxy", "b.example\n");

    let output = compile_dir(dir.path()).unwrap();

    assert_eq!(output.stats.len(), 1);
    assert_eq!(output.stats[0].tag, "proxy");

    let expected = encode_rule_set_list(&RuleSetList::new(vec![RuleSet::new(
        "proxy",
        vec![DomainEntry::new(DomainKind::Domain, "b.example")],
    )]));
    assert_eq!(output.data, expected);
}

#[test]
fn test_all_tags_empty_fails() {
    let dir = TempDir::new().unwrap();
    write_list(&dir, "empty", "\n");

    let err = compile_dir(dir.path()).unwrap_err();
    assert!(matches!(err, Error::NoRuleSets));
}

#[test]
fn test_missing_list_file_fails_with_path() {
    let dir = TempDir::new().unwrap();

    let compiler = Compiler::new(dir.path());
    let err = compiler.compile(&["ghost".to_string()]).unwrap_err();
    match err {
        Error::ReadList { path, .. } => {
            assert_eq!(path, dir.path().join("ghost.txt"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_parse_error_carries_line_number() {
    let dir = TempDir::new().unwrap();
    write_list(&dir, "direct", "ok.example\nregex:\n");

    let err = compile_dir(dir.path()).unwrap_err();
    assert!(matches!(err, Error::EmptyValue { line: 2, prefix: "regex:" }));
}

#[test]
fn test_compile_is_idempotent() {
    let dir = TempDir::new().unwrap();
    write_list(&dir, "direct", "a.example\nfull:b.example\nregex:^c\\.\n");
    write_list(&dir, "proxy", "d.example\n");

    let first = compile_dir(dir.path()).unwrap();
    let second = compile_dir(dir.path()).unwrap();
    assert_eq!(first.data, second.data);
}
