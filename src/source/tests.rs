//! Tests for the source tree cache.

use std::path::Path;

use tempfile::TempDir;

use super::tree::{SourceFile, SourceTree};

const FOO_IDL: &str = "\
/*
 * License.
 */
#include \"nsISupports.idl\"

[scriptable, uuid(00000000-0000-0000-0000-000000000001)]
interface nsIFoo : nsISupports {
  long getValue();
};
";

#[test]
fn test_parse_keeps_lines_and_ranges() {
    let file = SourceFile::parse(Path::new("foo.idl"), FOO_IDL);

    assert_eq!(file.lines().len(), 9);
    assert_eq!(file.lines()[6], "interface nsIFoo : nsISupports {");
    assert_eq!(file.ranges().len(), 1);
    assert!(file.block_containing(2).is_some());
    assert!(file.block_containing(4).is_none());
}

#[test]
fn test_mentions_within_window() {
    let file = SourceFile::parse(Path::new("foo.idl"), FOO_IDL);

    // Index 6 is the interface line.
    assert!(file.mentions("nsIFoo", 0, 6));
    assert!(file.mentions("nsIFoo", 6, 6));
    assert!(!file.mentions("nsIFoo", 7, 8));
    assert!(!file.mentions("nsIFoo", 0, 5));
}

#[test]
fn test_mentions_clamps_out_of_range_end() {
    let file = SourceFile::parse(Path::new("foo.idl"), FOO_IDL);

    assert!(file.mentions("getValue", 3, 500));
    assert!(!file.mentions("getValue", 100, 500));
    assert!(!file.mentions("getValue", 0, -1));
}

#[test]
fn test_mentions_negative_start_searches_from_top() {
    let file = SourceFile::parse(Path::new("foo.idl"), FOO_IDL);
    assert!(file.mentions("License", -1, 3));
}

#[test]
fn test_mentions_anywhere_searches_every_line() {
    let file = SourceFile::parse(Path::new("foo.idl"), FOO_IDL);

    assert!(file.mentions_anywhere("License"));
    assert!(file.mentions_anywhere("getValue"));
    assert!(!file.mentions_anywhere("nsIBar"));
}

#[test]
fn test_mentions_empty_file() {
    let file = SourceFile::parse(Path::new("empty.idl"), "");
    assert!(!file.mentions("nsIFoo", 0, 10));
    assert!(!file.mentions_anywhere("nsIFoo"));
}

#[test]
fn test_tree_loads_from_disk_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foo.idl");
    std::fs::write(&path, FOO_IDL).unwrap();

    let mut tree = SourceTree::new();
    assert!(!tree.is_cached(&path));
    assert_eq!(tree.get(&path).unwrap().lines().len(), 9);
    assert!(tree.is_cached(&path));

    // Later changes on disk are not observed within one run.
    std::fs::write(&path, "changed\n").unwrap();
    assert_eq!(tree.get(&path).unwrap().lines().len(), 9);
}

#[test]
fn test_tree_missing_file_is_none_and_cached() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.idl");

    let mut tree = SourceTree::new();
    assert!(tree.get(&path).is_none());
    assert!(tree.is_cached(&path));

    // Creating the file afterwards does not change the cached answer.
    std::fs::write(&path, FOO_IDL).unwrap();
    assert!(tree.get(&path).is_none());
}

#[test]
fn test_tree_insert_overrides() {
    let mut tree = SourceTree::new();
    tree.insert("virtual.idl", SourceFile::parse(Path::new("virtual.idl"), "a\nb\n"));

    let file = tree.get(Path::new("virtual.idl")).unwrap();
    assert_eq!(file.lines(), ["a", "b"]);
}
