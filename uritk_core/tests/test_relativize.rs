pub mod common;
pub use common::*;

use std::str::FromStr;
use uritk_core::{is_same_document, relativize, resolve, Uri};

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[test]
fn test_relativize_sibling_paths() {
    relativize_and_compare("http://a/b/c/d;p?q", "http://a/b/c/g;x?y#s", "g;x?y#s");
    relativize_and_compare("http://a/b/c/d", "http://a/b/x", "../x");
    relativize_and_compare("http://a/b/c/", "http://a/x/y", "../../x/y");
    relativize_and_compare("http://a/b/c/d", "http://a/b/c/d/e", "d/e");
}

#[test]
fn test_relativize_empty_base_path() {
    relativize_and_compare(
        "http://www.example.com",
        "http://www.example.com/?foo=toto#~typo",
        "/?foo=toto#~typo",
    );
}

#[test]
fn test_relativize_same_path() {
    // Same path and query reduce to the empty reference.
    relativize_and_compare("http://a/b/c?q", "http://a/b/c?q", "");
    relativize_and_compare("http://a/b/c?q", "http://a/b/c?q#s", "#s");
    // Same path, differing query, keeps the query only.
    relativize_and_compare("http://a/b/c?q", "http://a/b/c?y", "?y");
    // Same path and no target query emits the basename.
    relativize_and_compare("http://a/b/c?q", "http://a/b/c", "c");
    relativize_and_compare("http://a/b/?q", "http://a/b/", "./");
}

#[test]
fn test_relativize_shields_colon_segment() {
    relativize_and_compare("http://a/b/", "http://a/b/g:x", "./g:x");
}

#[test]
fn test_relativize_unrelated_references() {
    // Different scheme or authority: the target comes back unchanged.
    relativize_and_compare("http://a/b", "https://a/c", "https://a/c");
    relativize_and_compare("http://a/b", "http://other/c", "http://other/c");
    relativize_and_compare("http://a/b", "http://a:8080/c", "http://a:8080/c");
    // A relative-path target is never rewritten.
    relativize_and_compare("http://a/b", "x/y", "x/y");
}

#[test]
fn test_relativize_resolve_round_trip() {
    let cases = [
        ("http://a/b/c/d;p?q", "http://a/b/c/g;x?y#s"),
        ("http://a/b/c/d;p?q", "http://a/g"),
        ("http://a/b/c/", "http://a/b/c/"),
        ("http://a/b/c", "http://a/b/c?y"),
        ("http://a/b/c?q", "http://a/b/c"),
        ("http://www.example.com", "http://www.example.com/?foo=toto#~typo"),
        ("http://a/", "http://a/x:y/z"),
        ("http://u:p@a:81/b/", "http://u:p@a:81/c/d"),
    ];
    for (base, target) in cases {
        let base = Uri::from_str(base).unwrap();
        let target = Uri::from_str(target).unwrap();
        let reference = relativize(&base, &target);
        let round_trip = resolve(&base, &reference);
        println!(
            "> {} + {} -> {}",
            base.to_string(),
            reference.to_string(),
            round_trip.to_string()
        );
        assert!(is_same_document(&round_trip, &target));
        assert_eq!(round_trip.fragment(), target.fragment());
    }
}
