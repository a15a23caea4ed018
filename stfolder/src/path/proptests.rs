//! Property-based tests for path handling.
//!
//! Note: The normalize and fixer modules already carry property tests for
//! cleaning and fixing. This module focuses on canonicalization and path
//! relationships.

use super::canonicalize::PathCanonicalizer;
use super::environment::FixedEnvironment;
use super::fixer::fix_path;
use super::platform::PlatformFamily;
use super::relationship::{is_contained, PathRelationship};
use proptest::prelude::*;

const UNIX: PlatformFamily = PlatformFamily::Unix;
const WIN: PlatformFamily = PlatformFamily::Windows;

fn unix_canonicalizer() -> PathCanonicalizer<FixedEnvironment> {
    PathCanonicalizer::new(
        UNIX,
        FixedEnvironment::new()
            .with_home("/home/alice")
            .with_current_dir("/work/dir"),
    )
}

fn windows_canonicalizer() -> PathCanonicalizer<FixedEnvironment> {
    PathCanonicalizer::new(
        WIN,
        FixedEnvironment::new()
            .with_home(r"C:\Users\alice")
            .with_current_dir(r"C:\work"),
    )
}

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

// Any non-empty raw path: absolute, relative, tilde-prefixed, with dots
fn raw_path_strategy() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        Just(String::new()),
        path_component_strategy(),
    ];
    (
        prop_oneof![Just(""), Just("/"), Just("~/"), Just("./")],
        prop::collection::vec(segment, 1..6),
    )
        .prop_map(|(prefix, parts)| format!("{prefix}{}", parts.join("/")))
        .prop_filter("non-empty", |p| !p.is_empty())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Canonicalization is idempotent: canonical(canonical(p)) == canonical(p)
    #[test]
    fn canonicalize_idempotent_unix(raw in raw_path_strategy()) {
        let canonicalizer = unix_canonicalizer();
        let once = canonicalizer.canonicalize(&raw);
        prop_assert_eq!(canonicalizer.canonicalize(&once), once);
    }

    #[test]
    fn canonicalize_idempotent_windows(raw in raw_path_strategy()) {
        let canonicalizer = windows_canonicalizer();
        let once = canonicalizer.canonicalize(&raw);
        prop_assert_eq!(canonicalizer.canonicalize(&once), once);
    }

    // Fixed-then-canonical Unix paths are absolute and end with exactly one separator
    #[test]
    fn fixed_canonical_single_trailing_separator(raw in raw_path_strategy()) {
        let canonicalizer = unix_canonicalizer();
        let canonical = canonicalizer.canonicalize(&fix_path(&raw, UNIX));
        prop_assert!(UNIX.is_absolute(&canonical));
        prop_assert!(canonical.ends_with('/'));
        prop_assert!(canonical == "/" || !canonical.ends_with("//"));
    }

    // Path relationship is reflexive
    #[test]
    fn path_relationship_reflexive(path in absolute_path_strategy()) {
        prop_assert_eq!(PathRelationship::between(&path, &path, UNIX), PathRelationship::Same);
    }

    // Relationship symmetry: if A is ancestor of B, then B is descendant of A
    #[test]
    fn path_relationship_symmetric(path1 in absolute_path_strategy(), path2 in absolute_path_strategy()) {
        let rel_12 = PathRelationship::between(&path1, &path2, UNIX);
        let rel_21 = PathRelationship::between(&path2, &path1, UNIX);

        let is_symmetric = matches!(
            (rel_12, rel_21),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );

        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", rel_12, rel_21);
    }

    // Containment is transitive
    #[test]
    fn path_containment_transitive(base in absolute_path_strategy(), parts1 in 1..5usize, parts2 in 1..5usize) {
        let mut path_b = base.clone();
        for i in 0..parts1 {
            path_b.push_str(&format!("/sub{i}"));
        }

        let mut path_c = path_b.clone();
        for i in 0..parts2 {
            path_c.push_str(&format!("/deep{i}"));
        }

        prop_assert!(is_contained(&base, &path_b, UNIX));
        prop_assert!(is_contained(&path_b, &path_c, UNIX));
        prop_assert!(is_contained(&base, &path_c, UNIX));
    }

    // A sibling subtree is never contained, whatever the trailing separators
    #[test]
    fn sibling_never_contained(base in absolute_path_strategy(), name in path_component_strategy()) {
        let folder = format!("{base}/folder/");
        let sibling = format!("{base}/{name}x/tmp/");
        prop_assert!(!is_contained(&folder, &sibling, UNIX));
    }
}
