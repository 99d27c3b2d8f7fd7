//! Property-based tests for merge determinism and group consistency

use branch_overlay::overlay::{merge, BaseSpecDigest, EQUALITY_GROUPS};
use branch_overlay::writer::to_pretty_json;
use branch_overlay::MergeError;
use proptest::prelude::*;

const ZONES: &[&str] = &["adminui", "manatee", "sapi"];
const FILES: &[&str] = &["agents", "agents_md5", "platform", "platboot", "sdcadm"];
const SETTINGS: &[&str] = &["bits-branch", "build-tgz"];

fn digest() -> BaseSpecDigest {
    BaseSpecDigest::new(
        ZONES.iter().copied(),
        FILES.iter().copied(),
        SETTINGS.iter().copied(),
    )
}

fn line_strategy() -> impl Strategy<Value = String> {
    let keys: Vec<&'static str> = ZONES
        .iter()
        .chain(FILES)
        .chain(SETTINGS)
        .copied()
        .chain(["unknown-key"])
        .collect();
    prop_oneof![
        (prop::sample::select(keys), "[a-z0-9][a-z0-9:._-]{0,12}")
            .prop_map(|(k, v)| format!("{}: {}", k, v)),
        Just(String::new()),
        Just("# comment: ignored".to_string()),
        "[a-z]{1,6}",
    ]
}

/// Merging the same text twice yields byte-identical JSON or the same error.
#[test]
fn test_merge_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(line_strategy(), 0..12),
            |lines| {
                let text = lines.join("\n");
                let first = merge(&digest(), &text);
                let second = merge(&digest(), &text);

                match (first, second) {
                    (Ok(a), Ok(b)) => {
                        prop_assert_eq!(to_pretty_json(&a).unwrap(), to_pretty_json(&b).unwrap());
                    }
                    (Err(a), Err(b)) => prop_assert_eq!(a, b),
                    (a, b) => prop_assert!(false, "diverging results: {:?} vs {:?}", a, b),
                }
                Ok(())
            },
        )
        .unwrap();
}

/// A successful merge never leaves a group split across branches.
#[test]
fn test_groups_agree_after_successful_merge() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(line_strategy(), 0..12),
            |lines| {
                let text = lines.join("\n");
                if let Ok(doc) = merge(&digest(), &text) {
                    for group in EQUALITY_GROUPS {
                        let branches: Vec<_> = group
                            .members
                            .iter()
                            .map(|m| doc.file_branch(m))
                            .collect();
                        prop_assert!(
                            branches.iter().all(|b| *b == branches[0]),
                            "group {} split: {:?}",
                            group.name,
                            branches
                        );
                    }
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Errors always point at a real line of the input.
#[test]
fn test_error_lines_are_in_range() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(line_strategy(), 1..12),
            |lines| {
                let text = lines.join("\n");
                if let Err(err) = merge(&digest(), &text) {
                    let line = err.line();
                    prop_assert!(line >= 1 && line <= lines.len());
                    prop_assert_eq!(err.text(), lines[line - 1].trim());
                    if let MergeError::UnknownKey { key, .. } = &err {
                        prop_assert!(!ZONES.contains(&key.as_str()));
                        prop_assert!(!FILES.contains(&key.as_str()));
                    }
                }
                Ok(())
            },
        )
        .unwrap();
}
