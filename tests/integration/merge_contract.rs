//! Contract tests for the configure-branches merge.

use branch_overlay::overlay::{merge, BaseSpecDigest, EQUALITY_GROUPS};
use branch_overlay::MergeError;

fn digest() -> BaseSpecDigest {
    BaseSpecDigest::new(
        ["adminui", "manatee", "sapi"],
        ["agents", "agents_md5", "platform", "platboot", "sdcadm", "mycomponent"],
        ["bits-branch", "build-tgz"],
    )
}

#[test]
fn test_empty_override_yields_empty_overlay() {
    let doc = merge(&digest(), "").unwrap();
    assert!(doc.zones.is_empty());
    assert!(doc.files.is_empty());
    assert!(doc.settings.is_empty());
    assert_eq!(serde_json::to_string(&doc).unwrap(), "{}");
}

#[test]
fn test_comments_and_blank_lines_only() {
    let text = "\n# platform: master\n   \n#\n  # sapi:x\n\t\n";
    let doc = merge(&digest(), text).unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_any_group_member_propagates_to_whole_group() {
    for group in EQUALITY_GROUPS {
        for member in group.members {
            let doc = merge(&digest(), &format!("{}:branchX", member)).unwrap();
            for other in group.members {
                assert_eq!(
                    doc.file_branch(other),
                    Some("branchX"),
                    "{} should follow {} in group {}",
                    other,
                    member,
                    group.name
                );
            }
            assert_eq!(doc.files.len(), group.members.len());
        }
    }
}

#[test]
fn test_duplicate_keys_fail_regardless_of_value() {
    for name in ["manatee", "sdcadm", "platform"] {
        for second in ["v1", "v2"] {
            let text = format!("{}:v1\n{}:{}\n", name, name, second);
            let err = merge(&digest(), &text).unwrap_err();
            assert!(
                matches!(&err, MergeError::DuplicateKey { line: 2, first_line: 1, key, .. } if key == name),
                "unexpected error for {}: {:?}",
                text,
                err
            );
        }
    }
}

#[test]
fn test_group_mismatch_and_agreement() {
    let err = merge(&digest(), "agents:branchX\nagents_md5:branchY").unwrap_err();
    match err {
        MergeError::BranchMismatch {
            line,
            group,
            existing,
            requested,
            ..
        } => {
            assert_eq!(line, 2);
            assert_eq!(group, "agents");
            assert_eq!(existing, "branchX");
            assert_eq!(requested, "branchY");
        }
        other => panic!("expected BranchMismatch, got {:?}", other),
    }

    let doc = merge(&digest(), "agents:branchX\nagents_md5:branchX").unwrap();
    assert_eq!(doc.file_branch("agents"), Some("branchX"));
    assert_eq!(doc.file_branch("agents_md5"), Some("branchX"));
}

#[test]
fn test_unknown_key_names_key_and_line() {
    let err = merge(&digest(), "# header\nsapi: master\nvmapi: master\n").unwrap_err();
    assert_eq!(
        err,
        MergeError::UnknownKey {
            line: 3,
            key: "vmapi".to_string(),
            text: "vmapi: master".to_string(),
        }
    );
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn test_value_keeps_every_colon_after_the_first() {
    let doc = merge(&digest(), "mycomponent:release-2024:build7").unwrap();
    assert_eq!(doc.file_branch("mycomponent"), Some("release-2024:build7"));
}

#[test]
fn test_malformed_lines_cite_line_number() {
    for (text, line) in [("foo", 1), ("sapi: a\nfoo:", 2), ("\n\n  :x", 3)] {
        let err = merge(&digest(), text).unwrap_err();
        assert!(
            matches!(&err, MergeError::MalformedLine { line: l, .. } if *l == line),
            "{:?} should fail on line {}, got {:?}",
            text,
            line,
            err
        );
    }
}

#[test]
fn test_settings_zones_and_files_together() {
    let text = "bits-branch: trunk\nadminui: feature-1\nsdcadm: feature-2\nbuild-tgz: false\n";
    let doc = merge(&digest(), text).unwrap();
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "bits-branch": "trunk",
            "build-tgz": "false",
            "zones": {"adminui": {"branch": "feature-1"}},
            "files": {"sdcadm": {"branch": "feature-2"}}
        })
    );
}

#[test]
fn test_leading_byte_order_mark_is_ignored() {
    let doc = merge(&digest(), "\u{feff}platform: release-1\n").unwrap();
    assert_eq!(doc.file_branch("platform"), Some("release-1"));
    assert_eq!(doc.file_branch("platboot"), Some("release-1"));

    let doc = merge(&digest(), "\u{feff}# header\nsapi: release-2\n").unwrap();
    assert_eq!(doc.zone_branch("sapi"), Some("release-2"));
    assert!(doc.files.is_empty());
}
