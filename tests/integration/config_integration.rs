//! Integration tests for configuration driving the CLI routes.

use branch_overlay::cli::{Commands, RunContext};
use std::fs;
use std::path::PathBuf;

use crate::integration::{sample_workspace, with_xdg_config_home};

#[test]
fn test_workspace_config_relocates_inputs_and_output() {
    let ws = sample_workspace();
    let root = ws.path();
    fs::create_dir_all(root.join("conf")).unwrap();
    fs::write(root.join("conf").join("branches"), "sapi: release-3\n").unwrap();
    fs::write(
        root.join(".branch-overlay.toml"),
        r#"
[paths]
configure_branches = "conf/branches"
overlay = "out/build.spec.local"
"#,
    )
    .unwrap();

    with_xdg_config_home(root, || {
        let ctx = RunContext::new(root.to_path_buf(), None).unwrap();
        assert_eq!(
            ctx.config().paths.configure_branches,
            PathBuf::from("conf/branches")
        );

        let out = ctx
            .execute(&Commands::Convert {
                build_spec: None,
                branches: None,
                output: None,
                write: true,
            })
            .unwrap();
        assert!(out.is_empty());
    });

    let written = fs::read_to_string(root.join("out").join("build.spec.local")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["zones"]["sapi"]["branch"], "release-3");
}

#[test]
fn test_explicit_config_file_is_resolved_against_workspace() {
    let ws = sample_workspace();
    let root = ws.path();
    fs::write(
        root.join("tool.toml"),
        "[paths]\nconfigure_branches = \"pins.txt\"\n",
    )
    .unwrap();
    fs::write(root.join("pins.txt"), "bits-branch: trunk\n").unwrap();

    let out = with_xdg_config_home(root, || {
        let ctx = RunContext::new(root.to_path_buf(), Some(PathBuf::from("tool.toml"))).unwrap();
        ctx.execute(&Commands::Convert {
            build_spec: None,
            branches: None,
            output: None,
            write: false,
        })
        .unwrap()
    });

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value, serde_json::json!({"bits-branch": "trunk"}));
}

#[test]
fn test_missing_explicit_config_file_fails() {
    let ws = sample_workspace();
    let result = with_xdg_config_home(ws.path(), || {
        RunContext::new(ws.path().to_path_buf(), Some(PathBuf::from("nope.toml")))
    });
    assert!(result.is_err());
}
