use autocodegen::error::Error;
use autocodegen::workspace::{
    find_project_root, load_workspace_configs, workspace_forces_init,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_find_project_root_returns_topmost_match() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();

    fs::create_dir_all(root.join("acg")).unwrap();
    fs::create_dir_all(root.join("member/acg")).unwrap();
    fs::create_dir_all(root.join("member/deep/dir")).unwrap();

    // A run started inside a member picks up the whole workspace
    assert_eq!(find_project_root(&root.join("member/deep/dir")), Some(root.clone()));
    assert_eq!(find_project_root(&root), Some(root.clone()));
}

#[test]
fn test_find_project_root_without_acg() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    fs::create_dir_all(root.join("plain/dir")).unwrap();

    assert_eq!(find_project_root(&root.join("plain/dir")), None);
}

#[test]
fn test_load_workspace_configs_in_member_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();

    fs::create_dir_all(root.join("acg")).unwrap();
    fs::write(
        root.join("acg/config.toml"),
        "[autocodegen]\nproject_name = \"top\"\n\n[workspace]\nmembers = [\"svc\", \"web\"]\n",
    )
    .unwrap();
    fs::create_dir_all(root.join("svc/acg")).unwrap();
    fs::create_dir_all(root.join("web/acg")).unwrap();

    let configs = load_workspace_configs(&root).unwrap();

    assert_eq!(configs.len(), 3);
    assert_eq!(configs[0].autocodegen.project_name, "top");
    assert_eq!(configs[0].autocodegen.project_root, root);
    assert_eq!(configs[1].autocodegen.project_root, root.join("svc"));
    assert_eq!(configs[2].autocodegen.project_root, root.join("web"));

    // Members without their own name inherit the top project's
    assert_eq!(configs[1].autocodegen.project_name, "top");

    assert!(!workspace_forces_init(&configs));
}

#[test]
fn test_workspace_init_flag() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();

    fs::create_dir_all(root.join("acg")).unwrap();
    fs::write(root.join("acg/config.toml"), "[workspace]\ninit = true\n").unwrap();

    let configs = load_workspace_configs(&root).unwrap();
    assert!(workspace_forces_init(&configs));
}

#[test]
fn test_missing_member_acg_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();

    fs::create_dir_all(root.join("acg")).unwrap();
    fs::write(root.join("acg/config.toml"), "[workspace]\nmembers = [\"ghost\"]\n")
        .unwrap();

    match load_workspace_configs(&root) {
        Err(Error::WorkspaceError(message)) => assert!(message.contains("ghost")),
        other => panic!("expected WorkspaceError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_nested_workspaces_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();

    fs::create_dir_all(root.join("acg")).unwrap();
    fs::write(root.join("acg/config.toml"), "[workspace]\nmembers = [\"svc\"]\n")
        .unwrap();
    fs::create_dir_all(root.join("svc/acg")).unwrap();
    fs::write(root.join("svc/acg/config.toml"), "[workspace]\nmembers = []\n").unwrap();

    match load_workspace_configs(&root) {
        Err(Error::WorkspaceError(message)) => {
            assert!(message.contains("nested"), "unexpected message: {message}")
        }
        other => panic!("expected WorkspaceError, got {:?}", other.map(|_| ())),
    }
}
