use autocodegen::config::{ProjectConfig, ProjectSettings, TemplateSettings};
use autocodegen::context::Context;
use autocodegen::ext::GenKind;
use autocodegen::generator::run_generators;
use autocodegen::observer::NullObserver;
use autocodegen::script::CommandScriptEngine;
use indexmap::IndexMap;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

fn write_script(path: &Path, body: &str) {
    fs::write(path, body).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

fn demo_config(root: &Path) -> ProjectConfig {
    ProjectConfig {
        autocodegen: ProjectSettings {
            project_name: "demo".to_string(),
            project_root: root.to_path_buf(),
            templates_root: root.join("acg"),
        },
        workspace: None,
        templates: IndexMap::new(),
    }
}

fn make_ctx<'a>(
    config: &'a ProjectConfig,
    settings: &'a TemplateSettings,
    out: &Path,
) -> Context<'a> {
    Context {
        template_name: "app",
        template_config: settings,
        project_config: config,
        workspace_configs: std::slice::from_ref(config),
        target_root: out.to_path_buf(),
    }
}

#[test]
fn test_generators_write_targets_and_are_consumed() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    let out = root.join("out");
    fs::create_dir_all(&out).unwrap();
    write_script(&out.join("version.txt.gen"), "#!/bin/sh\necho \"1.0.0\"\n");

    let config = demo_config(&root);
    let settings = TemplateSettings::default();
    let ctx = make_ctx(&config, &settings, &out);

    run_generators(&ctx, &CommandScriptEngine::new(), GenKind::Renewable, &NullObserver)
        .unwrap();

    assert_eq!(fs::read_to_string(out.join("version.txt")).unwrap(), "1.0.0\n");
    assert!(!out.join("version.txt.gen").exists());
}

#[test]
fn test_generator_failure_is_fatal_and_annotated() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    let out = root.join("out");
    fs::create_dir_all(&out).unwrap();
    write_script(&out.join("broken.txt.gen"), "#!/bin/sh\nexit 1\n");

    let config = demo_config(&root);
    let settings = TemplateSettings::default();
    let ctx = make_ctx(&config, &settings, &out);

    let err = run_generators(
        &ctx,
        &CommandScriptEngine::new(),
        GenKind::Renewable,
        &NullObserver,
    )
    .unwrap_err();

    assert!(err.to_string().contains("broken.txt.gen"));
    // The failing source is left in place
    assert!(out.join("broken.txt.gen").exists());
}

#[test]
fn test_init_only_sweep_ignores_renewable_scripts() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    let out = root.join("out");
    fs::create_dir_all(&out).unwrap();
    write_script(&out.join("seed.txt.gen1"), "#!/bin/sh\necho seeded\n");
    write_script(&out.join("fresh.txt.gen"), "#!/bin/sh\necho fresh\n");

    let config = demo_config(&root);
    let settings = TemplateSettings::default();
    let ctx = make_ctx(&config, &settings, &out);

    run_generators(&ctx, &CommandScriptEngine::new(), GenKind::InitOnly, &NullObserver)
        .unwrap();

    assert_eq!(fs::read_to_string(out.join("seed.txt")).unwrap(), "seeded\n");
    assert!(!out.join("seed.txt.gen1").exists());
    assert!(out.join("fresh.txt.gen").exists());
    assert!(!out.join("fresh.txt").exists());
}
