// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;
use std::path::Path;

use super::{
    InstallContext, InstallOutcome, InstallTarget, install_engine_configs,
    install_environment_configs, install_prebuild_configs, install_vulkan_configs, run_installers,
};
use crate::config::paths::PathsConfig;
use crate::env::EnvSnapshot;
use crate::error::FsError;

fn project_with_configs_dir() -> (tempfile::TempDir, PathsConfig) {
    let temp = tempfile::tempdir().unwrap();
    let paths = PathsConfig::rooted_at(temp.path());
    std::fs::create_dir_all(paths.configs_dir()).unwrap();
    (temp, paths)
}

fn list_tree(root: &Path) -> Vec<String> {
    let mut entries = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path.clone());
            }
            entries.push(path.strip_prefix(root).unwrap().display().to_string());
        }
    }
    entries.sort();
    entries
}

#[tokio::test]
async fn test_environment_file_matches_snapshot() {
    let (_temp, paths) = project_with_configs_dir();
    let env: EnvSnapshot = [("VULKAN_SDK", "/opt/vulkan"), ("HOME", "/home/dev")]
        .into_iter()
        .collect();

    let written = install_environment_configs(&env, &paths).await.unwrap();
    assert_eq!(written, paths.environment_file());

    let decoded: BTreeMap<String, String> =
        serde_json::from_slice(&std::fs::read(&written).unwrap()).unwrap();
    assert_eq!(&decoded, env.as_map());
}

#[tokio::test]
async fn test_second_install_overwrites_first() {
    let (_temp, paths) = project_with_configs_dir();
    let first: EnvSnapshot = [("A", "1"), ("LONG_VALUE", "x".repeat(256).as_str())]
        .into_iter()
        .collect();
    let second: EnvSnapshot = [("B", "2")].into_iter().collect();

    install_environment_configs(&first, &paths).await.unwrap();
    install_environment_configs(&second, &paths).await.unwrap();

    let text = std::fs::read_to_string(paths.environment_file()).unwrap();
    insta::assert_snapshot!(text, @r#"{"B":"2"}"#);
}

#[tokio::test]
async fn test_missing_configs_dir_is_write_failure() {
    let temp = tempfile::tempdir().unwrap();
    let paths = PathsConfig::rooted_at(temp.path());
    let env: EnvSnapshot = [("A", "1")].into_iter().collect();

    let err = install_environment_configs(&env, &paths).await.unwrap_err();
    let fs_err = err.downcast_ref::<FsError>().expect("expected FsError");
    assert!(matches!(fs_err, FsError::WriteFailed { .. }));
    assert!(list_tree(temp.path()).is_empty(), "no directories should be created");
}

#[test]
fn test_placeholders_write_nothing() {
    let (temp, _paths) = project_with_configs_dir();
    let before = list_tree(temp.path());

    let outcomes = [
        install_prebuild_configs(),
        install_engine_configs(),
        install_vulkan_configs(),
    ];

    assert!(outcomes.iter().all(|o| *o == InstallOutcome::NotImplemented));
    assert_eq!(list_tree(temp.path()), before);
}

#[tokio::test]
async fn test_run_all_installers_in_order() {
    let (temp, paths) = project_with_configs_dir();
    let env: EnvSnapshot = [("A", "1")].into_iter().collect();
    let ctx = InstallContext::new(env, paths.clone());

    let outcomes = run_installers(&[], &ctx).await.unwrap();

    let order: Vec<InstallTarget> = outcomes.iter().map(|(t, _)| *t).collect();
    assert_eq!(order, InstallTarget::all());
    assert_eq!(
        outcomes[0].1,
        InstallOutcome::Written(paths.environment_file())
    );
    assert!(outcomes[1..].iter().all(|(_, o)| *o == InstallOutcome::NotImplemented));
    assert_eq!(
        list_tree(temp.path()),
        [
            Path::new("Data").to_path_buf(),
            Path::new("Data").join("Configs"),
            Path::new("Data").join("Configs").join("Environment.json"),
        ]
        .map(|p| p.display().to_string())
    );
}

#[tokio::test]
async fn test_run_selected_installers_dedupes() {
    let (temp, paths) = project_with_configs_dir();
    let ctx = InstallContext::new(EnvSnapshot::default(), paths);

    let outcomes = run_installers(
        &[InstallTarget::Vulkan, InstallTarget::Engine, InstallTarget::Vulkan],
        &ctx,
    )
    .await
    .unwrap();

    let order: Vec<InstallTarget> = outcomes.iter().map(|(t, _)| *t).collect();
    assert_eq!(order, [InstallTarget::Vulkan, InstallTarget::Engine]);
    assert!(!ctx.paths().environment_file().exists());
    assert_eq!(list_tree(temp.path()).len(), 2);
}

#[tokio::test]
async fn test_run_installers_reports_failing_target() {
    let temp = tempfile::tempdir().unwrap();
    let ctx = InstallContext::new(EnvSnapshot::default(), PathsConfig::rooted_at(temp.path()));

    let err = run_installers(&[InstallTarget::Environment], &ctx)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "environment installer failed");
    assert!(!err.root_cause().to_string().is_empty());
}

#[test]
fn test_install_target_names() {
    let names: Vec<String> = InstallTarget::all().iter().map(ToString::to_string).collect();
    assert_eq!(names, ["environment", "prebuild", "engine", "vulkan"]);
}
