// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::EnvSnapshot;
use std::collections::BTreeMap;

#[test]
fn test_snapshot_json_is_flat_object() {
    let env: EnvSnapshot = [
        ("VULKAN_SDK", "/opt/vulkan/1.3"),
        ("PATH", "/usr/bin:/bin"),
        ("EMPTY", ""),
    ]
    .into_iter()
    .collect();

    insta::assert_snapshot!(
        env.to_json().unwrap(),
        @r#"{"EMPTY":"","PATH":"/usr/bin:/bin","VULKAN_SDK":"/opt/vulkan/1.3"}"#
    );
}

#[test]
fn test_snapshot_keeps_key_case() {
    let env: EnvSnapshot = [("Path", "a"), ("PATH", "b")].into_iter().collect();
    assert_eq!(env.len(), 2);
    assert_eq!(env.get("Path"), Some("a"));
    assert_eq!(env.get("PATH"), Some("b"));
    assert_eq!(env.get("path"), None);
}

#[test]
fn test_snapshot_from_map_round_trips_through_json() {
    let mut vars = BTreeMap::new();
    vars.insert("HOME".to_string(), "/home/dev".to_string());
    vars.insert("QUOTED".to_string(), "say \"hi\"\n".to_string());
    let env = EnvSnapshot::from_map(vars.clone());

    let decoded: BTreeMap<String, String> = serde_json::from_str(&env.to_json().unwrap()).unwrap();
    assert_eq!(decoded, vars);
    assert_eq!(env.as_map(), &vars);
}

#[test]
fn test_capture_matches_process_environment() {
    let env = EnvSnapshot::capture();
    for (key, value) in std::env::vars() {
        assert_eq!(env.get(&key), Some(value.as_str()), "mismatch for {key}");
    }
}

#[test]
fn test_empty_snapshot() {
    let env = EnvSnapshot::default();
    assert!(env.is_empty());
    assert_eq!(env.iter().count(), 0);
    assert_eq!(env.to_json().unwrap(), "{}");
}
