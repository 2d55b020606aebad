use std::fs;
use std::io;
use std::path::Path;

use tempfile::TempDir;
use volume_kit::error::StorageError;
use volume_kit::storage::{
    DirectorySet, FallbackReason, MANIFEST_FILE, StorageRole, WriteProbe, setup_storage,
    setup_storage_with,
};

struct DeniedProbe;

impl WriteProbe for DeniedProbe {
    fn probe(&self, _dir: &Path) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only volume"))
    }
}

fn manifest_lines(root: &Path) -> Vec<String> {
    fs::read_to_string(root.join(MANIFEST_FILE))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_missing_primary_uses_fallback() {
    let tmp = TempDir::new().unwrap();
    let primary = tmp.path().join("data");
    let fallback = tmp.path().join("home/u/persistent_data");

    let result = setup_storage(&primary, &fallback).unwrap();

    assert_eq!(result.resolution.root, fallback);
    assert!(!result.resolution.persistent);
    assert_eq!(result.resolution.fallback, Some(FallbackReason::PrimaryMissing));
    assert!(!primary.exists());

    for role in StorageRole::ALL {
        assert!(fallback.join(role.dir_name()).is_dir(), "{} missing", role.dir_name());
    }

    let lines = manifest_lines(&fallback);
    assert_eq!(lines[0], format!("Storage Base: {}", fallback.display()));
    assert!(lines[1].starts_with("Created: "));
}

#[test]
fn test_writable_primary_is_used_and_probe_cleaned_up() {
    let tmp = TempDir::new().unwrap();
    let primary = tmp.path().join("data");
    fs::create_dir(&primary).unwrap();
    let fallback = tmp.path().join("home/persistent_data");

    let result = setup_storage(&primary, &fallback).unwrap();

    assert_eq!(result.resolution.root, primary);
    assert!(result.resolution.persistent);
    assert!(!fallback.exists());

    let mut names: Vec<String> = fs::read_dir(&primary)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec!["agent_memory", "app_data", "cache", MANIFEST_FILE, "logs", "uploads"]
    );
}

#[test]
fn test_permission_denied_on_primary_uses_fallback() {
    let tmp = TempDir::new().unwrap();
    let primary = tmp.path().join("data");
    fs::create_dir(&primary).unwrap();
    let fallback = tmp.path().join("persistent_data");

    let result = setup_storage_with(&primary, &fallback, &DeniedProbe).unwrap();

    assert_eq!(result.resolution.root, fallback);
    assert_eq!(
        result.resolution.fallback,
        Some(FallbackReason::PrimaryNotWritable)
    );
    assert!(DirectorySet::under(&fallback).all_exist());
    assert_eq!(fs::read_dir(&primary).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn test_read_only_primary_directory_uses_fallback() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let primary = tmp.path().join("data");
    fs::create_dir(&primary).unwrap();
    fs::set_permissions(&primary, fs::Permissions::from_mode(0o555)).unwrap();
    let fallback = tmp.path().join("persistent_data");

    // Privileged users bypass mode bits; nothing to observe then.
    if fs::write(primary.join("probe-check"), b"").is_ok() {
        fs::remove_file(primary.join("probe-check")).unwrap();
        fs::set_permissions(&primary, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = setup_storage(&primary, &fallback).unwrap();
    fs::set_permissions(&primary, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(result.resolution.root, fallback);
    assert!(!result.resolution.persistent);
}

#[test]
fn test_manifest_lists_root_and_every_directory() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("persistent_data");

    let result = setup_storage(&tmp.path().join("absent"), &root).unwrap();
    let lines = manifest_lines(&root);

    assert_eq!(lines.len(), 7);
    let listed: Vec<&str> = lines[2..].iter().map(String::as_str).collect();
    let expected: Vec<String> = result
        .directories
        .entries()
        .iter()
        .map(|(role, path)| format!("{}: {}", role.dir_name(), path.display()))
        .collect();
    assert_eq!(listed, expected);
}

#[test]
fn test_rerun_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let primary = tmp.path().join("data");
    let fallback = tmp.path().join("persistent_data");

    setup_storage(&primary, &fallback).unwrap();
    fs::write(fallback.join("uploads/photo.jpg"), b"jpeg").unwrap();
    let first = manifest_lines(&fallback);

    setup_storage(&primary, &fallback).unwrap();
    let second = manifest_lines(&fallback);

    assert_eq!(first.len(), second.len());
    assert_eq!(first[0], second[0]);
    assert!(second[1].starts_with("Created: "));
    assert_eq!(first[2..], second[2..]);
    assert!(fallback.join("uploads/photo.jpg").exists());
    assert!(!fallback.join("uploads/uploads").exists());
    assert_eq!(fs::read_dir(&fallback).unwrap().count(), 6);
}

#[test]
fn test_unwritable_primary_and_fallback_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let primary = tmp.path().join("data");
    fs::create_dir(&primary).unwrap();
    let blocker = tmp.path().join("home");
    fs::write(&blocker, b"a file, not a directory").unwrap();
    let fallback = blocker.join("persistent_data");

    let err = setup_storage_with(&primary, &fallback, &DeniedProbe).unwrap_err();

    assert!(matches!(err, StorageError::DirectoryCreation(_, _)));
    assert!(!fallback.join(MANIFEST_FILE).exists());
}

#[test]
fn test_primary_that_is_a_file_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let primary = tmp.path().join("data");
    fs::write(&primary, b"not a mount").unwrap();
    let fallback = tmp.path().join("persistent_data");

    let err = setup_storage(&primary, &fallback).unwrap_err();

    assert!(matches!(err, StorageError::ProbeFailed(_, _)));
    assert!(!fallback.exists());
}
