use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, SystemTime};

use rec_provision::provisioner::{EnvSource, ProvisionError, Provisioner, provision};
use tempfile::TempDir;

fn write(project: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = project.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn staged(project: &Path) -> Vec<u8> {
    fs::read(project.join("data").join(".env")).unwrap()
}

#[test]
fn test_copies_primary_env() {
    let project = TempDir::new().unwrap();
    write(&project, ".env", b"WIFI_SSID=home\nAPI_KEY=secret\n");
    write(&project, ".env.example", b"WIFI_SSID=\nAPI_KEY=\n");

    let source = provision(project.path()).unwrap();

    assert_eq!(source, EnvSource::Primary);
    assert_eq!(staged(project.path()), b"WIFI_SSID=home\nAPI_KEY=secret\n");
}

#[test]
fn test_falls_back_to_example() {
    let project = TempDir::new().unwrap();
    write(&project, ".env.example", b"WIFI_SSID=\n");

    let source = provision(project.path()).unwrap();

    assert_eq!(source, EnvSource::Fallback);
    assert_eq!(staged(project.path()), b"WIFI_SSID=\n");
}

#[test]
fn test_missing_source_is_an_error() {
    let project = TempDir::new().unwrap();

    match provision(project.path()) {
        Err(ProvisionError::MissingSource { project_dir }) => {
            assert_eq!(project_dir, project.path());
        }
        other => panic!("Unexpected result {other:?}"),
    }

    // The data directory is created before the sources are checked.
    assert!(project.path().join("data").is_dir());
    assert!(!project.path().join("data").join(".env").exists());
}

#[test]
fn test_existing_data_directory_is_reused() {
    let project = TempDir::new().unwrap();
    fs::create_dir_all(project.path().join("data")).unwrap();
    write(&project, "data/.env", b"stale and longer than the source");
    write(&project, ".env", b"fresh");

    provision(project.path()).unwrap();
    provision(project.path()).unwrap();

    assert_eq!(staged(project.path()), b"fresh");
}

#[test]
fn test_preserves_modification_time() {
    let project = TempDir::new().unwrap();
    let source = write(&project, ".env", b"KEY=value\n");

    let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    fs::File::options()
        .write(true)
        .open(&source)
        .unwrap()
        .set_modified(modified)
        .unwrap();

    let provisioner = Provisioner::new(project.path());
    provisioner.provision().unwrap();

    let copied = fs::metadata(provisioner.destination()).unwrap();
    assert_eq!(copied.modified().unwrap(), modified);
}

#[test]
fn test_read_only_source() {
    let project = TempDir::new().unwrap();
    let source = write(&project, ".env", b"KEY=locked\n");

    let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
    fs::File::options()
        .write(true)
        .open(&source)
        .unwrap()
        .set_modified(modified)
        .unwrap();

    let mut permissions = fs::metadata(&source).unwrap().permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&source, permissions).unwrap();

    let provisioner = Provisioner::new(project.path());
    assert_eq!(provisioner.provision().unwrap(), EnvSource::Primary);

    let copied = fs::metadata(provisioner.destination()).unwrap();
    assert!(copied.permissions().readonly());
    assert_eq!(copied.modified().unwrap(), modified);
    assert_eq!(staged(project.path()), b"KEY=locked\n");
}

#[test]
fn test_directory_named_env_is_not_a_source() {
    let project = TempDir::new().unwrap();
    fs::create_dir_all(project.path().join(".env")).unwrap();
    write(&project, ".env.example", b"EXAMPLE=1\n");

    assert_eq!(provision(project.path()).unwrap(), EnvSource::Fallback);
}

#[test]
fn test_binary_exit_status() {
    let binary = env!("CARGO_BIN_EXE_rec-provision");

    let empty = TempDir::new().unwrap();
    let output = Command::new(binary)
        .arg("--project-dir")
        .arg(empty.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Neither .env nor .env.example found"));

    let ready = TempDir::new().unwrap();
    write(&ready, ".env", b"X=1\n");
    let status = Command::new(binary)
        .env("PROJECT_DIR", ready.path())
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(staged(ready.path()), b"X=1\n");
}

#[test]
fn test_binary_warns_on_fallback() {
    let binary = env!("CARGO_BIN_EXE_rec-provision");

    let project = TempDir::new().unwrap();
    write(&project, ".env.example", b"EXAMPLE=1\n");

    let output = Command::new(binary)
        .arg("--project-dir")
        .arg(project.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Using .env.example! Create .env file for production."),
        "{stderr}"
    );
    assert_eq!(staged(project.path()), b"EXAMPLE=1\n");
}
