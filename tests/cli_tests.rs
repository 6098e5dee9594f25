use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

// These tests stay offline on purpose: the catalog and bundle endpoints are
// fixed remote URLs, so everything network-facing is covered by the library
// tests against local fixtures instead.

#[test]
fn test_scan_lists_executables() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Game.exe"), "").unwrap();
    fs::write(dir.path().join("UnityCrashHandler64.exe"), "").unwrap();
    fs::write(dir.path().join("readme.txt"), "").unwrap();

    let output = Command::cargo_bin("steampatch")
        .unwrap()
        .arg("scan")
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8_lossy(&output);
    assert!(output_str.contains("Game.exe"));
    assert!(output_str.contains("UnityCrashHandler64.exe"));
    assert!(!output_str.contains("readme.txt"));
}

#[test]
fn test_scan_empty_folder_prints_notice() {
    let dir = tempdir().unwrap();

    let output = Command::cargo_bin("steampatch")
        .unwrap()
        .arg("scan")
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert!(String::from_utf8_lossy(&output).contains("No executables found"));
}

#[test]
fn test_scan_missing_folder_fails() {
    let dir = tempdir().unwrap();

    let output = Command::cargo_bin("steampatch")
        .unwrap()
        .arg("scan")
        .arg(dir.path().join("no-such-folder"))
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    assert!(String::from_utf8_lossy(&output).contains("could not scan"));
}

#[test]
fn test_search_degrades_when_catalog_is_unreachable() {
    // a dead proxy makes the catalog fetch fail without leaving the machine
    let output = Command::cargo_bin("steampatch")
        .unwrap()
        .env("http_proxy", "http://127.0.0.1:9")
        .env("https_proxy", "http://127.0.0.1:9")
        .arg("search")
        .arg("Game.exe")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert!(String::from_utf8_lossy(&output).contains("No matches for Game.exe"));
}

#[test]
fn test_install_rejects_missing_directory() {
    let dir = tempdir().unwrap();

    let output = Command::cargo_bin("steampatch")
        .unwrap()
        .arg("install")
        .arg(dir.path().join("no-such-folder"))
        .arg("Game.exe")
        .args(["--app-id", "440"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    assert!(String::from_utf8_lossy(&output).contains("not an existing directory"));
}

#[test]
fn test_install_rejects_missing_executable() {
    let dir = tempdir().unwrap();

    let output = Command::cargo_bin("steampatch")
        .unwrap()
        .arg("install")
        .arg(dir.path())
        .arg("Game.exe")
        .args(["--app-id", "440"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    assert!(String::from_utf8_lossy(&output).contains("Game.exe not found"));
}

#[test]
fn test_install_rejects_path_shaped_executable_name() {
    let root = tempdir().unwrap();
    let game = root.path().join("game");
    let other = root.path().join("other");
    fs::create_dir(&game).unwrap();
    fs::create_dir(&other).unwrap();
    // the file exists where the traversal points, so only the name check
    // can reject it
    fs::write(other.join("Game.exe"), "").unwrap();

    let output = Command::cargo_bin("steampatch")
        .unwrap()
        .arg("install")
        .arg(&game)
        .arg("../other/Game.exe")
        .args(["--app-id", "440"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    assert!(String::from_utf8_lossy(&output).contains("is not a plain file name"));
}

#[test]
fn test_install_rejects_absolute_executable_path() {
    let dir = tempdir().unwrap();
    let elsewhere = tempdir().unwrap();
    let exe = elsewhere.path().join("Game.exe");
    fs::write(&exe, "").unwrap();

    let output = Command::cargo_bin("steampatch")
        .unwrap()
        .arg("install")
        .arg(dir.path())
        .arg(&exe)
        .args(["--app-id", "440"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    assert!(String::from_utf8_lossy(&output).contains("is not a plain file name"));
}

#[test]
fn test_install_rejects_non_executable_name() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    let output = Command::cargo_bin("steampatch")
        .unwrap()
        .arg("install")
        .arg(dir.path())
        .arg("notes.txt")
        .args(["--app-id", "440"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    assert!(String::from_utf8_lossy(&output).contains("does not end in .exe"));
}

#[test]
fn test_help_lists_subcommands() {
    let output = Command::cargo_bin("steampatch")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8_lossy(&output);
    assert!(output_str.contains("scan"));
    assert!(output_str.contains("search"));
    assert!(output_str.contains("install"));
}
