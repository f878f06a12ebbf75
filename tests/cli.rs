//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

fn run_natsort(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_natsort-ls");
    Command::new(bin)
        .args(args)
        .output()
        .expect("failed to run natsort-ls binary")
}

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), "").unwrap();
    }
}

#[test]
fn list_prints_names_in_natural_order() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), &["img10.png", "img2.png", "img1.png"]);

    let output = run_natsort(&["list", dir.path().to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, "img1.png\nimg2.png\nimg10.png\n");
}

#[test]
fn list_applies_extension_and_ignore_filters() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), &["Cover.JPG", "page2.jpg", "page1.JPG", "notes.txt"]);

    let output =
        run_natsort(&["list", dir.path().to_str().unwrap(), "--ext", "jpg", "-i", "Cover.JPG"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, "page1.JPG\npage2.jpg\n");
}

#[test]
fn list_dirs_prints_only_directories() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), &["Book 1.epub"]);
    std::fs::create_dir(dir.path().join("Series 12")).unwrap();
    std::fs::create_dir(dir.path().join("Series 3")).unwrap();

    let output = run_natsort(&["list", dir.path().to_str().unwrap(), "--dirs", "--json"]);
    assert!(output.status.success());
    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(names, vec!["Series 3", "Series 12"]);
}

#[test]
fn list_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let output = run_natsort(&["list", missing.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Failed to read directory"));
    assert!(output.stdout.is_empty());
}

#[test]
fn ext_prints_extensions() {
    let output = run_natsort(&["ext", "archive.tar.gz", "README"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, "gz\nREADME\n");
}

#[test]
fn help_shows_usage() {
    let output = run_natsort(&["list", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--ext"));
    assert!(stdout.contains("--dirs"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_natsort(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

#[cfg(unix)]
#[test]
fn list_prints_non_utf8_names_verbatim() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(OsStr::from_bytes(b"caf\xe9.png")), "").unwrap();
    touch(dir.path(), &["b.png"]);

    let output = run_natsort(&["list", dir.path().to_str().unwrap(), "--ext", "png"]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"b.png\ncaf\xe9.png\n");
}
