use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

fn workdir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("icons")).unwrap();
    temp_dir
}

fn icons_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.join("icons"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

#[test]
#[cfg(feature = "render")]
fn writes_icons_into_empty_dir() {
    let temp_dir = workdir();
    let output = Command::new(env!("CARGO_BIN_EXE_create-png-icons"))
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "Created icon16.png",
            "Created icon48.png",
            "Created icon128.png",
            "",
            "Icon placeholders created successfully!",
            "For production, please create professional icons with your design tool.",
        ]
    );
    assert_eq!(
        icons_in(temp_dir.path()),
        ["icon128.png", "icon16.png", "icon48.png"]
    );
}

#[test]
#[cfg(feature = "render")]
fn fails_without_icons_dir() {
    let temp_dir = workdir();
    let icons = temp_dir.path().join("icons");
    fs::remove_dir(&icons).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_create-png-icons"))
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!icons.exists());
}

// run with `cargo test --no-default-features`
#[test]
#[cfg(not(feature = "render"))]
fn exits_with_rebuild_hint_when_renderer_missing() {
    let temp_dir = workdir();
    let existing = temp_dir.path().join("icons").join("icon16.png");
    fs::write(&existing, b"previous icon").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_create-png-icons"))
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Error: "));
    assert_eq!(lines[1], "Please rebuild it with: cargo build --features render");

    assert_eq!(icons_in(temp_dir.path()), ["icon16.png"]);
    assert_eq!(fs::read(&existing).unwrap(), b"previous icon");
}
