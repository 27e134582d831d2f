use std::path::PathBuf;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_dmg-backdrop")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "dmg-backdrop.exe"
            } else {
                "dmg-backdrop"
            });
            p
        })
}

#[test]
fn cli_creates_missing_parent_dirs_and_writes_png() {
    let dir = PathBuf::from("target").join("cli_smoke");
    let _ = std::fs::remove_dir_all(&dir);

    let out_path = dir.join("does").join("not").join("exist").join("bg.png");
    assert!(!out_path.parent().unwrap().exists());

    let output = std::process::Command::new(exe())
        .arg(&out_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(out_path.exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("bg.png"));

    let decoded = image::open(&out_path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (540, 300));
}

#[test]
fn cli_without_arguments_prints_usage_on_stdout_and_fails() {
    let output = std::process::Command::new(exe()).output().unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.to_lowercase().contains("usage"));
}

#[test]
fn cli_with_extra_arguments_fails_without_writing() {
    let dir = PathBuf::from("target").join("cli_smoke_extra");
    let _ = std::fs::remove_dir_all(&dir);
    let out_path = dir.join("bg.png");

    let output = std::process::Command::new(exe())
        .arg(&out_path)
        .arg("unexpected")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!out_path.exists());
}

#[test]
fn cli_runs_are_byte_identical() {
    let dir = PathBuf::from("target").join("cli_smoke_idempotent");
    std::fs::create_dir_all(&dir).unwrap();
    let a = dir.join("a.png");
    let b = dir.join("b.png");

    for path in [&a, &b] {
        let status = std::process::Command::new(exe()).arg(path).status().unwrap();
        assert!(status.success());
    }

    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
}
