use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path = std::env::temp_dir().join(format!(
            "glyphport_cli_{tag}_{}_{}",
            std::process::id(),
            ts
        ));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_glyphport(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_glyphport"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("run glyphport")
}

#[test]
fn missing_font_file_fails_with_error() {
    let dir = TestDir::new("missing_font");
    let output = run_glyphport(&["no-such-font.ttf", "--char", "A"], &dir.path);

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error:") && stderr.contains("no-such-font.ttf"),
        "expected load error on stderr, got: {stderr}"
    );
}

#[test]
fn junk_font_data_fails_with_error() {
    let dir = TestDir::new("junk_font");
    let font_path = dir.path.join("junk.ttf");
    fs::write(&font_path, b"this is not a font at all").expect("write junk font");

    let output = run_glyphport(&["junk.ttf", "--char", "A"], &dir.path);

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error:"),
        "expected parse error on stderr, got: {stderr}"
    );
}

#[test]
fn glyph_export_requires_a_character() {
    let dir = TestDir::new("no_char");
    let output = run_glyphport(&["whatever.ttf"], &dir.path);

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--char"),
        "expected argument error mentioning --char, got: {stderr}"
    );
}

#[test]
fn unknown_format_is_rejected_before_running() {
    let dir = TestDir::new("bad_format");
    let output = run_glyphport(
        &["whatever.ttf", "--char", "A", "--format", "bmp"],
        &dir.path,
    );

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("bmp"),
        "expected bad format to be named, got: {stderr}"
    );
}

#[test]
fn unknown_style_is_rejected_before_running() {
    let dir = TestDir::new("bad_style");
    let output = run_glyphport(
        &["whatever.ttf", "--char", "A", "--style", "sepia"],
        &dir.path,
    );

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("sepia"),
        "expected bad style to be named, got: {stderr}"
    );
}
