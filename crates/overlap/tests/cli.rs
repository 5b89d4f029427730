use std::path::PathBuf;
use std::process::{Command, Output};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Runs the binary with a config path that doesn't exist, so a user's own
/// `~/.config/overlap/config.toml` can't change the output.
fn overlap(args: &[&str]) -> Output {
    let no_config = data("no-such-config.toml");
    Command::new(env!("CARGO_BIN_EXE_overlap"))
        .args(args)
        .arg("--config")
        .arg(no_config)
        .output()
        .expect("failed to execute overlap")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_overlap"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute overlap");

    // Assert
    assert!(output.status.success());
    assert!(stdout(&output).contains("overlapping rectangles"));
}

#[test]
fn version_exits_successfully() {
    let output = Command::new(env!("CARGO_BIN_EXE_overlap"))
        .arg("--version")
        .output()
        .expect("failed to execute overlap");

    assert!(output.status.success());
    assert!(stdout(&output).contains("overlap"));
}

#[test]
fn solve_prints_input_and_intersections() {
    // Arrange
    let file = data("sample1.json");

    // Act
    let output = overlap(&["solve", file.to_str().unwrap()]);

    // Assert
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("1: (100, 100), w=250, h=80."));
    assert!(text.contains("4: (160, 140), w=350, h=190."));
    assert!(text.contains("Intersections"));
    assert!(text.contains("Between rectangles 1 and 3 at (140, 160), w=210, h=20."));
    assert!(text.contains("Between rectangles 1, 3 and 4 at (160, 160), w=190, h=20."));
    assert!(text.contains("Between rectangles 2, 3 and 4 at (160, 200), w=210, h=60."));
    assert_eq!(text.matches("Between rectangles").count(), 7);
}

#[test]
fn solve_json_reports_every_group() {
    // Arrange
    let file = data("nested.json");

    // Act
    let output = overlap(&["solve", "--json", file.to_str().unwrap()]);

    // Assert
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = value["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 15 + 4 + 3 + 2 + 1);
    let largest = groups.last().unwrap();
    assert_eq!(largest["size"], 6);
    assert_eq!(
        largest["region"],
        serde_json::json!({ "x": 100, "y": 100, "w": 10, "h": 10 })
    );
}

#[test]
fn adjacent_rectangles_have_no_intersections() {
    let file = data("adjacent.json");

    let output = overlap(&["solve", file.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("No intersections"));
}

#[test]
fn single_rectangle_has_no_intersections() {
    let file = data("single-rect.json");

    let output = overlap(&["solve", file.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("No intersections"));
}

#[test]
fn max_rects_truncates_input() {
    // Arrange — only rectangles 1 and 2 are kept, and they don't overlap
    let file = data("sample1.json");

    // Act
    let output = overlap(&["solve", "--max-rects", "2", file.to_str().unwrap()]);

    // Assert
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(!text.contains("3: "));
    assert!(text.contains("No intersections"));
}

#[test]
fn zero_max_rects_keeps_one_rectangle() {
    // Arrange
    let file = data("sample1.json");

    // Act
    let output = overlap(&["list", "--max-rects", "0", file.to_str().unwrap()]);

    // Assert
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1: (100, 100), w=250, h=80.\n");
}

#[test]
fn list_prints_rectangles_only() {
    let file = data("sample1.json");

    let output = overlap(&["list", file.to_str().unwrap()]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 4);
    assert!(!text.contains("Intersections"));
}

#[test]
fn missing_file_fails() {
    // Act
    let output = overlap(&["solve", "/definitely/not/here/rects.json"]);

    // Assert
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: cannot read"));
}

#[test]
fn document_without_rects_fails() {
    let file = data("invalid-format.json");

    let output = overlap(&["solve", file.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no 'rects' array"));
}

#[test]
fn negative_dimensions_fail() {
    let file = data("negative-values.json");

    let output = overlap(&["solve", file.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("entry 1 has negative dimensions"));
}

#[test]
fn malformed_json_fails() {
    let file = data("truncated.json");

    let output = overlap(&["list", file.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("malformed JSON"));
}

#[test]
fn verbose_logs_to_stderr() {
    let file = data("sample1.json");

    let output = overlap(&["solve", "-v", file.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("[DEBUG] solve: 4 rectangles"));
}
