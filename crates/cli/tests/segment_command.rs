use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const SHAPES: &str = "\
import math

class Circle:
    def __init__(self, r):
        self.r = r

    def area(self):
        return math.pi * self.r ** 2
";

#[allow(deprecated)]
fn gitspect() -> Command {
    Command::cargo_bin("gitspect").expect("binary")
}

fn setup_project() -> tempfile::TempDir {
    let temp = tempdir().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("pkg")).unwrap();
    fs::write(root.join("pkg/shapes.py"), SHAPES).unwrap();
    fs::write(root.join("pkg/notes.md"), "# notes\n").unwrap();
    temp
}

#[test]
fn segment_prints_tab_separated_spans() {
    let temp = setup_project();

    gitspect()
        .current_dir(temp.path())
        .args(["--quiet", "segment", "pkg/shapes.py"])
        .assert()
        .success()
        .stdout(
            "pkg/shapes.py\t3\t5\n\
             pkg/shapes.py\t6\t8\n\
             pkg/shapes.py\t2\t8\n\
             pkg/shapes.py\t0\t7\n",
        );
}

#[test]
fn segment_walks_directories_for_supported_files() {
    let temp = setup_project();

    let output = gitspect()
        .current_dir(temp.path())
        .args(["--quiet", "segment", "--json", "pkg"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let docs = body.as_array().expect("array");
    assert_eq!(docs.len(), 1, "markdown must be skipped: {body}");
    assert!(docs[0]["document_name"]
        .as_str()
        .unwrap()
        .ends_with("shapes.py"));
    assert_eq!(docs[0]["line_count"], 8);
    assert_eq!(docs[0]["segments"].as_array().map(Vec::len), Some(4));
    assert_eq!(docs[0]["segments"][2], serde_json::json!({"start": 2, "end": 8}));
}

#[test]
fn no_inline_flag_drops_one_line_definitions() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("stub.py"),
        "class Stub:\n    def a(self): pass\n    def b(self): pass\n",
    )
    .unwrap();

    gitspect()
        .current_dir(temp.path())
        .args(["-q", "segment", "stub.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stub.py\t1\t2\n"));

    gitspect()
        .current_dir(temp.path())
        .args(["-q", "--no-inline", "segment", "stub.py"])
        .assert()
        .success()
        .stdout("stub.py\t0\t3\nstub.py\t0\t2\n");
}

#[test]
fn segment_summary_logs_totals() {
    let temp = setup_project();

    gitspect()
        .current_dir(temp.path())
        .args(["segment", "pkg"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Segmented 1 of 1 files | Lines: 8 | Segments: 4 | Definitions: 3 | Covered: 6 | Largest: 6",
        ));
}

#[test]
fn bracket_depth_flag_keeps_hanging_signature_with_its_body() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("hang.py"),
        "def f(a,\n      b):\n    return a + b\n",
    )
    .unwrap();

    gitspect()
        .current_dir(temp.path())
        .args(["-q", "segment", "hang.py"])
        .assert()
        .success()
        .stdout("hang.py\t0\t2\nhang.py\t0\t2\n");

    gitspect()
        .current_dir(temp.path())
        .args(["-q", "--continuation", "bracket-depth", "segment", "hang.py"])
        .assert()
        .success()
        .stdout("hang.py\t0\t3\nhang.py\t0\t2\n");
}

#[test]
fn tab_width_flag_decides_nesting_of_mixed_indentation() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("mixed.py"),
        "def f():\n\tdef g():\n        return 1\n\treturn g\n",
    )
    .unwrap();

    gitspect()
        .current_dir(temp.path())
        .args(["-q", "segment", "mixed.py"])
        .assert()
        .success()
        .stdout("mixed.py\t1\t3\nmixed.py\t0\t4\nmixed.py\t0\t3\n");

    // a tab reaches column 8, so `return 1` is no longer inside g
    gitspect()
        .current_dir(temp.path())
        .args(["-q", "--tab-width", "8", "segment", "mixed.py"])
        .assert()
        .success()
        .stdout("mixed.py\t1\t2\nmixed.py\t0\t4\nmixed.py\t0\t3\n");
}

#[test]
fn config_file_and_flags_are_validated() {
    let temp = setup_project();
    fs::write(temp.path().join("gitspect.toml"), "tab_width = 0\n").unwrap();

    gitspect()
        .current_dir(temp.path())
        .args(["--config", "gitspect.toml", "segment", "pkg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid segmenter configuration"));

    gitspect()
        .current_dir(temp.path())
        .args(["--continuation", "sometimes", "segment", "pkg"])
        .assert()
        .failure();
}

#[test]
fn missing_path_fails() {
    let temp = tempdir().unwrap();
    gitspect()
        .current_dir(temp.path())
        .args(["segment", "absent.py"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path does not exist"));
}
