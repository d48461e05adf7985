use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn gitspect() -> Command {
    Command::cargo_bin("gitspect").expect("binary")
}

fn git_ok(repo: &Path, args: &[&str]) -> String {
    let out = std::process::Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(args)
        .output()
        .expect("git command");
    assert!(out.status.success(), "git {:?} failed", args);
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

/// Two commits: `calc.py` plus a README, then a second function and a deleted README.
fn setup_repo() -> (TempDir, String, String) {
    let dir = TempDir::new().expect("tempdir");
    let repo = dir.path();

    git_ok(repo, &["init"]);
    git_ok(repo, &["config", "user.email", "test@example.com"]);
    git_ok(repo, &["config", "user.name", "Test"]);
    git_ok(repo, &["config", "commit.gpgsign", "false"]);

    fs::write(repo.join("calc.py"), "def add(a, b):\n    return a + b\n").unwrap();
    fs::write(repo.join("README.md"), "# calc\n").unwrap();
    git_ok(repo, &["add", "."]);
    git_ok(repo, &["commit", "-m", "add calc"]);
    let c1 = git_ok(repo, &["rev-parse", "HEAD"]);

    fs::write(
        repo.join("calc.py"),
        "def add(a, b):\n    return a + b\n\ndef sub(a, b):\n    return a - b\n",
    )
    .unwrap();
    fs::remove_file(repo.join("README.md")).unwrap();
    git_ok(repo, &["add", "-A"]);
    git_ok(repo, &["commit", "-m", "add sub"]);
    let c2 = git_ok(repo, &["rev-parse", "HEAD"]);

    (dir, c1, c2)
}

#[test]
fn commits_lists_newest_first() {
    let (dir, c1, c2) = setup_repo();

    gitspect()
        .args(["-q", "commits", "--repo"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(format!("{c2}\tadd sub\n{c1}\tadd calc\n"));

    gitspect()
        .args(["-q", "commits", "--reverse", "--end", "1", "--repo"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(format!("{c1}\tadd calc\n"));
}

#[test]
fn history_segments_changed_files_at_each_commit() {
    let (dir, c1, c2) = setup_repo();

    let output = gitspect()
        .args(["-q", "history", "--json", "--reverse", "--repo"])
        .arg(dir.path())
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let docs = body.as_array().expect("array");
    assert_eq!(docs.len(), 2, "README must be skipped: {body}");

    assert_eq!(docs[0]["document_name"], format!("calc.py@{c1}"));
    assert_eq!(docs[0]["message"], "add calc");
    assert_eq!(docs[0]["segments"].as_array().map(Vec::len), Some(2));

    assert_eq!(docs[1]["document_name"], format!("calc.py@{c2}"));
    assert_eq!(docs[1]["commit_id"], c2.as_str());
    assert_eq!(
        docs[1]["segments"],
        serde_json::json!([
            {"start": 0, "end": 2},
            {"start": 3, "end": 5},
            {"start": 0, "end": 4},
        ])
    );
}

#[test]
fn history_from_revision_and_all_files() {
    let (dir, c1, c2) = setup_repo();

    gitspect()
        .args(["-q", "history", "--from", c1.as_str(), "--repo"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("calc.py@{c2}\t3\t5")))
        .stdout(predicate::str::contains(format!("@{c1}")).not());

    gitspect()
        .args(["-q", "history", "--all-files", "--end", "1", "--reverse", "--repo"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("README.md@{c1}\t0\t0")));
}

#[test]
fn history_summary_names_repository_and_totals() {
    let (dir, _, _) = setup_repo();

    gitspect()
        .args(["history", "--repo"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "Segmented 2 documents across 2 commits of {} | Lines: 7 |",
            dir.path().display()
        )));
}

#[test]
fn plain_directory_is_rejected() {
    let dir = TempDir::new().unwrap();
    gitspect()
        .args(["commits", "--repo"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a git repository"));
}
