//! End-to-end CLI integration tests for the `shelf` binary.
//!
//! Each test builds its own temporary repository (with a bare repository
//! as its `origin` remote) and runs the `shelf` binary as a subprocess via
//! `assert_cmd`.

use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const BOOKS: &str = "# Reading List\n\n## Science Fiction\n\n- [ ] **Dune** by *Frank Herbert*\n";

/// Build a `Command` targeting the cargo-built `shelf` binary, isolated
/// from the developer's environment.
fn shelf(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap())
        .env_remove("SHELF_FILE")
        .env_remove("SHELF_REMOTE")
        .env_remove("SHELF_BRANCH")
        .env_remove("SHELF_STRICT_STATUS");
    cmd
}

/// Run git in `dir`, panicking on failure, and return trimmed stdout.
fn git(dir: &Path, args: &[&str]) -> String {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A working repository with `books.md` committed and pushed to a bare
/// remote. Returns `(root, work, remote)`; `root` owns both directories.
fn published_repo() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let root = TempDir::new().unwrap();
    let work = root.path().join("work");
    let remote = root.path().join("remote.git");
    std::fs::create_dir(&work).unwrap();
    std::fs::create_dir(&remote).unwrap();

    git(&remote, &["init", "--bare", "--quiet"]);
    git(&work, &["init", "--quiet"]);
    git(&work, &["config", "user.name", "Shelf Test"]);
    git(&work, &["config", "user.email", "shelf@example.com"]);
    git(&work, &["config", "commit.gpgsign", "false"]);
    git(&work, &["remote", "add", "origin", remote.to_str().unwrap()]);

    std::fs::write(work.join("books.md"), BOOKS).unwrap();
    git(&work, &["add", "books.md"]);
    git(&work, &["commit", "--quiet", "-m", "Initial list"]);
    git(&work, &["push", "--quiet", "-u", "origin", "HEAD"]);

    (root, work, remote)
}

fn add_book(work: &Path, line: &str) {
    let mut books = std::fs::read_to_string(work.join("books.md")).unwrap();
    books.push_str(line);
    books.push('\n');
    std::fs::write(work.join("books.md"), books).unwrap();
}

fn commit_count(dir: &Path) -> usize {
    git(dir, &["rev-list", "--count", "HEAD"]).parse().unwrap()
}

fn last_subject(dir: &Path) -> String {
    git(dir, &["log", "-1", "--format=%s"])
}

// ---------------------------------------------------------------------------
// Help
// ---------------------------------------------------------------------------

#[test]
fn help_with_dirty_tree_runs_no_git() {
    let (_root, work, _remote) = published_repo();
    add_book(&work, "- [ ] **Hyperion** by *Dan Simmons*");

    shelf(&work)
        .args(["Finished", "reading", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Add all changes to git"));

    assert_eq!(commit_count(&work), 1);
    assert!(!git(&work, &["status", "--porcelain"]).is_empty());
}

#[test]
fn short_help_flag() {
    let tmp = TempDir::new().unwrap();
    shelf(tmp.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

// ---------------------------------------------------------------------------
// Preconditions
// ---------------------------------------------------------------------------

#[test]
fn outside_repository_fails() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("books.md"), BOOKS).unwrap();

    shelf(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a git repository"));
}

#[test]
fn missing_book_list_fails() {
    let (_root, work, _remote) = published_repo();
    std::fs::remove_file(work.join("books.md")).unwrap();

    shelf(&work)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("books.md not found"));

    assert_eq!(commit_count(&work), 1);
}

// ---------------------------------------------------------------------------
// Publishing
// ---------------------------------------------------------------------------

#[test]
fn clean_tree_is_up_to_date() {
    let (_root, work, _remote) = published_repo();

    shelf(&work)
        .arg("Nothing to see")
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));

    assert_eq!(commit_count(&work), 1);
}

#[test]
fn publishes_with_given_message() {
    let (_root, work, remote) = published_repo();
    add_book(&work, "- [x] **Dune Messiah** by *Frank Herbert*");

    shelf(&work)
        .arg("Finished reading Dune")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commit message: \"Finished reading Dune\""))
        .stdout(predicate::str::contains("Book list updated successfully!"));

    assert_eq!(last_subject(&work), "Finished reading Dune");
    assert_eq!(last_subject(&remote), "Finished reading Dune");
    assert!(git(&work, &["status", "--porcelain"]).is_empty());
}

#[test]
fn message_words_are_joined() {
    let (_root, work, remote) = published_repo();
    add_book(&work, "- [ ] **Foundation** by *Isaac Asimov*");

    shelf(&work)
        .args(["Added", "Foundation", "to", "wishlist"])
        .assert()
        .success();

    assert_eq!(last_subject(&remote), "Added Foundation to wishlist");
}

#[test]
fn generated_message_without_words() {
    let (_root, work, _remote) = published_repo();
    add_book(&work, "- [ ] **Solaris** by *Stanislaw Lem*");

    shelf(&work).assert().success();

    let subject = last_subject(&work);
    assert!(
        subject.starts_with("Update book list - ") && subject.contains(" at "),
        "unexpected subject: {subject}"
    );
    assert!(subject.ends_with(" AM") || subject.ends_with(" PM"), "{subject}");
}

#[test]
fn failed_push_keeps_local_commit() {
    let (_root, work, remote) = published_repo();
    add_book(&work, "- [ ] **Neuromancer** by *William Gibson*");
    std::fs::remove_dir_all(&remote).unwrap();

    shelf(&work)
        .arg("Added Neuromancer")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Pushing to remote..."))
        .stdout(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Update failed"));

    assert_eq!(commit_count(&work), 2);
    assert_eq!(last_subject(&work), "Added Neuromancer");
}

#[test]
fn verbose_logs_failing_status_and_stays_up_to_date() {
    let (_root, work, _remote) = published_repo();
    add_book(&work, "- [ ] **Anathem** by *Neal Stephenson*");
    std::fs::write(work.join(".git").join("index"), "not an index").unwrap();

    shelf(&work)
        .args(["-v", "Added Anathem"])
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"))
        .stderr(predicate::str::contains("repository found"))
        .stderr(predicate::str::contains("git status failed"));

    assert_eq!(commit_count(&work), 1);
}

#[test]
fn without_verbose_failing_status_is_silent() {
    let (_root, work, _remote) = published_repo();
    std::fs::write(work.join(".git").join("index"), "not an index").unwrap();

    shelf(&work)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn json_report_lists_steps() {
    let (_root, work, _remote) = published_repo();
    add_book(&work, "- [ ] **Ubik** by *Philip K. Dick*");

    let output = shelf(&work)
        .args(["--json", "Added", "Ubik"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "shelf failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcome"], "published");
    assert_eq!(report["commit_message"], "Added Ubik");
    assert_eq!(report["changes"][0]["path"], "books.md");
    let steps: Vec<&str> = report["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["step"].as_str().unwrap())
        .collect();
    assert_eq!(steps, vec!["stage", "commit", "push"]);
}

#[test]
fn json_error_on_failure() {
    let tmp = TempDir::new().unwrap();

    let output = shelf(tmp.path()).arg("--json").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert!(err["error"].as_str().unwrap().contains("books.md not found"));
}

#[test]
fn quiet_mode_prints_nothing_on_success() {
    let (_root, work, _remote) = published_repo();
    add_book(&work, "- [ ] **Contact** by *Carl Sagan*");

    shelf(&work)
        .args(["-q", "Added Contact"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(last_subject(&work), "Added Contact");
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn config_file_selects_tracked_file() {
    let (_root, work, _remote) = published_repo();
    std::fs::write(work.join(".shelf.yaml"), "file: reading.md\nnotice: \"\"\n").unwrap();

    shelf(&work)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading.md not found"));

    std::fs::write(work.join("reading.md"), BOOKS).unwrap();
    shelf(&work)
        .arg("Track reading.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub Pages").not());

    assert_eq!(last_subject(&work), "Track reading.md");
}

#[test]
fn env_and_flag_override_file() {
    let (_root, work, _remote) = published_repo();

    shelf(&work)
        .env("SHELF_FILE", "library.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("library.md not found"));

    shelf(&work)
        .env("SHELF_FILE", "library.md")
        .args(["--file", "books.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn missing_explicit_config_fails() {
    let (_root, work, _remote) = published_repo();

    shelf(&work)
        .args(["--config", "nope.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn custom_message_prefix_from_config() {
    let (_root, work, _remote) = published_repo();
    std::fs::write(work.join(".shelf.yaml"), "message_prefix: Reading log\n").unwrap();

    shelf(&work).assert().success();

    assert!(last_subject(&work).starts_with("Reading log - "));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    shelf(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("shelf "));
}
