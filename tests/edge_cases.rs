//! Edge case and error handling tests for grove


use harness::{TestTree, run_grove};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[cfg(unix)]
#[test]
fn test_symlink_to_directory_not_followed() {
    let tree = TestTree::new();
    tree.add_file("alpha/real/inner_unique.txt", "x");
    tree.add_symlink("real", "alpha/alias");

    let (stdout, _stderr, success) = run_grove(tree.path(), &["-s", "alpha"]);
    assert!(success);
    assert_eq!(
        stdout.matches("inner_unique.txt").count(),
        1,
        "file must be reached once, through the real directory: {}",
        stdout
    );
    assert!(stdout.contains("# of links:        1"), "{}", stdout);
    assert!(stdout.contains("# of directories:  1"), "{}", stdout);
}

#[cfg(unix)]
#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("alpha/subdir/file.txt", "x");
    tree.add_symlink("..", "alpha/subdir/up");

    let (stdout, _stderr, success) = run_grove(tree.path(), &["alpha"]);
    assert!(success, "must not hang on a parent symlink");
    assert!(stdout.contains("file.txt"));
    assert!(stdout.contains("up"), "the link itself is listed: {}", stdout);
}

#[cfg(unix)]
#[test]
fn test_broken_symlink_listed_and_counted_as_link() {
    let tree = TestTree::new();
    tree.add_file("alpha/real.txt", "x");
    tree.add_symlink("nonexistent.txt", "alpha/dangling");

    let (stdout, _stderr, success) = run_grove(tree.path(), &["-s", "alpha"]);
    assert!(success);
    assert!(stdout.contains("dangling"), "{}", stdout);
    assert!(stdout.contains("# of links:        1"), "{}", stdout);
    assert!(stdout.contains("# of files:        1"), "{}", stdout);
}

#[cfg(unix)]
#[test]
fn test_symlink_size_not_added_to_totals() {
    let tree = TestTree::new();
    tree.add_file("alpha/data.txt", "hello");
    tree.add_symlink("data.txt", "alpha/link_to_data");

    let (stdout, _stderr, success) = run_grove(tree.path(), &["-s", "alpha"]);
    assert!(success);
    assert!(
        stdout.contains("total file size:   5 bytes"),
        "only regular files contribute size: {}",
        stdout
    );
}

// ============================================================================
// Unreadable Directories
// ============================================================================

#[cfg(unix)]
#[test]
fn test_unreadable_directory_skipped_with_warning() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let tree = TestTree::new();
    tree.add_file("alpha/locked/secret.txt", "x");
    tree.add_file("alpha/open.txt", "x");

    let locked = tree.path().join("alpha/locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let (stdout, stderr, success) = run_grove(tree.path(), &["-s", "alpha"]);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success, "skip-and-continue, not a failure: {}", stderr);
    assert!(stderr.contains("cannot open"), "{}", stderr);
    // The locked directory itself is visible and counted; its contents are not
    assert!(stdout.contains("# of directories:  1"), "{}", stdout);
    assert!(stdout.contains("# of files:        1"), "{}", stdout);
    assert!(!stdout.contains("secret.txt"), "{}", stdout);
}

#[cfg(unix)]
#[test]
fn test_unreadable_root_contributes_zero() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let tree = TestTree::new();
    tree.add_file("locked/secret.txt", "x");
    tree.add_file("open/a.txt", "x");

    let locked = tree.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let (stdout, stderr, success) = run_grove(tree.path(), &["-s", "locked", "open"]);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success, "{}", stderr);
    assert!(stdout.contains("Analyzed 2 directories:"), "{}", stdout);
    assert!(
        stdout.contains(&format!("total # of files:        {:>16}", 1)),
        "only the open root contributes: {}",
        stdout
    );
}

// ============================================================================
// Special File Types
// ============================================================================

#[cfg(unix)]
#[test]
fn test_fifo_counted_as_pipe() {
    let tree = TestTree::new();
    tree.add_file("alpha/normal.txt", "x");
    tree.add_fifo("alpha/pipe");

    let (stdout, _stderr, success) = run_grove(tree.path(), &["-s", "alpha"]);
    assert!(success);
    assert!(stdout.contains("pipe"), "{}", stdout);
    assert!(stdout.contains("# of pipes:        1"), "{}", stdout);
    assert!(stdout.contains("# of files:        1"), "{}", stdout);
}

#[cfg(unix)]
#[test]
fn test_socket_counted() {
    use std::os::unix::net::UnixListener;

    let tree = TestTree::new();
    tree.add_dir("alpha");
    let _listener = UnixListener::bind(tree.path().join("alpha/sock")).unwrap();

    let (stdout, _stderr, success) = run_grove(tree.path(), &["-s", "alpha"]);
    assert!(success);
    assert!(stdout.contains("# of sockets:      1"), "{}", stdout);
}

// ============================================================================
// Deep Trees
// ============================================================================

#[test]
fn test_deeply_nested_tree_walks_fully() {
    let tree = TestTree::new();
    let mut path = String::from("alpha");
    for i in 0..40 {
        path.push_str(&format!("/level{}", i));
    }
    tree.add_file(&format!("{}/bottom.txt", path), "x");

    let (stdout, _stderr, success) = run_grove(tree.path(), &["-s", "alpha"]);
    assert!(success);
    assert!(stdout.contains("bottom.txt"), "{}", stdout);
    assert!(stdout.contains("# of directories:  40"), "{}", stdout);
}

// ============================================================================
// CLI Errors
// ============================================================================

mod cli {
    use assert_cmd::Command;
    use predicates::prelude::*;

    #[test]
    fn test_unrecognized_flag_fails_with_usage() {
        Command::cargo_bin("grove")
            .unwrap()
            .arg("-x")
            .assert()
            .failure()
            .stderr(predicate::str::contains("unexpected argument"));
    }

    #[test]
    fn test_help_exits_with_failure() {
        Command::cargo_bin("grove")
            .unwrap()
            .arg("-h")
            .assert()
            .failure()
            .stdout(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_json_requires_summary() {
        Command::cargo_bin("grove")
            .unwrap()
            .arg("--json")
            .assert()
            .failure();
    }
}
