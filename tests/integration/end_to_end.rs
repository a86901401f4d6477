// tests/integration/end_to_end.rs
use predicates::prelude::*;

use crate::common::{ParsedReport, TempWorkspace, line_counter};

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn recursive_scan_skips_hidden_directories() {
    let ws = TempWorkspace::new();
    ws.create_file("a.py", "x = 1\ny = 2\nprint(x + y)");
    ws.create_file("b.go", "");
    ws.create_file(".git/config", "[core]\n\tbare = false\n");
    ws.create_file(".git/hooks/update.sh", "#!/bin/sh\n");

    let assert = line_counter().arg("--dir").arg(ws.path()).assert().success();
    let stdout = stdout_of(&assert);
    let report = ParsedReport::parse(&stdout);

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.row_for("a.py"), Some(3));
    assert_eq!(report.row_for("b.go"), Some(0));
    assert_eq!(report.total_lines, Some(3));
    assert_eq!(report.total_files, Some(2));
    assert!(!stdout.contains(".git"));
    report.assert_consistent();
}

#[test]
fn shallow_and_recursive_modes_differ_on_subdirectories() {
    let ws = TempWorkspace::new();
    ws.create_file("x.py", "print('x')\n");
    ws.create_file("sub/y.py", "1\n2\n3\n4\n5\n");

    let shallow = line_counter().arg("-d").arg(ws.path()).arg("-n").assert().success();
    let shallow_out = stdout_of(&shallow);
    let report = ParsedReport::parse(&shallow_out);
    assert!(shallow_out.contains("Mode: current directory only"));
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.row_for("x.py"), Some(1));
    assert_eq!(report.row_for("y.py"), None);

    let recursive = line_counter().arg("-d").arg(ws.path()).assert().success();
    let recursive_out = stdout_of(&recursive);
    let report = ParsedReport::parse(&recursive_out);
    assert!(recursive_out.contains("Mode: recursive (all subdirectories)"));
    assert_eq!(report.row_for("y.py"), Some(5));
    assert_eq!(report.total_lines, Some(6));
    report.assert_consistent();
}

#[test]
fn missing_directory_exits_with_one() {
    let ws = TempWorkspace::new();
    let missing = ws.path().join("does-not-exist");

    line_counter()
        .arg("-d")
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("does-not-exist"))
        .stdout(predicate::str::contains("TOTAL").not())
        .stdout(predicate::str::contains("Scanning directory").not());
}

#[test]
fn empty_tree_reports_no_files() {
    let ws = TempWorkspace::new();
    ws.create_file("image.png", "not really a png");
    ws.create_file("Makefile", "all:\n\ttrue\n");

    line_counter()
        .arg("-d")
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No code files found in the directory."))
        .stdout(predicate::str::contains("FILE PATH").not())
        .stdout(predicate::str::contains("TOTAL").not());
}

#[test]
fn help_wins_over_missing_directory() {
    line_counter()
        .args(["--help", "--dir", "/nonexistent/line-counter-test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-recursive"))
        .stdout(predicate::str::contains("Supported file types"))
        .stdout(predicate::str::contains("does not exist").not());

    line_counter().arg("-h").assert().success().stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_prints_version() {
    line_counter()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn extensions_match_case_insensitively() {
    let ws = TempWorkspace::new();
    ws.create_file("FOO.PY", "a\nb\n");
    ws.create_file("foo.py", "a\n");
    ws.create_file("foo.pyc", "binary-ish\n");

    let assert = line_counter().arg("-d").arg(ws.path()).assert().success();
    let report = ParsedReport::parse(&stdout_of(&assert));

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.row_for("FOO.PY"), Some(2));
    assert_eq!(report.row_for("foo.pyc"), None);
}

#[test]
fn last_dir_flag_wins() {
    let first = TempWorkspace::new();
    first.create_file("first.rs", "1\n");
    let second = TempWorkspace::new();
    second.create_file("second.rs", "1\n2\n");

    let assert = line_counter()
        .arg("-d")
        .arg(first.path())
        .arg("--dir")
        .arg(second.path())
        .assert()
        .success();
    let report = ParsedReport::parse(&stdout_of(&assert));

    assert_eq!(report.row_for("second.rs"), Some(2));
    assert_eq!(report.row_for("first.rs"), None);
}

#[test]
fn defaults_to_current_directory() {
    let ws = TempWorkspace::new();
    ws.create_file("main.rs", "fn main() {}\n");

    ws.create_file("sub/util.rs", "pub fn u() {}\n");

    for extra in [None, Some("-n")] {
        let assert = line_counter().current_dir(ws.path()).args(extra).assert().success();
        let stdout = stdout_of(&assert);

        assert!(stdout.contains("Scanning directory: ."));
        assert!(stdout.lines().any(|line| line.starts_with("main.rs ")));
        assert!(!stdout.contains("./"));
    }

    let assert = line_counter().current_dir(ws.path()).assert().success();
    let stdout = stdout_of(&assert);
    assert!(stdout.lines().any(|line| line.starts_with("sub/util.rs ") || line.starts_with("sub\\util.rs ")));
    assert!(stdout.contains("Total files: 2"));
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_reported_and_skipped() {
    let ws = TempWorkspace::new();
    ws.create_file("ok.rs", "1\n2\n");
    std::os::unix::fs::symlink(ws.path().join("vanished.rs"), ws.path().join("dangling.rs")).unwrap();

    let assert = line_counter()
        .arg("-d")
        .arg(ws.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    let stdout = stdout_of(&assert);
    let report = ParsedReport::parse(&stdout);

    assert!(stdout.contains("Error reading file "));
    assert!(stdout.contains("dangling.rs"));
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.total_files, Some(1));
}

#[cfg(unix)]
#[test]
fn shallow_scan_of_a_file_is_fatal() {
    let ws = TempWorkspace::new();
    let file = ws.create_file("lonely.rs", "fn main() {}\n");

    line_counter()
        .arg("-n")
        .arg("-d")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: failed to scan directory"))
        .stdout(predicate::str::contains("TOTAL").not());
}

#[test]
fn debug_logging_goes_to_stderr() {
    let ws = TempWorkspace::new();
    ws.create_file("lib.rs", "pub fn f() {}\n");

    line_counter()
        .arg("-d")
        .arg(ws.path())
        .args(["--log-level", "debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("counted file"))
        .stderr(predicate::str::contains("\u{1b}[").not())
        .stdout(predicate::str::contains("counted file").not());
}
