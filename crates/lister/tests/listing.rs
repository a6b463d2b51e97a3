//! End-to-end listing tests against real temporary directories.

use std::ffi::OsStr;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::{symlink, PermissionsExt};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};
use lister::{Hidden, Identity, ListOptions, Lister, Outcome, SortKey};
use tempfile::TempDir;

// ============================================================================
// Test helpers
// ============================================================================

/// Resolves every uid to `alice` and every gid to `staff`.
struct Staff;

impl Identity for Staff {
    fn user_name(&self, _uid: u32) -> lister::Result<String> {
        Ok("alice".into())
    }

    fn group_name(&self, _gid: u32) -> lister::Result<String> {
        Ok("staff".into())
    }
}

struct Run {
    out: String,
    err: String,
    outcome: Outcome,
}

fn list(opts: ListOptions, targets: &[PathBuf]) -> Run {
    let mut lister = Lister::new(Vec::new(), Vec::new(), Staff, opts).with_now(Local::now());
    let outcome = lister.run(targets).unwrap();
    let (out, err) = lister.finish().unwrap();
    Run {
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
        outcome,
    }
}

fn touch(path: &Path, contents: &[u8], age: Duration) {
    fs::write(path, contents).unwrap();
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::now() - age).unwrap();
}

fn days(n: u64) -> Duration {
    Duration::from_secs(n * 24 * 60 * 60)
}

fn two_files() -> TempDir {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("b.txt"), b"0123456789", days(1));
    touch(&dir.path().join("a.txt"), b"abc", days(2));
    dir
}

fn is_clock(s: &str) -> bool {
    s.len() == 5 && s.as_bytes()[2] == b':' && s.chars().filter(char::is_ascii_digit).count() == 4
}

// ============================================================================
// Short form
// ============================================================================

#[test]
fn short_form_sorted_by_name() {
    let dir = two_files();
    let run = list(ListOptions::default(), &[dir.path().to_path_buf()]);
    assert_eq!(run.out, "a.txt  b.txt\n");
    assert!(run.err.is_empty());
    assert!(run.outcome.is_success());
}

#[test]
fn short_form_reversed() {
    let dir = two_files();
    let opts = ListOptions {
        reverse: true,
        ..Default::default()
    };
    let run = list(opts, &[dir.path().to_path_buf()]);
    assert_eq!(run.out, "b.txt  a.txt\n");
}

#[test]
fn time_sort_newest_first_and_reversed() {
    let dir = two_files();
    touch(&dir.path().join("c.txt"), b"", days(3));

    let opts = ListOptions {
        sort: SortKey::Time,
        ..Default::default()
    };
    let run = list(opts.clone(), &[dir.path().to_path_buf()]);
    assert_eq!(run.out, "b.txt  a.txt  c.txt\n");

    let opts = ListOptions {
        reverse: true,
        ..opts
    };
    let run = list(opts, &[dir.path().to_path_buf()]);
    assert_eq!(run.out, "c.txt  a.txt  b.txt\n");
}

#[test]
fn hidden_files_need_a_flag() {
    let dir = two_files();
    touch(&dir.path().join(".env"), b"", days(1));

    let run = list(ListOptions::default(), &[dir.path().to_path_buf()]);
    assert!(!run.out.contains(".env"));

    let opts = ListOptions {
        hidden: Hidden::AlmostAll,
        ..Default::default()
    };
    let run = list(opts, &[dir.path().to_path_buf()]);
    assert_eq!(run.out, ".env  a.txt  b.txt\n");

    let opts = ListOptions {
        hidden: Hidden::All,
        ..Default::default()
    };
    let run = list(opts, &[dir.path().to_path_buf()]);
    assert_eq!(run.out, ".  ..  .env  a.txt  b.txt\n");
}

// ============================================================================
// Long form
// ============================================================================

#[test]
fn long_form_single_recent_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");
    touch(&path, &[b'x'; 42], days(60));
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    let opts = ListOptions {
        long_form: true,
        ..Default::default()
    };
    let run = list(opts, &[dir.path().to_path_buf()]);
    let lines: Vec<&str> = run.out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("total "));

    let fields: Vec<&str> = lines[1].split_whitespace().collect();
    assert_eq!(fields.len(), 9);
    assert!(fields[0].starts_with("-rw-r--r--"));
    assert_eq!(&fields[1..5], &["1", "alice", "staff", "42"]);
    assert!(is_clock(fields[7]), "expected HH:MM, got {}", fields[7]);
    assert_eq!(fields[8], "report.txt");
}

#[test]
fn long_form_old_file_shows_year() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("old.txt");
    touch(&path, b"", days(400));

    let opts = ListOptions {
        long_form: true,
        ..Default::default()
    };
    let run = list(opts, &[dir.path().to_path_buf()]);
    let row = run.out.lines().nth(1).unwrap();
    let fields: Vec<&str> = row.split_whitespace().collect();

    let modified: DateTime<Local> = fs::metadata(&path).unwrap().modified().unwrap().into();
    assert_eq!(fields[7], modified.format("%Y").to_string());
}

#[test]
fn long_form_columns_align() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("small"), b"1", days(1));
    touch(&dir.path().join("large"), &vec![0u8; 12_345], days(1));

    let opts = ListOptions {
        long_form: true,
        ..Default::default()
    };
    let run = list(opts, &[dir.path().to_path_buf()]);
    let rows: Vec<&str> = run.out.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);

    // Rows are sorted: large, then small. Sizes are right-aligned.
    assert!(rows[0].contains(" staff 12345 "));
    assert!(rows[1].contains(" staff     1 "));
    assert_eq!(rows[0].find(" large"), rows[1].find(" small"));
}

#[test]
fn long_form_symlink_shows_target() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("real"), b"data", days(1));
    symlink("real", dir.path().join("alias")).unwrap();

    let opts = ListOptions {
        long_form: true,
        ..Default::default()
    };
    let run = list(opts, &[dir.path().to_path_buf()]);
    let link_row = run.out.lines().find(|l| l.contains("alias")).unwrap();
    assert!(link_row.starts_with('l'));
    assert!(link_row.ends_with("alias -> real"));
}

#[test]
fn long_form_dot_links_with_all() {
    let dir = two_files();
    let opts = ListOptions {
        long_form: true,
        hidden: Hidden::All,
        ..Default::default()
    };
    let run = list(opts, &[dir.path().to_path_buf()]);
    let names: Vec<&str> = run
        .out
        .lines()
        .skip(1)
        .map(|l| l.rsplit(' ').next().unwrap())
        .collect();
    assert_eq!(names, vec![".", "..", "a.txt", "b.txt"]);
}

#[test]
fn human_readable_sizes() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("blob"), &vec![0u8; 2048], days(1));

    let opts = ListOptions {
        long_form: true,
        human_readable: true,
        ..Default::default()
    };
    let run = list(opts, &[dir.path().to_path_buf()]);
    assert!(run.out.contains(" 2 KiB "));
}

// ============================================================================
// Targets, recursion and errors
// ============================================================================

#[test]
fn file_target_listed_as_given() {
    let dir = two_files();
    let file = dir.path().join("a.txt");
    let run = list(ListOptions::default(), &[file.clone()]);
    assert_eq!(run.out, format!("{}\n", file.display()));
}

#[test]
fn multiple_directories_get_headers() {
    let first = two_files();
    let second = TempDir::new().unwrap();
    touch(&second.path().join("only"), b"", days(1));

    let mut targets = vec![first.path().to_path_buf(), second.path().to_path_buf()];
    targets.sort();
    let run = list(ListOptions::default(), &targets);

    let expected: Vec<String> = targets
        .iter()
        .map(|t| {
            let body = if t == first.path() { "a.txt  b.txt" } else { "only" };
            format!("{}:\n{}\n", t.display(), body)
        })
        .collect();
    assert_eq!(run.out, expected.join("\n"));
}

#[test]
fn recursive_walks_subdirectories() {
    let dir = two_files();
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    touch(&nested.join("leaf"), b"", days(1));
    fs::create_dir(dir.path().join(".cache")).unwrap();

    let opts = ListOptions {
        recursive: true,
        ..Default::default()
    };
    let run = list(opts, &[dir.path().to_path_buf()]);
    assert_eq!(
        run.out,
        format!(
            "{}:\na.txt  b.txt  nested\n\n{}:\nleaf\n",
            dir.path().display(),
            nested.display()
        )
    );
}

#[test]
fn recursion_enters_non_utf8_directory() {
    let dir = TempDir::new().unwrap();
    let odd = dir.path().join(OsStr::from_bytes(b"bad\xffdir"));
    fs::create_dir(&odd).unwrap();
    touch(&odd.join("inner.txt"), b"", days(1));

    let opts = ListOptions {
        recursive: true,
        ..Default::default()
    };
    let run = list(opts, &[dir.path().to_path_buf()]);
    assert!(run.out.contains("bad\u{FFFD}dir"));
    assert!(run.out.ends_with("inner.txt\n"), "got {:?}", run.out);
    assert!(run.err.is_empty(), "got {:?}", run.err);
    assert_eq!(run.outcome.errors, 0);
}

#[test]
fn missing_path_does_not_abort_run() {
    let dir = two_files();
    let missing = dir.path().join("ghost");
    let run = list(
        ListOptions::default(),
        &[missing.clone(), dir.path().join("a.txt")],
    );
    assert_eq!(
        run.err,
        format!("lister: {}: No such file or directory\n", missing.display())
    );
    assert!(run.out.contains("a.txt"));
    assert_eq!(run.outcome.exit_code(), 1);
}

#[test]
fn unreadable_directory_is_reported() {
    if users::get_effective_uid() == 0 {
        // root reads through mode bits
        return;
    }
    let dir = two_files();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let opts = ListOptions {
        recursive: true,
        ..Default::default()
    };
    let run = list(opts, &[dir.path().to_path_buf()]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(run
        .err
        .starts_with(&format!("lister: cannot open directory '{}': ", locked.display())));
    assert!(run.out.contains("a.txt  b.txt  locked"));
    assert_eq!(run.outcome.errors, 1);
}
