use blockvfs::{dispatch, ErrorKind, FileSys, FsConfig, Status};

fn mounted() -> FileSys {
    FileSys::mount(FsConfig::default()).expect("mount")
}

fn run_ok(fs: &mut FileSys, line: &str) -> String {
    let out = dispatch(fs, line);
    assert_eq!(out.status, Status::Ok, "{line}: {}", out.message);
    out.message
}

fn run_err(fs: &mut FileSys, line: &str) -> ErrorKind {
    let out = dispatch(fs, line);
    assert_eq!(out.status, Status::Err, "{line}: {}", out.message);
    out.kind.expect("error kind")
}

#[test]
fn create_write_read_delete() {
    let mut fs = mounted();
    run_ok(&mut fs, "CREATE D root/Documents");
    run_ok(&mut fs, "CREATE U root/Documents/Test.txt");
    run_ok(&mut fs, "WRITE root/Documents/Test.txt Hello");
    assert_eq!(run_ok(&mut fs, "READ root/Documents/Test.txt"), "Hello");
    run_ok(&mut fs, "DELETE root/Documents/Test.txt");
    assert_eq!(run_err(&mut fs, "READ root/Documents/Test.txt"), ErrorKind::NotFound);
}

#[test]
fn open_missing_then_twice() {
    let mut fs = mounted();
    assert_eq!(run_err(&mut fs, "OPEN root/Documents/Test.txt R"), ErrorKind::NotFound);
    run_ok(&mut fs, "CREATE D root/Documents");
    run_ok(&mut fs, "CREATE U root/Documents/Test.txt");
    run_ok(&mut fs, "OPEN root/Documents/Test.txt R");
    assert_eq!(run_err(&mut fs, "OPEN root/Documents/Test.txt R"), ErrorKind::AlreadyOpen);
}

#[test]
fn second_create_already_exists() {
    let mut fs = mounted();
    run_ok(&mut fs, "CREATE D root/a");
    assert_eq!(run_err(&mut fs, "CREATE D root/a"), ErrorKind::AlreadyExists);
    assert_eq!(run_err(&mut fs, "CREATE U root/a"), ErrorKind::AlreadyExists);
    assert_eq!(run_err(&mut fs, "CREATE U root/missing/b"), ErrorKind::ParentNotFound);
}

#[test]
fn seek_bounds_at_end_of_file() {
    let mut fs = mounted();
    run_ok(&mut fs, "CREATE U root/f");
    run_ok(&mut fs, "WRITE root/f Hello");
    run_ok(&mut fs, "OPEN root/f R");
    assert_eq!(run_ok(&mut fs, "SEEK root/f -1 5"), "Cursor of root/f at 5");
    assert_eq!(run_err(&mut fs, "SEEK root/f -1 6"), ErrorKind::OutOfBounds);
    assert_eq!(run_err(&mut fs, "SEEK root/f -1 -1"), ErrorKind::OutOfBounds);
    assert_eq!(run_ok(&mut fs, "SEEK root/f 0 -2"), "Cursor of root/f at 3");
    assert_eq!(run_ok(&mut fs, "SEEK root/f 1 -5"), "Cursor of root/f at 0");
}

#[test]
fn delete_invalidates_handle() {
    let mut fs = mounted();
    run_ok(&mut fs, "CREATE U root/f");
    run_ok(&mut fs, "OPEN root/f W");
    run_ok(&mut fs, "DELETE root/f");
    assert_eq!(run_err(&mut fs, "SEEK root/f -1 0"), ErrorKind::NotOpen);
    assert_eq!(run_ok(&mut fs, "CLOSE root/f"), "root/f was not open");
}

#[test]
fn close_without_open_is_ok() {
    let mut fs = mounted();
    run_ok(&mut fs, "CLOSE root/never");
    run_ok(&mut fs, "CREATE U root/f");
    run_ok(&mut fs, "OPEN root/f R");
    assert_eq!(run_ok(&mut fs, "CLOSE root/f"), "Closed root/f");
    assert_eq!(run_err(&mut fs, "SEEK root/f -1 0"), ErrorKind::NotOpen);
}

#[test]
fn root_is_permanent() {
    let mut fs = mounted();
    assert_eq!(run_err(&mut fs, "DELETE root"), ErrorKind::CannotRemoveRoot);
    assert_eq!(run_err(&mut fs, "WRITE root x"), ErrorKind::NotAFile);
    assert_eq!(run_err(&mut fs, "OPEN root R"), ErrorKind::NotAFile);
}

#[test]
fn quoted_data_round_trips() {
    let mut fs = mounted();
    run_ok(&mut fs, "CREATE U root/TestFile.txt");
    run_ok(&mut fs, r#"WRITE root/TestFile.txt "Hello, world!""#);
    assert_eq!(run_ok(&mut fs, "READ root/TestFile.txt"), "Hello, world!");
    run_ok(&mut fs, "WRITE root/TestFile.txt replaced");
    assert_eq!(run_ok(&mut fs, "read root/TestFile.txt"), "replaced");
}

#[test]
fn failures_leave_snapshot_unchanged() {
    let mut fs = mounted();
    run_ok(&mut fs, "CREATE D root/d");
    run_ok(&mut fs, "CREATE U root/d/f");
    let before = fs.load_snapshot().expect("snapshot");
    for line in [
        "CREATE U root/d/f",
        "CREATE D root/nope/x",
        "DELETE root/ghost",
        "WRITE root/d data",
        "OPEN root/d R",
        "SEEK root/d/f 0 0",
        "BOGUS",
        "WRITE",
    ] {
        dispatch(&mut fs, line);
    }
    assert_eq!(fs.load_snapshot().expect("snapshot"), before);
    assert!(fs.handles().is_empty());
}

#[test]
fn deleting_directory_drops_subtree() {
    let mut fs = mounted();
    run_ok(&mut fs, "CREATE D root/a");
    run_ok(&mut fs, "CREATE D root/a/b");
    run_ok(&mut fs, "CREATE U root/a/b/c.txt");
    run_ok(&mut fs, "OPEN root/a/b/c.txt R");
    run_ok(&mut fs, "DELETE root/a");
    assert_eq!(run_err(&mut fs, "READ root/a/b/c.txt"), ErrorKind::NotFound);
    assert_eq!(run_err(&mut fs, "SEEK root/a/b/c.txt 0 0"), ErrorKind::NotOpen);
    let out = dispatch(&mut fs, "LS");
    assert_eq!(out.message, "");
    assert!(out.snapshot.children.is_empty());
}
