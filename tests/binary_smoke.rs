use chrono::{Local, TimeZone};
use filetime::FileTime;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn touch_at(path: &Path, body: &str, y: i32, m: u32, d: u32) {
    fs::write(path, body).unwrap();
    let t: std::time::SystemTime = Local.with_ymd_and_hms(y, m, d, 12, 0, 0).single().unwrap().into();
    filetime::set_file_mtime(path, FileTime::from_system_time(t)).unwrap();
}

fn run(src: &Path, out: &Path, extra: &[&str]) -> std::process::Output {
    let me = assert_cmd::cargo::cargo_bin!("mv_to_dirs");
    Command::new(me)
        .arg("-s")
        .arg(src)
        .arg("-d")
        .arg(out)
        .args(extra)
        .output()
        .expect("spawn binary")
}

#[test]
fn binary_sorts_then_skips_on_rerun() {
    let td = tempdir().unwrap();
    let src = td.path().join("in");
    let out = td.path().join("out");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&out).unwrap();
    touch_at(&src.join("report.PDF"), "pdf", 2023, 5, 1);
    touch_at(&src.join("notes"), "n", 2023, 6, 15);

    let first = run(&src, &out, &[]);
    assert!(first.status.success(), "stderr: {}", String::from_utf8_lossy(&first.stderr));
    assert!(out.join("pdf/20230501/report.PDF").exists());
    assert!(out.join("noext/20230615/notes").exists());

    // Same name comes back; the second run must skip it and still succeed.
    touch_at(&src.join("report.PDF"), "again", 2023, 5, 1);
    let second = run(&src, &out, &[]);
    assert_eq!(second.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("didn't move"), "stdout: {stdout}");
    assert_eq!(fs::read_to_string(src.join("report.PDF")).unwrap(), "again");
    assert_eq!(fs::read_to_string(out.join("pdf/20230501/report.PDF")).unwrap(), "pdf");
}

#[test]
fn binary_recursive_flag() {
    let td = tempdir().unwrap();
    let src = td.path().join("in");
    let out = td.path().join("out");
    fs::create_dir_all(src.join("nested")).unwrap();
    fs::create_dir_all(&out).unwrap();
    touch_at(&src.join("nested/deep.TXT"), "d", 2024, 1, 2);

    let res = run(&src, &out, &["-r"]);
    assert!(res.status.success());
    assert!(out.join("txt/20240102/deep.TXT").exists());
    assert!(!src.join("nested/deep.TXT").exists());
}

#[test]
fn binary_help_succeeds() {
    let me = assert_cmd::cargo::cargo_bin!("mv_to_dirs");
    let res = Command::new(me).arg("--help").output().expect("spawn binary");
    assert!(res.status.success());
}
