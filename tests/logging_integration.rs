use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn log_file_receives_summary() {
    let td = tempdir().unwrap();
    let src = td.path().join("in");
    let out = td.path().join("out");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&out).unwrap();
    fs::write(src.join("a.txt"), "a").unwrap();
    let log = td.path().join("logs").join("mv.log");

    let me = assert_cmd::cargo::cargo_bin!("mv_to_dirs");
    let res = Command::new(me)
        .arg("-s")
        .arg(&src)
        .arg("-d")
        .arg(&out)
        .arg("--log-file")
        .arg(&log)
        .output()
        .expect("spawn binary");

    assert!(res.status.success());
    let content = fs::read_to_string(&log).expect("log file written");
    assert!(content.contains("Sorting completed"), "log: {content}");
}

#[test]
fn json_logs_are_json_lines() {
    let td = tempdir().unwrap();
    let src = td.path().join("in");
    let out = td.path().join("out");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&out).unwrap();

    let me = assert_cmd::cargo::cargo_bin!("mv_to_dirs");
    let res = Command::new(me)
        .arg("-s")
        .arg(&src)
        .arg("-d")
        .arg(&out)
        .arg("--json")
        .output()
        .expect("spawn binary");

    assert!(res.status.success());
    let stderr = String::from_utf8_lossy(&res.stderr);
    let line = stderr
        .lines()
        .find(|l| l.contains("Sorting completed"))
        .expect("summary line present");
    assert!(line.trim_start().starts_with('{'), "not json: {line}");
}

#[test]
fn quiet_level_suppresses_info() {
    let td = tempdir().unwrap();
    let src = td.path().join("in");
    let out = td.path().join("out");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&out).unwrap();

    let me = assert_cmd::cargo::cargo_bin!("mv_to_dirs");
    let res = Command::new(me)
        .arg("-s")
        .arg(&src)
        .arg("-d")
        .arg(&out)
        .args(["--log-level", "quiet"])
        .output()
        .expect("spawn binary");

    assert!(res.status.success());
    assert!(!String::from_utf8_lossy(&res.stderr).contains("Sorting completed"));
}
