//! 以子进程方式运行 s3-listing，检查退出码、stdout 与生成的文件。

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const LISTING: &str = "\
2023-01-02 00:00:00 2048 b.mp4
2023-01-01 00:00:00 10 a.mp4
";

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_s3-listing"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "warn")
        .output()
        .expect("run s3-listing")
}

#[test]
fn unknown_sort_exits_before_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("list.txt"), LISTING).unwrap();

    let output = run_in(dir.path(), &["-sort", "size"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid sort option 'size'"));
    assert!(!dir.path().join("rm.sh").exists());
    assert!(!dir.path().join("results.json").exists());
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let output = run_in(dir.path(), &["-file", "nope.txt"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.txt"));
}

#[test]
fn default_run_writes_report_and_artifacts() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("list.txt"), LISTING).unwrap();
    fs::write(dir.path().join("rm.sh"), "# stale\n").unwrap();

    let output = run_in(dir.path(), &["-sort", "s3", "-order", "desc"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines[0], "Sorted Files:");
    assert!(lines[1].starts_with("S3 Modification Time: 2023-01-02 00:00:00, 2.0 kB, b.mp4, age: "));
    assert!(lines[2].starts_with("S3 Modification Time: 2023-01-01 00:00:00, 10 B, a.mp4, age: "));
    assert_eq!(lines[3], "Results saved to results.json");

    let rm = fs::read_to_string(dir.path().join("rm.sh")).unwrap();
    assert!(!rm.contains("stale"));
    assert!(rm.contains("aws s3 rm 's3://streamboxdineorb/b.mp4'"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("results.json")).unwrap())
            .unwrap();
    assert_eq!(json[1]["FileSize"], 10);
}
