#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rtimesheet::RawEvent;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Epoch milliseconds of a UTC wall-clock instant ("YYYY-MM-DD HH:MM[:SS]").
pub fn at(stamp: &str) -> i64 {
    let dt = NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M"))
        .expect("valid test timestamp");
    dt.and_utc().timestamp_millis()
}

pub fn cin(employee: &str, stamp: &str) -> RawEvent {
    RawEvent::clock_in(employee, at(stamp))
}

pub fn cout(employee: &str, stamp: &str) -> RawEvent {
    RawEvent::clock_out(employee, at(stamp))
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist, so the CLI runs on defaults.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_noconf"), "conf")
}

pub fn write_input(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write test input");
    p
}

/// Two employees, one morning-shift day each plus an open day for alice.
pub const SAMPLE_JSON: &str = r#"[
  { "employee_id": "alice", "action": "clock_out", "timestamp": "2025-03-03 14:45" },
  { "employee_id": "alice", "action": "clock_in",  "timestamp": "2025-03-03 05:30" },
  { "employee_id": "alice", "action": "clock_in",  "timestamp": "2025-03-04 09:15" },
  { "employee_id": "bob",   "action": "in",        "timestamp": "2025-03-03T08:00:00Z" },
  { "employee_id": "bob",   "action": "out",       "timestamp": 1741003200000 }
]"#;

pub const SAMPLE_CSV: &str = "employee_id,action,timestamp
alice,clock_in,2025-03-03 05:30
alice,clock_out,2025-03-03 14:45
alice,clock_in,2025-04-01 05:00
alice,clock_out,2025-04-01 13:00
";
