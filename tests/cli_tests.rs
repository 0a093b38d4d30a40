//! End-to-end tests of the zing binary
//!
//! These exercise the CLI surface and exit-code contract: help exits 0,
//! bad arguments exit 1, resolution failures exit 1 with no cycle
//! output, and a run against a live loopback listener reports Active
//! cycles plus the summary block.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::net::TcpListener;
use std::process::Command;

/// Helper function to create a test command
fn zing_cmd() -> Command {
    Command::cargo_bin("zing").unwrap()
}

#[test]
fn help_prints_usage_and_exits_zero() {
    zing_cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: zing"))
        .stdout(predicate::str::contains("-op ops"));
}

#[test]
fn unknown_flag_exits_one() {
    zing_cmd()
        .arg("-x")
        .arg("localhost")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a recognized"));
}

#[test]
fn invalid_port_exits_one() {
    zing_cmd()
        .args(["-p", "0", "localhost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Port 0"));
}

#[test]
fn non_numeric_count_exits_one() {
    zing_cmd()
        .args(["-c", "four", "localhost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid numeric value"));
}

#[test]
fn missing_flag_value_exits_one() {
    zing_cmd().arg("-t").assert().failure().code(1);
}

#[test]
fn unresolvable_host_exits_one_without_cycle_output() {
    zing_cmd()
        .args(["-c", "1", "-op", "1", "host-that-does-not-exist.invalid"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Resolution error"))
        .stdout(predicate::str::contains("ZING:").not());
}

#[test]
fn loopback_run_reports_active_cycles_and_summary() {
    // Keep the listener alive for the whole run; the OS backlog accepts
    // the connect/close cycles without an accept loop.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    zing_cmd()
        .args([
            "-4",
            "-c",
            "2",
            "-op",
            "2",
            "-p",
            &port.to_string(),
            "-t",
            "4000",
            "127.0.0.1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ZING: 127.0.0.1 (127.0.0.1): 1 ports used, 2 ops per cycle",
        ))
        .stdout(predicate::str::contains("Active"))
        .stdout(predicate::str::contains(
            "--- zing summary for 127.0.0.1/127.0.0.1 ---",
        ))
        .stdout(predicate::str::contains("total ops used; total time:"))
        .stdout(predicate::str::contains("total-time min/avg/max/stddev ="));
}

#[test]
fn closed_port_reports_absent_and_exits_one() {
    // Bind then drop so the port is known-closed
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    zing_cmd()
        .args(["-c", "1", "-op", "1", "-p", &port.to_string(), "127.0.0.1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Absent!"))
        .stdout(predicate::str::contains("--- zing summary for"));
}

#[test]
fn wrong_family_literal_exits_one() {
    zing_cmd()
        .args(["-6", "-c", "1", "127.0.0.1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Resolution error"));
}
