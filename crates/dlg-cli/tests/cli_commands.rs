//! End-to-end tests for the `dlg` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dlg() -> Command {
    Command::cargo_bin("dlg").unwrap()
}

/// Write `contents` to `name` inside a fresh temp directory.
fn temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

const MET_PREVIOUSLY: &str =
    r#"[["troop_slot_eq","$g_talk_troop","slot_troop_met_previously",0]]"#;

// ---------------------------------------------------------------------------
// build
// ---------------------------------------------------------------------------

#[test]
fn build_full_record() {
    dlg()
        .args([
            "build",
            "-s",
            "anyone",
            "-s",
            "plyr",
            "--pre",
            "start",
            "--post",
            "close_window",
            "-t",
            "Hello.",
            "--conditions",
            MET_PREVIOUSLY,
        ])
        .assert()
        .success()
        .stdout(
            "[69631,\"start\",[[\"troop_slot_eq\",\"$g_talk_troop\",\"slot_troop_met_previously\",0]],\"Hello.\",\"close_window\",[]]\n",
        );
}

#[test]
fn build_with_state_pair() {
    dlg()
        .args(["build", "-s", "plyr", "--state", "start", "close_window", "-t", "Hi"])
        .assert()
        .success()
        .stdout("[65536,\"start\",[],\"Hi\",\"close_window\",[]]\n");
}

#[test]
fn build_accepts_numeric_speakers() {
    dlg()
        .args(["build", "-s", "0x10", "-s", "3", "--state", "a", "b", "-t", "Hi"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[19,"));
}

#[test]
fn build_with_consequences() {
    dlg()
        .args([
            "build",
            "-s",
            "plyr",
            "--state",
            "start",
            "close_window",
            "-t",
            "Farewell.",
            "--consequences",
            r#"[["finish_mission"]]"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "\"close_window\",[[\"finish_mission\"]]]\n",
        ));
}

#[test]
fn build_keeps_engine_form_conditions() {
    dlg()
        .args(["build", "-s", "plyr", "--state", "start", "close_window", "-t", "Hi"])
        .args(["--conditions", r#"[[542,"$g_talk_troop",8,0],["store_random",":x",1.5]]"#])
        .assert()
        .success()
        .stdout(
            "[65536,\"start\",[[542,\"$g_talk_troop\",8,0],[\"store_random\",\":x\",1.5]],\"Hi\",\"close_window\",[]]\n",
        );
}

#[test]
fn build_missing_text() {
    dlg()
        .args(["build", "-s", "plyr", "--state", "start", "close_window"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("text not set"));
}

#[test]
fn build_missing_speaker() {
    dlg()
        .args(["build", "--state", "start", "close_window", "-t", "Hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("speaker not set"));
}

#[test]
fn build_missing_post_state() {
    dlg()
        .args(["build", "-s", "plyr", "--pre", "start", "-t", "Hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("post_state not set"));
}

#[test]
fn build_rejects_bare_operation() {
    dlg()
        .args([
            "build",
            "-s",
            "plyr",
            "--state",
            "start",
            "close_window",
            "-t",
            "Hi",
            "--conditions",
            r#"["troop_slot_eq","$g_talk_troop",0]"#,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument for conditions"));
}

#[test]
fn build_rejects_non_array_consequences() {
    dlg()
        .args([
            "build",
            "-s",
            "plyr",
            "--state",
            "start",
            "close_window",
            "-t",
            "Hi",
            "--consequences",
            r#"{"op":"finish_mission"}"#,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid argument for consequences: expected an array, got an object",
        ));
}

#[test]
fn build_rejects_malformed_json() {
    dlg()
        .args(["build", "-s", "plyr", "--conditions", "[["])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--conditions is not valid JSON"));
}

#[test]
fn build_unknown_actor() {
    dlg()
        .args(["build", "-s", "trp_ghost", "--state", "a", "b", "-t", "Hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown actor: \"trp_ghost\""));
}

#[test]
fn build_state_conflicts_with_pre() {
    dlg()
        .args(["build", "-s", "plyr", "--pre", "x", "--state", "a", "b", "-t", "Hi"])
        .assert()
        .failure();
}

#[test]
fn build_pretty_output() {
    dlg()
        .args(["build", "-s", "plyr", "--state", "a", "b", "-t", "Hi", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[\n  65536,"));
}

#[test]
fn build_with_actor_file() {
    let (_dir, actors) = temp_file("actors.json", r#"{"trp_ramun_the_slave_trader": 7}"#);
    dlg()
        .args(["build", "-s", "trp_ramun_the_slave_trader", "--state", "start", "close_window"])
        .args(["-t", "Good day to you.", "--actors"])
        .arg(&actors)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[7,\"start\""));
}

#[test]
fn bad_actor_file_fails() {
    let (_dir, actors) = temp_file("actors.json", "[1, 2, 3]");
    dlg()
        .args(["actors", "--actors"])
        .arg(&actors)
        .assert()
        .failure()
        .stderr(predicate::str::contains("actor table error"));
}

// ---------------------------------------------------------------------------
// batch
// ---------------------------------------------------------------------------

const TWO_ENTRIES: &str = r#"[
  {
    "speaker": ["anyone", "plyr"],
    "pre_state": "start",
    "conditions": [["troop_slot_eq", "$g_talk_troop", "slot_troop_met_previously", 0]],
    "text": "Good day to you, {young man/lassie}.",
    "post_state": "ramun_introduce_1",
    "consequences": []
  },
  {
    "speaker": "plyr",
    "pre_state": "ramun_introduce_1",
    "text": "Forgive me, I was just leaving.",
    "post_state": "close_window"
  }
]"#;

#[test]
fn batch_builds_every_entry() {
    let (_dir, file) = temp_file("dialogs.json", TWO_ENTRIES);
    dlg()
        .arg("batch")
        .arg(&file)
        .assert()
        .success()
        .stdout(
            "[[69631,\"start\",[[\"troop_slot_eq\",\"$g_talk_troop\",\"slot_troop_met_previously\",0]],\"Good day to you, {young man/lassie}.\",\"ramun_introduce_1\",[]],[65536,\"ramun_introduce_1\",[],\"Forgive me, I was just leaving.\",\"close_window\",[]]]\n",
        );
}

#[test]
fn batch_reports_failing_entry() {
    let (_dir, file) = temp_file(
        "dialogs.json",
        r#"[
  {"speaker": "plyr", "pre_state": "start", "text": "Hi", "post_state": "close_window"},
  {"speaker": "plyr", "pre_state": "start", "text": "Hi"}
]"#,
    );
    dlg()
        .arg("batch")
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("entry 1: post_state not set"));
}

#[test]
fn batch_rejects_non_array_file() {
    let (_dir, file) = temp_file("dialogs.json", r#"{"speaker": "plyr"}"#);
    dlg()
        .arg("batch")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected an array of entries"));
}

#[test]
fn batch_missing_file() {
    dlg()
        .args(["batch", "/nonexistent/dialogs.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// actors
// ---------------------------------------------------------------------------

#[test]
fn actors_lists_defaults() {
    dlg()
        .arg("actors")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("plyr")
                .and(predicate::str::contains("0x00010000"))
                .and(predicate::str::contains("11 actors")),
        );
}

#[test]
fn actors_includes_overlay() {
    let (_dir, actors) = temp_file("actors.json", r#"{"trp_ramun": 7}"#);
    dlg()
        .args(["actors", "--actors"])
        .arg(&actors)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("trp_ramun")
                .and(predicate::str::contains("12 actors")),
        );
}
