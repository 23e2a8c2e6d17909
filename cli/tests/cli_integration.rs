use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SINGLE_FEMININE_SCORECARD: &str = concat!(
    "Overall recall: 100.0 precision: 100.0 f1: 100.0\n",
    "\t\ttp 1\tfp 0\n",
    "\t\tfn 0\ttn 1\n",
    "Masculine recall: 0.0 precision: 0.0 f1: 0.0\n",
    "\t\ttp 0\tfp 0\n",
    "\t\tfn 0\ttn 0\n",
    "Feminine recall: 100.0 precision: 100.0 f1: 100.0\n",
    "\t\ttp 1\tfp 0\n",
    "\t\tfn 0\ttn 1\n",
    "Bias (F/M): -\n",
);

/// Helper to write an annotation file into the given directory
fn write_tsv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn gold_single_example() -> String {
    format!(
        "{}\nvalidation-1\tPauline gave the scrapbook to Cheryl Cassidy, who filled it with her photographs.\ther\t65\tCheryl Cassidy\t30\tTRUE\tPauline\t0\tFALSE\thttp://en.wikipedia.org/wiki/Cheryl_Cassidy\n",
        gapeval::GOLD_FIELDNAMES.join("\t")
    )
}

#[test]
fn test_score_single_example() {
    let temp_dir = TempDir::new().unwrap();
    let gold_tsv = write_tsv(&temp_dir, "gold.tsv", &gold_single_example());
    let system_tsv = write_tsv(&temp_dir, "system.tsv", "validation-1\tTRUE\tFALSE\n");

    let mut cmd = Command::cargo_bin("gapeval").unwrap();
    cmd.arg("--gold_tsv")
        .arg(gold_tsv)
        .arg("--system_tsv")
        .arg(system_tsv);

    cmd.assert().success().stdout(SINGLE_FEMININE_SCORECARD);
}

#[test]
fn test_missing_arguments_fail() {
    let mut cmd = Command::cargo_bin("gapeval").unwrap();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--gold_tsv"))
        .stderr(predicate::str::contains("--system_tsv"));
}

#[test]
fn test_nonexistent_gold_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let system_tsv = write_tsv(&temp_dir, "system.tsv", "validation-1\tTRUE\tFALSE\n");

    let mut cmd = Command::cargo_bin("gapeval").unwrap();
    cmd.arg("--gold_tsv")
        .arg(temp_dir.path().join("missing.tsv"))
        .arg("--system_tsv")
        .arg(system_tsv);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("gold annotations"));
}

#[test]
fn test_empty_gold_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let header = format!("{}\n", gapeval::GOLD_FIELDNAMES.join("\t"));
    let gold_tsv = write_tsv(&temp_dir, "gold.tsv", &header);
    let system_tsv = write_tsv(&temp_dir, "system.tsv", "validation-1\tTRUE\tFALSE\n");

    let mut cmd = Command::cargo_bin("gapeval").unwrap();
    cmd.arg("--gold_tsv")
        .arg(gold_tsv)
        .arg("--system_tsv")
        .arg(system_tsv);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No gold annotations read!"));
}

#[test]
fn test_warnings_go_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let gold_tsv = write_tsv(&temp_dir, "gold.tsv", &gold_single_example());
    let system_tsv = write_tsv(&temp_dir, "system.tsv", "validation-1\tmaybe\tFALSE\n");

    let mut cmd = Command::cargo_bin("gapeval").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--gold_tsv")
        .arg(gold_tsv)
        .arg("--system_tsv")
        .arg(system_tsv);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Overall recall:"))
        .stderr(predicate::str::contains("Unexpected label"));
}

#[test]
fn test_quiet_suppresses_warnings() {
    let temp_dir = TempDir::new().unwrap();
    let gold_tsv = write_tsv(&temp_dir, "gold.tsv", &gold_single_example());
    let system_tsv = write_tsv(&temp_dir, "system.tsv", "validation-1\tmaybe\tFALSE\n");

    let mut cmd = Command::cargo_bin("gapeval").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--quiet")
        .arg("--gold_tsv")
        .arg(gold_tsv)
        .arg("--system_tsv")
        .arg(system_tsv);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Overall recall:"))
        .stderr(predicate::str::contains("Unexpected label").not());
}
