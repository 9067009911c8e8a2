//! End-to-end tests for the investpro binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn investpro(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("investpro").unwrap();
    cmd.env("INVESTPRO_DATA_DIR", dir.path());
    cmd.env_remove("INVESTPRO_LOG");
    cmd
}

#[test]
fn market_json_snapshot_lists_every_symbol() {
    let dir = TempDir::new().unwrap();
    let output = investpro(&dir)
        .args(["market", "--seed", "1", "--timeframe", "1m", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["section"], "market");
    assert_eq!(json["data"]["timeframe"], "1M");
    let symbols: Vec<&str> = json["data"]["quotes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["symbol"].as_str().unwrap())
        .collect();
    assert_eq!(symbols, vec!["SPY", "QQQ", "AAPL", "TSLA", "MSFT", "GOOGL"]);
}

#[test]
fn market_is_reproducible_with_a_seed() {
    let dir = TempDir::new().unwrap();
    let run = |dir: &TempDir| {
        investpro(dir)
            .args(["market", "--seed", "42", "--format", "yaml"])
            .output()
            .unwrap()
            .stdout
    };
    let first = String::from_utf8(run(&dir)).unwrap();
    let second = String::from_utf8(run(&dir)).unwrap();
    // exported_at differs between runs; the quote block must not
    let quotes = |s: &str| s.split("quotes:").nth(1).map(str::to_string);
    assert_eq!(quotes(&first), quotes(&second));
}

#[test]
fn market_rejects_unknown_timeframe() {
    let dir = TempDir::new().unwrap();
    investpro(&dir)
        .args(["market", "--timeframe", "5Y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeframe"));
}

#[test]
fn portfolio_table_shows_totals() {
    let dir = TempDir::new().unwrap();
    investpro(&dir)
        .arg("portfolio")
        .assert()
        .success()
        .stdout(predicate::str::contains("$125,928.30"))
        .stdout(predicate::str::contains("AAPL"));
}

#[test]
fn portfolio_hide_balance_masks_amounts() {
    let dir = TempDir::new().unwrap();
    investpro(&dir)
        .args(["portfolio", "--hide-balance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("••••••"))
        .stdout(predicate::str::contains("$125,928.30").not());
}

#[test]
fn news_filters_by_category() {
    let dir = TempDir::new().unwrap();
    investpro(&dir)
        .args(["news", "--category", "crypto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bitcoin"))
        .stdout(predicate::str::contains("Gold").not());
}

#[test]
fn news_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();
    investpro(&dir)
        .args(["news", "--category", "sports"])
        .assert()
        .failure();
}

#[test]
fn newsletter_requires_a_topic() {
    let dir = TempDir::new().unwrap();
    investpro(&dir)
        .args(["newsletter", "a@b.c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Select at least one newsletter topic"));
}

#[test]
fn newsletter_subscribes_to_topics() {
    let dir = TempDir::new().unwrap();
    investpro(&dir)
        .args([
            "newsletter",
            "reader@example.com",
            "--pref",
            "market-updates",
            "--pref",
            "Security Updates",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subscribed reader@example.com to:"))
        .stdout(predicate::str::contains("Market Updates"))
        .stdout(predicate::str::contains("Security Updates"));
}

#[test]
fn config_reports_paths_and_opens_log() {
    let dir = TempDir::new().unwrap();
    investpro(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("InvestPro Configuration"))
        .stdout(predicate::str::contains("Refresh interval:  3000 ms"));
    assert!(dir.path().join("investpro.log").exists());
}
