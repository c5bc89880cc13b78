use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dfmis-periods").unwrap();
    cmd.env("DFMIS_PERIODS_DIR", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn generate_quarterly_csv() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["generate", "2024-01-01", "2025-12-31", "-g", "quarterly", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Label,Start,End,Days\n"))
        .stdout(predicate::str::contains("Q1 2024,2024-01-01,2024-03-31,91"))
        .stdout(predicate::str::contains("Q4 2025,2025-10-01,2025-12-31,92"));
}

#[test]
fn generate_json_matches_period_shape() {
    let dir = TempDir::new().unwrap();
    let output = cmd(&dir)
        .args(["generate", "2024-06-01", "2026-06-30", "-g", "annual", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["start"], "2024-01-01");
    assert_eq!(rows[0]["end"], "2024-12-31");
    assert_eq!(rows[2]["end"], "2026-06-30");
}

#[test]
fn generate_table_is_default() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["generate", "2024-01-15", "2024-03-20", "-g", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("January 2024"))
        .stdout(predicate::str::contains("2024-03-20"));
}

#[test]
fn generate_rejects_inverted_range() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["generate", "2024-12-31", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date range"));
}

#[test]
fn generate_rejects_unparseable_date() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["generate", "invalid", "2024-12-31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date 'invalid'"));
}

#[test]
fn allocate_prorated_csv() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args([
            "allocate",
            "2024-01-01",
            "2024-05-15",
            "1360",
            "-g",
            "quarterly",
            "-m",
            "prorated",
            "-f",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Q1 2024,2024-01-01,2024-03-31,91,910.00"))
        .stdout(predicate::str::contains("Q2 2024,2024-04-01,2024-05-15,45,450.00"));
}

#[test]
fn allocate_prorated_counts_only_project_days() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args([
            "allocate",
            "2024-03-20",
            "2024-04-10",
            "2200.00",
            "-m",
            "prorated",
            "-f",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Q1 2024,2024-01-01,2024-03-31,12,1200.00"))
        .stdout(predicate::str::contains("Q2 2024,2024-04-01,2024-04-10,10,1000.00"));
}

#[test]
fn allocate_rejects_negative_after_currency_symbol() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["allocate", "2024-01-01", "2024-12-31", "$-500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget total cannot be negative: -500.00"));
}

#[test]
fn allocate_rejects_garbage_amount() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["allocate", "2024-01-01", "2024-12-31", "abc123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format: abc123"));
}

#[test]
fn status_reports_current_period() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["status", "2024-01-01", "2025-12-31", "--on", "2024-08-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current period: Q3 2024"))
        .stdout(predicate::str::contains("Upcoming periods: 5"));
}

#[test]
fn init_persists_defaults() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["init", "--granularity", "monthly", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));

    assert!(dir.path().join("config.json").exists());

    cmd(&dir)
        .args(["generate", "2024-01-01", "2024-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("December 2024,2024-12-01,2024-12-31,31"));
}

#[test]
fn config_shows_settings() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default granularity: quarterly"))
        .stdout(predicate::str::contains("Initialized:      false"));
}
