use std::fs;
use std::process::Command;

use anyhow::Result;
use tempfile::tempdir;

const BINARY: &str = env!("CARGO_BIN_EXE_transaction-data-generator");
const EXPECTED_HEADER: [&str; 9] = [
    "transaction_id", "account_id", "timestamp", "amount", "currency",
    "type", "category", "description", "status"
];

#[test]
fn test_cli_writes_header_generated_and_duplicate_rows() -> Result<()> {
    let directory = tempdir()?;
    let output_path = directory.path().join("nested").join("raw").join("transactions.csv");

    let output = Command::new(BINARY)
        .args(["--records", "1000", "--seed", "42", "--log-level", "error"])
        .arg("--output")
        .arg(&output_path)
        .output()?;

    assert!(output.status.success());

    let mut reader = csv::Reader::from_path(&output_path)?;
    assert_eq!(reader.headers()?.iter().collect::<Vec<_>>(), EXPECTED_HEADER);

    let mut rows = 0;
    for record in reader.records() {
        assert_eq!(record?.len(), 9);
        rows += 1;
    }

    assert_eq!(rows, 1000 + 20);

    Ok(())
}

#[test]
fn test_cli_is_reproducible_with_seed_and_base_time() -> Result<()> {
    let directory = tempdir()?;
    let first_path = directory.path().join("first.csv");
    let second_path = directory.path().join("second.csv");

    for path in [&first_path, &second_path] {
        let status = Command::new(BINARY)
            .args(["--records", "250", "--seed", "7", "--base-time", "2024-06-30 12:00:00", "--log-level", "error"])
            .arg("--output")
            .arg(path)
            .status()?;

        assert!(status.success());
    }

    assert_eq!(fs::read(&first_path)?, fs::read(&second_path)?);

    Ok(())
}

#[test]
fn test_cli_writes_labels_alongside_output() -> Result<()> {
    let directory = tempdir()?;
    let output_path = directory.path().join("transactions.csv");
    let labels_path = directory.path().join("labels.csv");

    let status = Command::new(BINARY)
        .args(["--records", "500", "--seed", "3", "--log-level", "error"])
        .arg("--output")
        .arg(&output_path)
        .arg("--labels")
        .arg(&labels_path)
        .status()?;

    assert!(status.success());

    let labels = fs::read_to_string(&labels_path)?;
    let mut lines = labels.lines();

    assert_eq!(lines.next(), Some("row,transaction_id,fault,duplicate_of"));
    assert_eq!(lines.count(), 500 + 10);

    Ok(())
}

#[test]
fn test_cli_applies_json_configuration() -> Result<()> {
    let directory = tempdir()?;
    let config_path = directory.path().join("generator.json");
    let output_path = directory.path().join("transactions.csv");

    fs::write(&config_path, r#"{ "num_records": 100, "duplicate_rate": 0.1, "currencies": ["USD"], "fault_probability": 0.0 }"#)?;

    let status = Command::new(BINARY)
        .args(["--seed", "1", "--log-level", "error"])
        .arg("--config")
        .arg(&config_path)
        .arg("--output")
        .arg(&output_path)
        .status()?;

    assert!(status.success());

    let mut reader = csv::Reader::from_path(&output_path)?;
    let records: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;

    assert_eq!(records.len(), 110);
    assert!(records.iter().all(|record| &record[4] == "USD"));

    Ok(())
}

#[test]
fn test_cli_rejects_invalid_configuration() -> Result<()> {
    let directory = tempdir()?;
    let config_path = directory.path().join("generator.json");
    let output_path = directory.path().join("transactions.csv");

    fs::write(&config_path, r#"{ "fault_probability": 2.0 }"#)?;

    let output = Command::new(BINARY)
        .args(["--log-level", "error"])
        .arg("--config")
        .arg(&config_path)
        .arg("--output")
        .arg(&output_path)
        .output()?;

    assert!(!output.status.success());
    assert!(!output_path.exists());

    Ok(())
}

#[test]
fn test_cli_fails_when_output_cannot_be_created() -> Result<()> {
    let directory = tempdir()?;
    let blocker = directory.path().join("blocker");
    fs::write(&blocker, "not a directory")?;

    let output = Command::new(BINARY)
        .args(["--records", "10", "--seed", "1", "--log-level", "error"])
        .arg("--output")
        .arg(blocker.join("transactions.csv"))
        .output()?;

    assert!(!output.status.success());

    Ok(())
}
