use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn reimburse(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reimburse").unwrap();
    cmd.env("REIMBURSE_CLI_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG")
        .env_remove("REIMBURSE_CLI_REQUESTS");
    cmd
}

#[test]
fn review_list_shows_demo_requests() {
    let data_dir = TempDir::new().unwrap();
    reimburse(&data_dir)
        .args(["review", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pending Reimbursement Requests"))
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("$375.50"));
}

#[test]
fn review_approve_unknown_request_fails() {
    let data_dir = TempDir::new().unwrap();
    reimburse(&data_dir)
        .args(["review", "approve", "req-zzzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request not found"));
}

#[test]
fn form_rejects_removing_last_row_then_submits() {
    let data_dir = TempDir::new().unwrap();
    let input = "\
remove 1
name Jane Smith
start 2024-04-01
end 2024-04-30
set 1 payee Cab Co
set 1 expenses 40
set 1 income 15
submit
";
    reimburse(&data_dir)
        .arg("form")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("At least one row must remain"))
        .stdout(predicate::str::contains("Request Submitted"))
        .stdout(predicate::str::contains(
            "Your reimbursement request has been processed successfully.",
        ))
        .stdout(predicate::str::contains("Total Amount: $25.00"));
}

#[test]
fn form_submit_without_name_warns() {
    let data_dir = TempDir::new().unwrap();
    reimburse(&data_dir)
        .arg("form")
        .write_stdin("start 2024-04-01\nend 2024-04-30\nsubmit\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing Information"))
        .stdout(predicate::str::contains("Request Submitted").not());
}

#[test]
fn submit_draft_file() {
    let data_dir = TempDir::new().unwrap();
    let draft = data_dir.path().join("draft.json");
    std::fs::write(
        &draft,
        r#"{
            "requester": "Sarah Williams",
            "period_start": "2024-03-01",
            "period_end": "2024-03-31",
            "rows": [
                {"payee": "Print Shop", "expenses": 250, "job_no": "6991"},
                {"payee": "Office Depot", "expenses": "125.50", "job_no": "6991"}
            ]
        }"#,
    )
    .unwrap();

    reimburse(&data_dir)
        .arg("submit")
        .arg(&draft)
        .assert()
        .success()
        .stdout(predicate::str::contains("Request Submitted"))
        .stdout(predicate::str::contains("Total Amount: $375.50"));
}

#[test]
fn submit_draft_with_bad_period_fails() {
    let data_dir = TempDir::new().unwrap();
    let draft = data_dir.path().join("draft.yaml");
    std::fs::write(
        &draft,
        "requester: John Doe\nperiod_start: 2024-03-31\nperiod_end: 2024-03-01\n",
    )
    .unwrap();

    reimburse(&data_dir)
        .arg("submit")
        .arg(&draft)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Information"));
}

#[test]
fn export_csv_to_stdout() {
    let data_dir = TempDir::new().unwrap();
    reimburse(&data_dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Request ID,Name,Period Start"))
        .stdout(predicate::str::contains("Office Depot"));
}

#[test]
fn exported_json_feeds_review_board() {
    let data_dir = TempDir::new().unwrap();
    let export = data_dir.path().join("requests.json");

    reimburse(&data_dir)
        .args(["export", "--format", "json", "-o"])
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 requests"));

    reimburse(&data_dir)
        .args(["review", "list", "--all", "--requests"])
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("All Reimbursement Requests"))
        .stdout(predicate::str::contains("Pending Reimbursement Requests").not())
        .stdout(predicate::str::contains("Sarah Williams"));
}

#[test]
fn review_edit_refuses_decided_request() {
    let data_dir = TempDir::new().unwrap();
    let requests_file = data_dir.path().join("requests.json");

    let mut requests = reimburse_cli::seed::demo_requests().unwrap();
    requests[0].approve().unwrap();
    let id = requests[0].id.as_uuid().to_string();
    let mut json = Vec::new();
    reimburse_cli::export::export_requests_json(&requests, &mut json, false).unwrap();
    std::fs::write(&requests_file, json).unwrap();

    reimburse(&data_dir)
        .args(["review", "edit", id.as_str(), "--requests"])
        .arg(&requests_file)
        .write_stdin("submit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request Already Reviewed"))
        .stdout(predicate::str::contains("Request Updated").not());
}

#[test]
fn form_survives_extreme_amounts() {
    let data_dir = TempDir::new().unwrap();
    let input = "\
name Jane Smith
start 2024-04-01
end 2024-04-30
set 1 expenses 92233720368547758
set 1 income -1
submit
";
    reimburse(&data_dir)
        .arg("form")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Request Submitted"))
        .stdout(predicate::str::contains("Total Amount: $1.00"));
}

#[test]
fn init_writes_settings() {
    let data_dir = TempDir::new().unwrap();
    reimburse(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(data_dir.path().join("config.json").exists());

    reimburse(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    true"));
}
