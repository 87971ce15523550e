use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const INPUT: &str = "\
ST,Gender,Education,Customer Lifetime Value,Number of Open Complaints,Vehicle Class
AZ,female,Bachelors,10.50%,1/2/00,Sports Car
AZ,female,Bachelors,10.50%,1/2/00,Sports Car
Cali,Male,Master,20%,1/1/00,SUV
";

fn insclean() -> Command {
    Command::cargo_bin("insclean").unwrap()
}

#[test]
fn test_cleans_file_to_output_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("clean.csv");
    fs::write(&input, INPUT).unwrap();

    insclean()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "state,gender,education,customer_lifetime_value,number_of_open_complaints,vehicle_class\n\
         Arizona,F,Bachelor,10,2,Luxury\n\
         California,M,Master,20,1,SUV\n"
    );
}

#[test]
fn test_default_output_is_combined_data_csv() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.csv"), INPUT).unwrap();

    insclean()
        .current_dir(dir.path())
        .arg("in.csv")
        .arg("-q")
        .assert()
        .success();

    assert!(dir.path().join("combined_data.csv").exists());
}

#[test]
fn test_json_preview_on_stdout() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    fs::write(&input, INPUT).unwrap();

    insclean()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .args(["--preview", "5", "--format", "json", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"row_count\": 2"))
        .stdout(predicate::str::contains("\"state\": \"California\""));
}

#[test]
fn test_invalid_keep_policy_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    fs::write(&input, INPUT).unwrap();

    insclean()
        .arg(&input)
        .args(["--keep", "middle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid keep policy 'middle'"));
}

#[test]
fn test_missing_input_exits_with_error() {
    let dir = TempDir::new().unwrap();

    insclean()
        .current_dir(dir.path())
        .arg("nope.csv")
        .arg("-q")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to clean nope.csv"));

    assert!(!dir.path().join("combined_data.csv").exists());
}
