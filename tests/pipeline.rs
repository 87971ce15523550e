use std::fs;

use insclean::clean::drop_duplicates_str;
use insclean::model::{CellType, CellValue};
use insclean::output::save_cleaned_data;
use insclean::parser::load_data;
use insclean::{run, CleanError, Config, KeepPolicy, Table};
use tempfile::TempDir;

const INSURANCE_CSV: &str = "\
Customer,ST,GENDER,Education,Customer Lifetime Value,Income,Monthly Premium Auto,Number of Open Complaints,Policy Type,Vehicle Class,Total Claim Amount
RB50392,Washington,,Master,,0,1000,1/0/00,Personal Auto,Four-Door Car,2.704934
QZ44356,AZ,F,Bachelor,697953.59%,0,94,1/0/00,Personal Auto,Four-Door Car,1131.464935
AI49188,Nevada,F,Bachelor,1288743.17%,48767,108,1/0/00,Personal Auto,Two-Door Car,566.472247
WW63253,Cali,M,Bachelor,764586.18%,0,106,1/0/00,Corporate Auto,SUV,529.881344
GA49547,WA,M,High School or Below,536307.65%,36357,68,1/0/00,Personal Auto,Four-Door Car,17.269323
OC83172,Oregon,F,Bachelors,825629.78%,62902,69,1/0/00,Personal Auto,Two-Door Car,159.383042
XZ87318,Oregon,Femal,College,538089.86%,55350,67,1/0/00,Corporate Auto,Four-Door Car,321.6
CF85061,Arizona,Male,Master,721610.03%,0,101,1/0/00,Corporate Auto,Four-Door Car,363.02968
DY87989,Oregon,M,Bachelor,2412750.40%,14072,71,1/0/00,Corporate Auto,Four-Door Car,511.2
BQ94931,California,F,College,738817.81%,28812,93,1/0/00,Special Auto,Four-Door Car,425.527834
OC83172,Oregon,F,Bachelors,825629.78%,62902,69,1/0/00,Personal Auto,Two-Door Car,159.383042
";

fn write_input(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_spec_scenario_row() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "in.csv",
        "ST,Gender,Education,Customer Lifetime Value,Number of Open Complaints,Vehicle Class\n\
         AZ,female,Bachelors,10.50%,1/2/00,Sports Car\n",
    );
    let output = dir.path().join("out.csv");

    let table = run(&Config::new(&input).with_output_path(&output)).unwrap();

    assert_eq!(table.cell(0, "state"), Some(&CellValue::from("Arizona")));
    assert_eq!(table.cell(0, "gender"), Some(&CellValue::from("F")));
    assert_eq!(table.cell(0, "education"), Some(&CellValue::from("Bachelor")));
    assert_eq!(table.cell(0, "customer_lifetime_value"), Some(&CellValue::Int(10)));
    assert_eq!(table.cell(0, "number_of_open_complaints"), Some(&CellValue::Int(2)));
    assert_eq!(table.cell(0, "vehicle_class"), Some(&CellValue::from("Luxury")));

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "state,gender,education,customer_lifetime_value,number_of_open_complaints,vehicle_class\n\
         Arizona,F,Bachelor,10,2,Luxury\n"
    );
}

#[test]
fn test_insurance_sample() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "insurance.csv", INSURANCE_CSV);
    let output = dir.path().join("combined_data.csv");

    let table = run(&Config::new(&input).with_output_path(&output)).unwrap();

    // One exact duplicate (OC83172) removed
    assert_eq!(table.row_count(), 10);
    assert_eq!(table.column_count(), 11);
    assert!(table.column("state").is_some());
    assert!(table.column("gender").is_some());

    for col_idx in 0..table.column_count() {
        assert_eq!(table.null_count(col_idx), 0, "column {}", table.columns[col_idx].name);
        let column = &table.columns[col_idx];
        if column.cell_type.is_numeric() {
            assert_eq!(column.cell_type, CellType::Int);
        }
    }

    // Missing gender takes the mode; F outnumbers M once Femal is normalized
    assert_eq!(table.cell(0, "gender"), Some(&CellValue::from("F")));
    // Imputation runs before deduplication, so the median covers all ten present values:
    // (738817.81 + 764586.18) / 2 = 751701.995
    assert_eq!(
        table.cell(0, "customer_lifetime_value"),
        Some(&CellValue::Int(751702))
    );
    assert_eq!(table.cell(1, "state"), Some(&CellValue::from("Arizona")));
    assert_eq!(table.cell(3, "state"), Some(&CellValue::from("California")));
    assert_eq!(table.cell(4, "state"), Some(&CellValue::from("Washington")));
    assert_eq!(table.cell(6, "gender"), Some(&CellValue::from("F")));
    assert_eq!(table.cell(7, "gender"), Some(&CellValue::from("M")));
    assert_eq!(table.cell(0, "total_claim_amount"), Some(&CellValue::Int(3)));
    assert_eq!(table.cell(6, "total_claim_amount"), Some(&CellValue::Int(322)));
    assert_eq!(table.cell(8, "total_claim_amount"), Some(&CellValue::Int(511)));

    let reloaded = load_data(&output, &Config::default()).unwrap();
    assert_eq!(reloaded.row_count(), 10);
    assert_eq!(reloaded.column_names(), table.column_names());
}

#[test]
fn test_round_trip_preserves_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("round.csv");
    let table = Table::from_rows(
        vec!["name", "count", "ratio", "note"],
        vec![
            vec!["a, quoted".into(), CellValue::Int(3), CellValue::Float(1.25), CellValue::Null],
            vec!["b".into(), CellValue::Int(-4), CellValue::Float(2.0), "x".into()],
        ],
    );

    save_cleaned_data(&table, &path, &Config::default()).unwrap();
    let reloaded = load_data(&path, &Config::default()).unwrap();

    assert_eq!(reloaded.column_names(), table.column_names());
    assert_eq!(reloaded.cell(0, "name"), Some(&CellValue::from("a, quoted")));
    assert_eq!(reloaded.cell(1, "count"), Some(&CellValue::Int(-4)));
    assert_eq!(reloaded.cell(0, "ratio"), Some(&CellValue::Float(1.25)));
    // 2.0 is written as "2"; the column still reloads as float because of 1.25
    assert_eq!(reloaded.cell(1, "ratio"), Some(&CellValue::Float(2.0)));
    assert_eq!(reloaded.cell(0, "note"), Some(&CellValue::Null));
}

#[test]
fn test_keep_last_keeps_later_row() {
    let table = Table::from_rows(
        vec!["k"],
        vec![
            vec!["A".into()],
            vec!["A".into()],
            vec!["B".into()],
        ],
    );
    let deduped = drop_duplicates_str(&table, "last").unwrap();
    assert_eq!(deduped.row_count(), 2);
    assert_eq!(deduped.rows[0].source_line, 3);
    assert_eq!(deduped.cell(1, "k"), Some(&CellValue::from("B")));
}

#[test]
fn test_missing_input_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");
    let config = Config::new(dir.path().join("missing.csv")).with_output_path(&output);

    assert!(matches!(run(&config), Err(CleanError::Io { .. })));
    assert!(!output.exists());
}

#[test]
fn test_all_missing_numeric_column_aborts_before_writing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "a,b\n1,\n2,\n");
    let output = dir.path().join("out.csv");

    let err = run(&Config::new(&input).with_output_path(&output)).unwrap_err();
    assert!(matches!(err, CleanError::MissingNumericValue { ref column, row: 0 } if column == "b"));
    assert!(!output.exists());
}

#[test]
fn test_empty_input_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "");
    let output = dir.path().join("out.csv");

    let err = run(&Config::new(&input).with_output_path(&output)).unwrap_err();
    assert!(matches!(err, CleanError::MissingHeader { .. }));
    assert!(!output.exists());
}

#[test]
fn test_lifetime_value_beyond_i64_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "Customer Lifetime Value\n1e25%\n5%\n");
    let output = dir.path().join("out.csv");

    let err = run(&Config::new(&input).with_output_path(&output)).unwrap_err();
    assert!(matches!(
        err,
        CleanError::OutOfRange { ref column, row: 0 } if column == "customer_lifetime_value"
    ));
    assert!(!output.exists());
}

#[test]
fn test_output_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "Gender\nMale\n");
    let output = write_input(&dir, "out.csv", "stale contents that are longer than the result\n");

    run(&Config::new(&input)
        .with_output_path(&output)
        .with_keep(KeepPolicy::Last))
    .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "gender\nM\n");
}
