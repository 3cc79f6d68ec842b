use std::io::Cursor;
use std::path::Path;

use super::common::*;
use crate::admissions::loader::{CandidateFormat, CandidateLoadError, CandidateLoader};

#[test]
fn json_loader_reads_interchange_fields() {
    let json = r#"[
        {
            "givenName": "Beatriz",
            "familyName": "Diaz",
            "ethnicity": "Indígena",
            "admissionScore": 450,
            "registrationDate": "2025-01-09",
            "mathScore": 80,
            "englishScore": 60
        },
        {
            "givenName": "Camilo",
            "familyName": "Ardila",
            "admissionScore": 500,
            "mathScore": 60,
            "englishScore": 90
        }
    ]"#;

    let candidates = CandidateLoader::from_json_reader(Cursor::new(json)).expect("json parses");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].ethnicity.as_deref(), Some("Indígena"));
    assert_eq!(candidates[0].registration_date, Some(registered_on(9)));
    assert_eq!(candidates[1], ardila());
}

#[test]
fn json_loader_accepts_legacy_field_names() {
    let json = r#"[{
        "name": "Andres",
        "lastName": "Zapata",
        "ethnicity": "mestizo",
        "globalIcfesScore": 450,
        "registrationDate": null,
        "mathScore": 70,
        "englishScore": 60
    }]"#;

    let candidates = CandidateLoader::from_json_reader(Cursor::new(json)).expect("json parses");

    assert_eq!(candidates, vec![zapata()]);
}

#[test]
fn blank_optional_fields_are_absent() {
    let json = r#"[{
        "givenName": "Camilo",
        "familyName": "Ardila",
        "ethnicity": "   ",
        "admissionScore": 500,
        "registrationDate": "",
        "mathScore": 60,
        "englishScore": 90
    }]"#;

    let candidates = CandidateLoader::from_json_reader(Cursor::new(json)).expect("json parses");

    assert_eq!(candidates, vec![ardila()]);
}

#[test]
fn json_loader_rejects_malformed_dates() {
    let json = r#"[{
        "givenName": "Camilo",
        "familyName": "Ardila",
        "admissionScore": 500,
        "registrationDate": "09/01/2025",
        "mathScore": 60,
        "englishScore": 90
    }]"#;

    let error = CandidateLoader::from_json_reader(Cursor::new(json)).expect_err("bad date");

    assert!(matches!(error, CandidateLoadError::Json(_)));
    assert!(error.to_string().contains("YYYY-MM-DD"));
}

#[test]
fn csv_loader_reads_rows_in_order() {
    let csv = "givenName,familyName,ethnicity,admissionScore,registrationDate,mathScore,englishScore\n\
Andres,Zapata,mestizo,450,,70,60\n\
Beatriz, Diaz ,indigena,450,,80,60\n\
Camilo,Ardila,,500,,60,90\n";

    let candidates = CandidateLoader::from_csv_reader(Cursor::new(csv)).expect("csv parses");

    assert_eq!(candidates, scenario());
}

#[test]
fn csv_loader_reports_non_numeric_scores() {
    let csv = "givenName,familyName,ethnicity,admissionScore,registrationDate,mathScore,englishScore\n\
Andres,Zapata,mestizo,high,,70,60\n";

    let error = CandidateLoader::from_csv_reader(Cursor::new(csv)).expect_err("bad score");

    assert!(matches!(error, CandidateLoadError::Csv(_)));
}

#[test]
fn format_is_chosen_from_extension() {
    assert_eq!(
        CandidateFormat::from_path(Path::new("candidates.JSON")).expect("json"),
        CandidateFormat::Json
    );
    assert_eq!(
        CandidateFormat::from_path(Path::new("exports/candidates.csv")).expect("csv"),
        CandidateFormat::Csv
    );

    match CandidateFormat::from_path(Path::new("candidates.xlsx")) {
        Err(CandidateLoadError::UnsupportedFormat { extension }) => assert_eq!(extension, "xlsx"),
        other => panic!("expected unsupported format, got {other:?}"),
    }
}

#[test]
fn from_path_propagates_io_errors() {
    let error = CandidateLoader::from_path("./does-not-exist.json").expect_err("missing file");

    match error {
        CandidateLoadError::Io(_) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}
