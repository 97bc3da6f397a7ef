mod common;

use chrono::{TimeZone, Utc};
use common::grid;
use launchlab::config::ImportParams;
use launchlab::core_types::{grid_from_csv, Cell};
use launchlab::import::coerce::{parse_integer, parse_number, parse_timestamp};
use launchlab::import::fallback::{fallback_shots, parse_fallback};
use launchlab::import::header::FieldIndex;
use launchlab::import::normalize::normalize_row;
use launchlab::import::{parse_sheet, ImportSource, ParsePath};
use launchlab::LaunchLabError;
use rstest::rstest;

fn source(name: &str) -> ImportSource {
    ImportSource::new(name, Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 5).unwrap())
}

const FULL_HEADER: &[&str] = &[
    "Date",
    "Club",
    "Club Speed",
    "Ball Speed",
    "Launch Angle",
    "Spin Rate",
    "Carry Distance",
    "Total Distance",
];

// --- COERCION ---

#[rstest]
#[case("1,234.5", Some(1234.5))]
#[case("  42 ", Some(42.0))]
#[case("#DIV/0!", None)]
#[case("nan", None)]
#[case("NaN", None)]
#[case("", None)]
#[case("abc", None)]
fn test_number_coercion(#[case] raw: &str, #[case] expected: Option<f64>) {
    assert_eq!(parse_number(&Cell::Text(raw.to_string())), expected);
}

#[test]
fn test_swing_count_is_rounded() {
    assert_eq!(parse_integer(&Cell::Number(3.6)), Some(4));
    assert_eq!(parse_integer(&Cell::Text("2.2".into())), Some(2));
}

#[test]
fn test_serial_timestamp() {
    let ts = parse_timestamp(&Cell::Number(45292.5)).unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
}

#[rstest]
#[case("01/05/2024 10:22:31PM")]
#[case("01/05/2024 10:22:31 PM")]
#[case("2024-01-05 22:22:31")]
#[case("2024-01-05T22:22:31Z")]
fn test_text_timestamps(#[case] raw: &str) {
    let ts = parse_timestamp(&Cell::Text(raw.to_string())).unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 5, 22, 22, 31).unwrap());
}

#[test]
fn test_invalid_date_is_absent() {
    assert_eq!(parse_timestamp(&Cell::Text("13/45/2024".into())), None);
}

// --- NORMALIZER ---

#[test]
fn test_row_without_club_is_dropped() {
    let index = FieldIndex::from_labels(&["Club", "Carry"]);
    let row = vec![Cell::Empty, Cell::Number(150.0)];
    assert!(normalize_row(&row, &index, "batch").is_none());
}

#[test]
fn test_bad_cells_leave_fields_absent() {
    let index = FieldIndex::from_labels(&["Club", "Carry", "Ball Speed", "Club Speed"]);
    let row = vec![
        Cell::Text(" 7 Iron ".into()),
        Cell::Text("#DIV/0!".into()),
        Cell::Number(112.0),
        Cell::Number(84.0),
    ];
    let shot = normalize_row(&row, &index, "batch").unwrap();
    assert_eq!(shot.club, "7 Iron");
    assert_eq!(shot.session_id, "batch");
    assert_eq!(shot.carry_distance, None);
    let smash = shot.smash_factor.unwrap();
    assert!((smash - 112.0 / 84.0).abs() < 1e-12);
}

#[test]
fn test_face_to_path_is_derived() {
    let index = FieldIndex::from_labels(&["Club", "Face Angle", "Club Path"]);
    let row = vec![Cell::Text("Driver".into()), Cell::Number(1.5), Cell::Number(-2.0)];
    let shot = normalize_row(&row, &index, "b").unwrap();
    assert_eq!(shot.face_to_path, Some(3.5));
}

#[test]
fn test_native_smash_is_kept() {
    let index = FieldIndex::from_labels(&["Club", "Ball Speed", "Club Speed", "Smash Factor"]);
    let row = vec![
        Cell::Text("Driver".into()),
        Cell::Number(150.0),
        Cell::Number(100.0),
        Cell::Number(1.48),
    ];
    assert_eq!(normalize_row(&row, &index, "b").unwrap().smash_factor, Some(1.48));
}

// --- PIPELINE ---

#[test]
fn test_header_path_and_batch_session() {
    let g = grid(&[
        FULL_HEADER,
        &["45292.5", "Driver", "105", "154", "12", "2600", "240", "262"],
        &["45292.51", "7 Iron", "85", "113", "17", "6500", "160", "166"],
        &["", "", "", "", "", "", "", ""],
        &["45292.52", "PW", "78", "95", "26", "9000", "125", "127"],
    ]);
    let parsed = parse_sheet(&g, None, &source("range/monday.csv"), &ImportParams::default()).unwrap();

    assert!(matches!(
        parsed.path,
        ParsePath::HeaderMapped { header_row: 0, used_two_rows: false, .. }
    ));
    assert_eq!(parsed.shots.len(), 3);
    assert_eq!(parsed.rows_considered, 3);
    assert!(parsed
        .shots
        .iter()
        .all(|s| s.session_id == "monday@2024-03-09T14:30:05"));
    assert_eq!(
        parsed.shots[0].timestamp,
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
    );
}

#[test]
fn test_explicit_session_column_wins() {
    let g = grid(&[
        &["Session", "Club", "Carry"],
        &["Evening", "Driver", "230"],
    ]);
    let params = ImportParams {
        min_matched_columns: 1,
        min_carry_rows: 1,
        ..Default::default()
    };
    let parsed = parse_sheet(&g, None, &source("x.csv"), &params).unwrap();
    assert_eq!(parsed.shots[0].session_id, "Evening");
}

#[test]
fn test_units_row_under_header_is_skipped() {
    let g = grid(&[
        FULL_HEADER,
        &["", "", "[mph]", "[mph]", "[deg]", "[rpm]", "[yds]", "[yds]"],
        &["", "Driver", "105", "154", "12", "2600", "240", "262"],
        &["", "Driver", "104", "153", "12", "2650", "238", "260"],
        &["", "Driver", "106", "156", "11", "2550", "244", "265"],
    ]);
    let parsed = parse_sheet(&g, None, &source("u.csv"), &ImportParams::default()).unwrap();
    assert_eq!(parsed.shots.len(), 3);
    assert_eq!(parsed.rows_considered, 3);
}

#[test]
fn test_weak_mapping_prefers_fallback_with_more_carries() {
    // Quoting breaks the csv reader's view of the row, not the line splitter's.
    let text = "Club Type,Club Name,Carry,Total\n\
                [],[],[yds],[yds]\n\
                \"Iron,7,\"160\",\"166\"\n\
                \"Iron,8,\"150\",\"155\"\n\
                \"Iron,9,\"140\",\"144\"\n";
    let weak_grid = grid(&[&["Club Type", "Club Name", "Carry", "Total"], &["[]", "[]", "[yds]", "[yds]"]]);

    let parsed = parse_sheet(&weak_grid, Some(text), &source("w.csv"), &ImportParams::default()).unwrap();
    assert_eq!(parsed.path, ParsePath::Fallback { units_row: true });
    assert_eq!(parsed.shots.len(), 3);
    assert_eq!(parsed.shots[0].club, "Iron (7)");
    assert_eq!(parsed.shots[2].carry_distance, Some(140.0));
}

#[test]
fn test_weak_mapping_without_raw_text_keeps_header_rows() {
    let weak_grid = grid(&[&["Club", "Carry"], &["Driver", "240"]]);

    let parsed = parse_sheet(&weak_grid, None, &source("book.xlsx"), &ImportParams::default()).unwrap();
    assert!(matches!(parsed.path, ParsePath::HeaderMapped { .. }));
    assert_eq!(parsed.shots.len(), 1);
    assert_eq!(parsed.shots[0].carry_distance, Some(240.0));
}

#[test]
fn test_tie_keeps_header_path() {
    let text = "Club,Carry\nDriver,240\n";
    let g = grid_from_csv(text).unwrap();
    let parsed = parse_sheet(&g, Some(text), &source("t.csv"), &ImportParams::default()).unwrap();
    assert!(matches!(parsed.path, ParsePath::HeaderMapped { .. }));
    assert_eq!(parsed.shots.len(), 1);
}

#[test]
fn test_empty_sheet_is_reported() {
    let g = grid(&[&["", ""], &[]]);
    let err = parse_sheet(&g, None, &source("blank.csv"), &ImportParams::default()).unwrap_err();
    assert!(matches!(err, LaunchLabError::EmptySheet(name) if name == "blank.csv"));
}

#[test]
fn test_no_usable_rows_names_expected_columns() {
    let text = "foo,bar\n1,2\n";
    let g = grid_from_csv(text).unwrap();
    let err = parse_sheet(&g, Some(text), &source("junk.csv"), &ImportParams::default()).unwrap_err();
    match &err {
        LaunchLabError::NoUsableRows { expected, .. } => {
            assert!(expected.iter().any(|c| c == "Carry Distance"))
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("Club Speed"));
}

// --- FALLBACK ---

#[test]
fn test_fallback_requires_club_column() {
    assert!(parse_fallback("Carry,Total\n150,160\n").is_none());
}

#[test]
fn test_fallback_strips_tabs_and_quotes() {
    let table = parse_fallback("\"Club\",\t\"Carry\"\n\n\"7 Iron\",\t\"161.5\"\n").unwrap();
    assert_eq!(table.header, vec!["Club", "Carry"]);
    assert!(!table.units_row);
    let shots = fallback_shots(&table, "b");
    assert_eq!(shots.len(), 1);
    assert_eq!(shots[0].carry_distance, Some(161.5));
}

#[test]
fn test_fallback_parses_glued_meridiem() {
    let table = parse_fallback("Date,Club\n01/05/2024 10:22:31PM,Driver\n").unwrap();
    let shots = fallback_shots(&table, "b");
    assert_eq!(
        shots[0].timestamp,
        Some(Utc.with_ymd_and_hms(2024, 1, 5, 22, 22, 31).unwrap())
    );
}
