use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use calamine::Data;

use crate::config::{ensure_webview_data_dir, RosterConfig, PAGE_SIZE_ENV, ROSTER_ENV};
use crate::domain::entities::employee::{EmployeeField, EmployeeRecord};
use crate::domain::entities::roster::PageSize;
use crate::infra::import::csv::read_employees_csv;
use crate::infra::import::json::parse_employees_json;
use crate::infra::import::rows::{map_headers, normalize_date, record_from_row};
use crate::infra::import::xlsx::cell_to_string;
use crate::infra::source::file::{FileEmployeeSource, ROSTER_EXTENSIONS};
use crate::ui::pages::create_employee::{finalize_draft, submit_draft};
use crate::usecase::ports::source::{EmployeeSource, SourceError};
use crate::usecase::services::employee_store::EmployeeStore;
use crate::usecase::services::import_service::ImportService;
use crate::usecase::services::render_model::build_render_model;
use crate::usecase::services::roster_view::RosterView;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("hrnet-{prefix}-{nanos}"))
}

fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("should write fixture");
    path
}

fn twelve_employee_csv() -> String {
    let mut csv = String::from("firstName,lastName,startDate,department,city\n");
    for i in 1..=12 {
        let city = if i % 4 == 0 { "Boston" } else { "Denver" };
        csv.push_str(&format!("Emp{i:02},Doe,2020-01-{i:02},Sales,{city}\n"));
    }
    csv
}

#[test]
fn csv_import_maps_keys_and_labels_and_ignores_unknown_columns() {
    let temp_dir = unique_test_dir("csv-import");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let csv_path = write_fixture(
        &temp_dir,
        "roster.csv",
        "First Name,lastName,Start Date,badge,Zip Code\nAlice,Martin,2021-03-04,X1,01234\nBob,Durand\n",
    );

    let employees = read_employees_csv(&csv_path).expect("csv import should succeed");

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].field(EmployeeField::FirstName), Some("Alice"));
    assert_eq!(employees[0].field(EmployeeField::StartDate), Some("03/04/2021"));
    assert_eq!(employees[0].field(EmployeeField::ZipCode), Some("01234"));
    assert_eq!(employees[1].field(EmployeeField::LastName), Some("Durand"));
    assert_eq!(employees[1].field(EmployeeField::StartDate), None);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn csv_import_rejects_header_without_employee_columns() {
    let temp_dir = unique_test_dir("csv-bad-header");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let csv_path = write_fixture(&temp_dir, "other.csv", "sku,qty\nA,1\n");

    let result = read_employees_csv(&csv_path);

    assert!(result.is_err(), "unknown header should be rejected");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn json_accepts_bare_array_and_content_payload() {
    let bare = r#"[{"firstName":"Ann","states":"AL","dateOfBirth":"1990-07-15T00:00:00.000Z"}]"#;
    let payload = r#"{"content":[{"lastName":"Lee"},{"city":"Reno"}]}"#;

    let bare = parse_employees_json(bare).expect("bare array should parse");
    let payload = parse_employees_json(payload).expect("payload should parse");

    assert_eq!(bare.len(), 1);
    assert_eq!(bare[0].field(EmployeeField::State), Some("AL"));
    assert_eq!(bare[0].field(EmployeeField::DateOfBirth), Some("07/15/1990"));
    assert_eq!(bare[0].field(EmployeeField::City), None);
    assert_eq!(payload.len(), 2);
    assert_eq!(payload[1].field(EmployeeField::City), Some("Reno"));
}

#[test]
fn json_rejects_unrelated_document() {
    assert!(parse_employees_json(r#"{"employees": 3}"#).is_err());
}

#[test]
fn record_serializes_state_under_states_key() {
    let record = EmployeeRecord::from_pairs([(EmployeeField::State, "NY")]);

    let json = serde_json::to_string(&record).expect("record should serialize");

    assert_eq!(json, r#"{"states":"NY"}"#);
}

#[test]
fn row_mapping_skips_blank_rows() {
    let mapping = map_headers(&["firstName", "city"]).expect("headers should map");

    assert!(record_from_row(&mapping, &["", "  "]).is_none());
    let record = record_from_row(&mapping, &["Zed"]).expect("row should produce a record");
    assert_eq!(record.field(EmployeeField::FirstName), Some("Zed"));
    assert_eq!(record.field(EmployeeField::City), None);
}

#[test]
fn normalize_date_only_rewrites_iso_dates() {
    assert_eq!(normalize_date("2024-02-29"), "02/29/2024");
    assert_eq!(normalize_date("12/31/1999"), "12/31/1999");
    assert_eq!(normalize_date("soon"), "soon");
}

#[test]
fn normalize_date_keeps_values_with_trailing_text() {
    assert_eq!(normalize_date("1990-07-15T08:30:00Z"), "07/15/1990");
    assert_eq!(normalize_date("2021-03-04xyz"), "2021-03-04xyz");
    assert_eq!(normalize_date("2021-03-04 extra"), "2021-03-04 extra");
    assert_eq!(normalize_date("2021-03-0é"), "2021-03-0é");
}

#[test]
fn spreadsheet_cells_render_as_text() {
    assert_eq!(cell_to_string(&Data::Float(75001.0)), "75001");
    assert_eq!(cell_to_string(&Data::Float(1.5)), "1.5");
    assert_eq!(cell_to_string(&Data::String(" Sales ".to_string())), "Sales");
    assert_eq!(cell_to_string(&Data::Empty), "");
}

#[test]
fn file_source_reports_missing_and_unsupported_files() {
    let temp_dir = unique_test_dir("file-source");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let txt_path = write_fixture(&temp_dir, "roster.txt", "firstName\nAnn\n");

    let missing = FileEmployeeSource::new(temp_dir.join("absent.json")).load();
    let unsupported = FileEmployeeSource::new(&txt_path).load();

    assert!(matches!(missing, Err(SourceError::NotFound(_))));
    assert_eq!(unsupported, Err(SourceError::Unsupported("txt".to_string())));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn file_source_reads_every_listed_extension() {
    let temp_dir = unique_test_dir("file-extensions");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");

    for extension in ROSTER_EXTENSIONS {
        let path = write_fixture(&temp_dir, &format!("roster.{extension}"), "not a roster");

        let result = FileEmployeeSource::new(&path).load();

        assert!(
            !matches!(result, Err(SourceError::Unsupported(_))),
            "{extension} should have a reader"
        );
    }

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn import_service_treats_missing_default_roster_as_empty() {
    let temp_dir = unique_test_dir("default-roster");
    let service = ImportService::new(temp_dir.join("employees.json"));

    let employees = service.load_default().expect("missing roster should not fail");

    assert!(employees.is_empty());
}

#[test]
fn import_service_surfaces_parse_errors() {
    let temp_dir = unique_test_dir("broken-roster");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let json_path = write_fixture(&temp_dir, "employees.json", "{not json");
    let service = ImportService::new(json_path);

    let result = service.load_default();

    assert!(matches!(result, Err(SourceError::Message(_))));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn import_service_accepts_any_source() {
    struct FixedSource;

    impl EmployeeSource for FixedSource {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        fn load(&self) -> Result<Vec<EmployeeRecord>, SourceError> {
            Ok(vec![EmployeeRecord::from_pairs([(EmployeeField::FirstName, "Ann")])])
        }
    }

    let service = ImportService::new(PathBuf::from("unused.json"));

    let employees = service
        .load_from(Arc::new(FixedSource))
        .expect("fixed source should load");

    assert_eq!(employees.len(), 1);
}

#[test]
fn store_bumps_revision_on_every_change() {
    let mut store = EmployeeStore::default();
    assert_eq!(store.revision(), 0);
    assert!(store.employees().is_empty());

    store.set_employees(vec![EmployeeRecord::default(); 3]);
    store.add_employee(EmployeeRecord::from_pairs([(EmployeeField::FirstName, "New")]));

    assert_eq!(store.revision(), 2);
    assert_eq!(store.employees().len(), 4);
    assert_eq!(
        store.employees()[3].field(EmployeeField::FirstName),
        Some("New")
    );
}

#[test]
fn config_defaults_to_data_dir_roster_and_smallest_page() {
    let data_dir = PathBuf::from("/data/hrnet");

    let config = RosterConfig::from_lookup(&data_dir, |_| None);

    assert_eq!(config.roster_path, data_dir.join("employees.json"));
    assert_eq!(config.page_size, PageSize::Ten);
}

#[test]
fn config_reads_overrides_and_ignores_bad_page_size() {
    let data_dir = PathBuf::from("/data/hrnet");

    let config = RosterConfig::from_lookup(&data_dir, |key| match key {
        ROSTER_ENV => Some("/tmp/staff.csv".to_string()),
        PAGE_SIZE_ENV => Some("50".to_string()),
        _ => None,
    });
    let fallback = RosterConfig::from_lookup(&data_dir, |key| {
        (key == PAGE_SIZE_ENV).then(|| "7".to_string())
    });

    assert_eq!(config.roster_path, PathBuf::from("/tmp/staff.csv"));
    assert_eq!(config.page_size, PageSize::Fifty);
    assert_eq!(fallback.page_size, PageSize::Ten);
}

#[test]
fn ensure_webview_data_dir_creates_subdir() {
    let temp_dir = unique_test_dir("webview-data-dir");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");

    let webview_dir =
        ensure_webview_data_dir(&temp_dir).expect("webview data dir should be created");

    assert_eq!(webview_dir, temp_dir.join("webview"));
    assert!(webview_dir.is_dir(), "webview directory should exist");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn page_size_accepts_only_enumerated_values() {
    assert_eq!("25".parse::<PageSize>(), Ok(PageSize::TwentyFive));
    assert_eq!(PageSize::try_from(100), Ok(PageSize::Hundred));
    assert!("0".parse::<PageSize>().is_err());
    assert!(PageSize::try_from(12).is_err());
    assert_eq!(PageSize::default().get(), 10);
}

#[test]
fn field_lookup_accepts_wire_names_and_labels() {
    assert_eq!(EmployeeField::from_key("zipcode"), Some(EmployeeField::ZipCode));
    assert_eq!(EmployeeField::from_key(" Date of Birth "), Some(EmployeeField::DateOfBirth));
    assert_eq!(EmployeeField::from_key("states"), Some(EmployeeField::State));
    assert_eq!(EmployeeField::from_key("salary"), None);
}

#[test]
fn draft_requires_names_and_normalizes_dates() {
    let incomplete = EmployeeRecord::from_pairs([(EmployeeField::FirstName, "Ann")]);
    let complete = EmployeeRecord::from_pairs([
        (EmployeeField::FirstName, " Ann "),
        (EmployeeField::LastName, "Lee"),
        (EmployeeField::StartDate, "2023-09-01"),
        (EmployeeField::City, ""),
    ]);

    let error = finalize_draft(&incomplete).expect_err("last name should be required");
    let record = finalize_draft(&complete).expect("complete draft should pass");

    assert_eq!(error, "Last Name is required");
    assert_eq!(record.field(EmployeeField::FirstName), Some("Ann"));
    assert_eq!(record.field(EmployeeField::StartDate), Some("09/01/2023"));
    assert_eq!(record.field(EmployeeField::City), None);
}

#[test]
fn submitting_draft_adds_employee_only_when_valid() {
    let mut store = EmployeeStore::default();
    let incomplete = EmployeeRecord::from_pairs([(EmployeeField::FirstName, "Ann")]);
    let complete = EmployeeRecord::from_pairs([
        (EmployeeField::FirstName, " Ann "),
        (EmployeeField::LastName, "Lee"),
    ]);

    let error = submit_draft(&incomplete, &mut store).expect_err("incomplete draft should fail");
    assert_eq!(error, "Last Name is required");
    assert!(store.employees().is_empty());
    assert_eq!(store.revision(), 0);

    let name = submit_draft(&complete, &mut store).expect("complete draft should be added");

    assert_eq!(name, "Ann Lee");
    assert_eq!(store.employees().len(), 1);
    assert_eq!(store.revision(), 1);
}

#[test]
fn imported_roster_flows_through_grid() {
    let temp_dir = unique_test_dir("grid-flow");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let csv_path = write_fixture(&temp_dir, "roster.csv", &twelve_employee_csv());
    let service = ImportService::new(temp_dir.join("employees.json"));

    let mut store = EmployeeStore::default();
    let mut view = RosterView::default();
    store.set_employees(service.load_path(&csv_path).expect("csv roster should load"));
    view.collection_replaced(store.employees());

    let model = build_render_model(view.params(), &view.derive(store.employees()));
    assert_eq!(model.summary, "Showing 1 to 10 of 12 entries");
    assert_eq!(model.rows[0][2], "01/01/2020");

    view.go_to_next_page();
    view.set_search_text("boston", store.employees());
    let model = build_render_model(view.params(), &view.derive(store.employees()));
    assert_eq!(view.params().current_page, 0);
    assert_eq!(
        model.summary,
        "Showing 1 to 3 of 3 (filtered from 12 total entries)"
    );

    view.clear_search(store.employees());
    view.go_to_next_page();
    store.set_employees(store.employees()[..4].to_vec());
    view.collection_replaced(store.employees());
    let model = build_render_model(view.params(), &view.derive(store.employees()));
    assert_eq!(view.params().current_page, 0);
    assert_eq!(model.rows.len(), 4);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}
