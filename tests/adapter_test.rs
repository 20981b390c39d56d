use dropout_predictor::error::PredictorError;
use dropout_predictor::features::engineer;
use dropout_predictor::input::{self, StudentForm};
use dropout_predictor::schema;
use serde_json::json;

/// A valid manual submission, categorical fields as selector labels.
fn form_json() -> serde_json::Value {
    json!({
        "Previous_qualification_grade": 130.0,
        "Admission_grade": 125.0,
        "Curricular_units_1st_sem_credited": 0,
        "Curricular_units_1st_sem_enrolled": 6,
        "Curricular_units_1st_sem_evaluations": 7,
        "Curricular_units_1st_sem_approved": 3,
        "Curricular_units_1st_sem_grade": 12.5,
        "Curricular_units_1st_sem_without_evaluations": 0,
        "Curricular_units_2nd_sem_credited": 0,
        "Curricular_units_2nd_sem_enrolled": 5,
        "Curricular_units_2nd_sem_evaluations": 6,
        "Curricular_units_2nd_sem_approved": 4,
        "Curricular_units_2nd_sem_grade": 14.0,
        "Curricular_units_2nd_sem_without_evaluations": 0,
        "Age_at_enrollment": 19,
        "Marital_status": "Single",
        "Nacionality": "Portuguese",
        "Mothers_qualification": "Basic Education 3rd Cycle (9th/10th/11th Year) or Equiv.",
        "Fathers_qualification": "Basic Education 3rd Cycle (9th/10th/11th Year) or Equiv.",
        "Mothers_occupation": "Administrative Staff",
        "Fathers_occupation": "Skilled Workers in Industry, Construction and Craftsmen",
        "Gender": "Female",
        "Displaced": "Yes",
        "Application_mode": "1st Phase - General Contingent",
        "Course": "Nursing",
        "Daytime_evening_attendance": "Daytime",
        "Previous_qualification": "Secondary Education",
        "Debtor": "No",
        "Tuition_fees_up_to_date": "Yes",
        "Scholarship_holder": "No",
        "International": "No",
        "Educational_special_needs": "No",
        "Unemployment_rate": 10.8,
        "Inflation_rate": 1.4,
        "GDP": 1.74,
    })
}

fn parse_form(value: serde_json::Value) -> StudentForm {
    serde_json::from_value(value).unwrap()
}

/// Header plus one valid data row, codes for categorical fields, in raw
/// schema order followed by any extra columns supplied.
fn csv_row(skip: Option<&str>) -> String {
    let values: Vec<(&str, &str)> = vec![
        (schema::PREVIOUS_QUALIFICATION_GRADE, "130.0"),
        (schema::ADMISSION_GRADE, "125.0"),
        (schema::UNITS_1ST_SEM_CREDITED, "0"),
        (schema::UNITS_1ST_SEM_ENROLLED, "6"),
        (schema::UNITS_1ST_SEM_EVALUATIONS, "7"),
        (schema::UNITS_1ST_SEM_APPROVED, "3"),
        (schema::UNITS_1ST_SEM_GRADE, "12.5"),
        (schema::UNITS_1ST_SEM_WITHOUT_EVALUATIONS, "0"),
        (schema::UNITS_2ND_SEM_CREDITED, "0"),
        (schema::UNITS_2ND_SEM_ENROLLED, "5"),
        (schema::UNITS_2ND_SEM_EVALUATIONS, "6"),
        (schema::UNITS_2ND_SEM_APPROVED, "4"),
        (schema::UNITS_2ND_SEM_GRADE, "14.0"),
        (schema::UNITS_2ND_SEM_WITHOUT_EVALUATIONS, "0"),
        (schema::AGE_AT_ENROLLMENT, "19"),
        (schema::MARITAL_STATUS, "1"),
        (schema::NACIONALITY, "1"),
        (schema::MOTHERS_QUALIFICATION, "19"),
        (schema::FATHERS_QUALIFICATION, "19"),
        (schema::MOTHERS_OCCUPATION, "4"),
        (schema::FATHERS_OCCUPATION, "7"),
        (schema::GENDER, "0"),
        (schema::DISPLACED, "1"),
        (schema::APPLICATION_MODE, "1"),
        (schema::COURSE, "9500"),
        (schema::DAYTIME_EVENING_ATTENDANCE, "1"),
        (schema::PREVIOUS_QUALIFICATION, "1"),
        (schema::DEBTOR, "0"),
        (schema::TUITION_FEES_UP_TO_DATE, "1"),
        (schema::SCHOLARSHIP_HOLDER, "0"),
        (schema::INTERNATIONAL, "0"),
        (schema::EDUCATIONAL_SPECIAL_NEEDS, "0"),
        (schema::UNEMPLOYMENT_RATE, "10.8"),
        (schema::INFLATION_RATE, "1.4"),
        (schema::GDP, "1.74"),
    ];
    let kept: Vec<_> = values
        .into_iter()
        .filter(|(name, _)| Some(*name) != skip)
        .collect();
    let header: Vec<&str> = kept.iter().map(|(n, _)| *n).collect();
    let row: Vec<&str> = kept.iter().map(|(_, v)| *v).collect();
    format!("{}\n{}\n", header.join(","), row.join(","))
}

#[test]
fn manual_adapter_builds_one_coded_row() {
    let table = input::manual_table(&parse_form(form_json())).unwrap();
    assert_eq!(table.n_rows(), 1);
    assert_eq!(table.n_columns(), 35);
    // labels were reverse-mapped to codes
    assert_eq!(table.get(schema::COURSE, 0), Some(9500.0));
    assert_eq!(table.get(schema::MARITAL_STATUS, 0), Some(1.0));
    assert_eq!(table.get(schema::TUITION_FEES_UP_TO_DATE, 0), Some(1.0));
    // and the row engineers cleanly
    let out = engineer(&table).unwrap();
    assert_eq!(out.get(schema::APPROVED_RATIO_SEM2, 0), Some(0.8));
}

#[test]
fn manual_adapter_rejects_unknown_label() {
    let mut form = form_json();
    form["Course"] = json!("Underwater Basket Weaving");
    match input::manual_table(&parse_form(form)) {
        Err(PredictorError::UnknownLabel { feature, label }) => {
            assert_eq!(feature, schema::COURSE);
            assert_eq!(label, "Underwater Basket Weaving");
        }
        other => panic!("expected UnknownLabel, got {other:?}"),
    }
}

// Scenario C: a bulk upload without the Debtor column fails the header
// pre-check before any engineering runs.
#[test]
fn bulk_adapter_missing_header_is_reported() {
    let csv = csv_row(Some(schema::DEBTOR));
    match input::bulk_table(csv.as_bytes()) {
        Err(PredictorError::MissingHeaders { missing }) => {
            assert_eq!(missing, vec![schema::DEBTOR.to_string()]);
        }
        other => panic!("expected MissingHeaders, got {other:?}"),
    }
}

// Scenario D: headers only. Recoverable, distinct from SchemaMismatch.
#[test]
fn bulk_adapter_empty_input() {
    let csv = csv_row(None);
    let headers_only = csv.lines().next().unwrap().to_string() + "\n";
    match input::bulk_table(headers_only.as_bytes()) {
        Err(PredictorError::EmptyInput) => {}
        other => panic!("expected EmptyInput, got {other:?}"),
    }
}

#[test]
fn bulk_adapter_missing_headers_beats_empty_input() {
    let csv = csv_row(Some(schema::DEBTOR));
    let headers_only = csv.lines().next().unwrap().to_string() + "\n";
    match input::bulk_table(headers_only.as_bytes()) {
        Err(PredictorError::MissingHeaders { .. }) => {}
        other => panic!("expected MissingHeaders, got {other:?}"),
    }
}

#[test]
fn bulk_adapter_empty_cells_are_missing() {
    let csv = csv_row(None).replace("\n130.0,", "\n,");
    let table = input::bulk_table(csv.as_bytes()).unwrap();
    assert_eq!(table.get(schema::PREVIOUS_QUALIFICATION_GRADE, 0), None);
    assert_eq!(table.get(schema::ADMISSION_GRADE, 0), Some(125.0));
}

#[test]
fn bulk_adapter_rejects_non_numeric_cells() {
    let csv = csv_row(None).replace("\n130.0,", "\nexcellent,");
    match input::bulk_table(csv.as_bytes()) {
        Err(PredictorError::InvalidValue { column, row, value }) => {
            assert_eq!(column, schema::PREVIOUS_QUALIFICATION_GRADE);
            assert_eq!(row, 0);
            assert_eq!(value, "excellent");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn bulk_adapter_ignores_extra_columns() {
    let mut csv = csv_row(None);
    csv = csv.replacen('\n', ",Internal_row_id\n", 1);
    csv = csv.trim_end().to_string() + ",7\n";
    let table = input::bulk_table(csv.as_bytes()).unwrap();
    let out = engineer(&table).unwrap();
    let names: Vec<&str> = out.column_names().collect();
    assert_eq!(names, schema::all_features());
}

// Round-trip: populate the downloaded template with one valid row and
// feed it back through the bulk adapter and the transform.
#[test]
fn template_round_trip() {
    let template = input::template_csv();
    let data_row = csv_row(None);
    // template columns are raw + engineered; supply raw values and leave
    // the engineered cells empty for the transform to overwrite
    let raw_values = data_row.lines().nth(1).unwrap();
    let filled = format!("{}{},,,,,,,\n", template, raw_values);
    let table = input::bulk_table(filled.as_bytes()).unwrap();
    let out = engineer(&table).unwrap();
    let names: Vec<&str> = out.column_names().collect();
    assert_eq!(names, schema::all_features());
    assert_eq!(out.get(schema::APPROVED_RATIO_SEM1, 0), Some(0.5));
}

#[test]
fn results_csv_appends_prediction_columns() {
    let table = engineer(&input::bulk_table(csv_row(None).as_bytes()).unwrap()).unwrap();
    let predictions = vec![dropout_predictor::model::Prediction {
        predicted_is_dropout: 1,
        probability_non_dropout: 0.25,
        probability_dropout: 0.75,
        predicted_status: "Dropout",
    }];
    let exported = input::results_csv(&table, &predictions).unwrap();
    let mut lines = exported.lines();
    let header = lines.next().unwrap();
    assert!(header.ends_with(
        "Predicted_Is_Dropout,Probability_Non_Dropout,Probability_Dropout,Predicted_Status"
    ));
    let row = lines.next().unwrap();
    assert!(row.ends_with("1,0.25,0.75,Dropout"));
    // integer-valued cells export without a decimal point
    assert!(row.contains(",9500,"));
}
