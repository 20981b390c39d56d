use dropout_predictor::error::PredictorError;
use dropout_predictor::features::engineer;
use dropout_predictor::schema;
use dropout_predictor::table::Table;

/// Valid raw values for one student, categorical fields as codes.
fn base_record() -> Vec<(&'static str, f64)> {
    vec![
        (schema::PREVIOUS_QUALIFICATION_GRADE, 130.0),
        (schema::ADMISSION_GRADE, 125.0),
        (schema::UNITS_1ST_SEM_CREDITED, 0.0),
        (schema::UNITS_1ST_SEM_ENROLLED, 6.0),
        (schema::UNITS_1ST_SEM_EVALUATIONS, 7.0),
        (schema::UNITS_1ST_SEM_APPROVED, 3.0),
        (schema::UNITS_1ST_SEM_GRADE, 12.5),
        (schema::UNITS_1ST_SEM_WITHOUT_EVALUATIONS, 0.0),
        (schema::UNITS_2ND_SEM_CREDITED, 0.0),
        (schema::UNITS_2ND_SEM_ENROLLED, 5.0),
        (schema::UNITS_2ND_SEM_EVALUATIONS, 6.0),
        (schema::UNITS_2ND_SEM_APPROVED, 4.0),
        (schema::UNITS_2ND_SEM_GRADE, 14.0),
        (schema::UNITS_2ND_SEM_WITHOUT_EVALUATIONS, 0.0),
        (schema::AGE_AT_ENROLLMENT, 19.0),
        (schema::MARITAL_STATUS, 1.0),
        (schema::NACIONALITY, 1.0),
        (schema::MOTHERS_QUALIFICATION, 19.0),
        (schema::FATHERS_QUALIFICATION, 19.0),
        (schema::MOTHERS_OCCUPATION, 4.0),
        (schema::FATHERS_OCCUPATION, 7.0),
        (schema::GENDER, 0.0),
        (schema::DISPLACED, 1.0),
        (schema::APPLICATION_MODE, 1.0),
        (schema::COURSE, 9500.0),
        (schema::DAYTIME_EVENING_ATTENDANCE, 1.0),
        (schema::PREVIOUS_QUALIFICATION, 1.0),
        (schema::DEBTOR, 0.0),
        (schema::TUITION_FEES_UP_TO_DATE, 1.0),
        (schema::SCHOLARSHIP_HOLDER, 0.0),
        (schema::INTERNATIONAL, 0.0),
        (schema::EDUCATIONAL_SPECIAL_NEEDS, 0.0),
        (schema::UNEMPLOYMENT_RATE, 10.8),
        (schema::INFLATION_RATE, 1.4),
        (schema::GDP, 1.74),
    ]
}

fn raw_table() -> Table {
    let mut t = Table::new(1);
    for (name, value) in base_record() {
        t.set_column(name, vec![Some(value)]);
    }
    t
}

#[test]
fn scenario_a_engineered_values() {
    let out = engineer(&raw_table()).unwrap();
    assert_eq!(out.get(schema::APPROVED_RATIO_SEM1, 0), Some(0.5));
    assert_eq!(out.get(schema::APPROVED_RATIO_SEM2, 0), Some(0.8));
    assert_eq!(out.get(schema::GRADE_CHANGE_SEM1_TO_2, 0), Some(1.5));
    assert_eq!(out.get(schema::TOTAL_APPROVED_UNITS, 0), Some(7.0));
    assert_eq!(out.get(schema::TOTAL_ENROLLED_UNITS, 0), Some(11.0));
    assert_eq!(out.get(schema::AVG_GRADE_SEM1, 0), Some(12.5));
    assert_eq!(out.get(schema::AVG_GRADE_SEM2, 0), Some(14.0));
}

#[test]
fn scenario_b_zero_enrolled_gives_zero_ratio() {
    let mut t = raw_table();
    t.set_column(schema::UNITS_1ST_SEM_ENROLLED, vec![Some(0.0)]);
    let out = engineer(&t).unwrap();
    assert_eq!(out.get(schema::APPROVED_RATIO_SEM1, 0), Some(0.0));
    // other semester is unaffected
    assert_eq!(out.get(schema::APPROVED_RATIO_SEM2, 0), Some(0.8));
}

#[test]
fn grade_change_is_exact_difference() {
    let mut t = raw_table();
    t.set_column(schema::UNITS_1ST_SEM_GRADE, vec![Some(11.25)]);
    t.set_column(schema::UNITS_2ND_SEM_GRADE, vec![Some(9.75)]);
    let out = engineer(&t).unwrap();
    assert_eq!(out.get(schema::GRADE_CHANGE_SEM1_TO_2, 0), Some(-1.5));
}

#[test]
fn output_order_is_schema_order_regardless_of_input_order() {
    // build the same record with columns inserted in reverse
    let mut t = Table::new(1);
    for (name, value) in base_record().into_iter().rev() {
        t.set_column(name, vec![Some(value)]);
    }
    let out = engineer(&t).unwrap();
    let names: Vec<&str> = out.column_names().collect();
    assert_eq!(names, schema::all_features());
}

#[test]
fn missing_raw_column_fails_naming_it() {
    let mut t = Table::new(1);
    for (name, value) in base_record() {
        if name != schema::GDP {
            t.set_column(name, vec![Some(value)]);
        }
    }
    match engineer(&t) {
        Err(PredictorError::SchemaMismatch { missing }) => {
            assert_eq!(missing, vec![schema::GDP.to_string()]);
        }
        other => panic!("expected SchemaMismatch, got {other:?}"),
    }
}

#[test]
fn multiple_missing_columns_are_all_reported() {
    let mut t = Table::new(1);
    for (name, value) in base_record() {
        if name != schema::DEBTOR && name != schema::GENDER {
            t.set_column(name, vec![Some(value)]);
        }
    }
    match engineer(&t) {
        Err(PredictorError::SchemaMismatch { missing }) => {
            assert!(missing.contains(&schema::GENDER.to_string()));
            assert!(missing.contains(&schema::DEBTOR.to_string()));
            assert_eq!(missing.len(), 2);
        }
        other => panic!("expected SchemaMismatch, got {other:?}"),
    }
}

// A missing cell (column present, value absent) exercises the coercion
// asymmetry: ratios and the grade delta finalize to 0, the unit totals
// keep the missing value uncoerced.
#[test]
fn missing_cell_fill_asymmetry() {
    let mut t = raw_table();
    t.set_column(schema::UNITS_1ST_SEM_APPROVED, vec![None]);
    let out = engineer(&t).unwrap();
    assert_eq!(out.get(schema::APPROVED_RATIO_SEM1, 0), Some(0.0));
    assert_eq!(out.get(schema::TOTAL_APPROVED_UNITS, 0), None);
    // the raw cell itself is still missing in the aligned output
    assert_eq!(out.get(schema::UNITS_1ST_SEM_APPROVED, 0), None);
}

#[test]
fn engineer_is_all_rows_at_once() {
    let mut t = Table::new(2);
    for (name, value) in base_record() {
        t.set_column(name, vec![Some(value), Some(value)]);
    }
    t.set_column(schema::UNITS_1ST_SEM_ENROLLED, vec![Some(6.0), Some(0.0)]);
    let out = engineer(&t).unwrap();
    assert_eq!(out.n_rows(), 2);
    assert_eq!(out.get(schema::APPROVED_RATIO_SEM1, 0), Some(0.5));
    assert_eq!(out.get(schema::APPROVED_RATIO_SEM1, 1), Some(0.0));
}
