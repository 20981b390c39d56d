//! Input acquisition: the manual form adapter, the bulk CSV adapter,
//! the downloadable CSV template, and the prediction-result export.

use serde::Deserialize;

use crate::dictionaries::{self, Dictionary};
use crate::error::{PredictorError, Result};
use crate::model::Prediction;
use crate::schema;
use crate::table::Table;

/// The manual form submission: one value per raw schema field. Numeric
/// fields arrive as numbers; categorical fields arrive as the labels the
/// selectors show, and are reverse-mapped to codes here.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentForm {
    #[serde(rename = "Previous_qualification_grade")]
    pub previous_qualification_grade: f64,
    #[serde(rename = "Admission_grade")]
    pub admission_grade: f64,
    #[serde(rename = "Curricular_units_1st_sem_credited")]
    pub units_1st_sem_credited: u32,
    #[serde(rename = "Curricular_units_1st_sem_enrolled")]
    pub units_1st_sem_enrolled: u32,
    #[serde(rename = "Curricular_units_1st_sem_evaluations")]
    pub units_1st_sem_evaluations: u32,
    #[serde(rename = "Curricular_units_1st_sem_approved")]
    pub units_1st_sem_approved: u32,
    #[serde(rename = "Curricular_units_1st_sem_grade")]
    pub units_1st_sem_grade: f64,
    #[serde(rename = "Curricular_units_1st_sem_without_evaluations")]
    pub units_1st_sem_without_evaluations: u32,
    #[serde(rename = "Curricular_units_2nd_sem_credited")]
    pub units_2nd_sem_credited: u32,
    #[serde(rename = "Curricular_units_2nd_sem_enrolled")]
    pub units_2nd_sem_enrolled: u32,
    #[serde(rename = "Curricular_units_2nd_sem_evaluations")]
    pub units_2nd_sem_evaluations: u32,
    #[serde(rename = "Curricular_units_2nd_sem_approved")]
    pub units_2nd_sem_approved: u32,
    #[serde(rename = "Curricular_units_2nd_sem_grade")]
    pub units_2nd_sem_grade: f64,
    #[serde(rename = "Curricular_units_2nd_sem_without_evaluations")]
    pub units_2nd_sem_without_evaluations: u32,

    #[serde(rename = "Age_at_enrollment")]
    pub age_at_enrollment: u32,
    #[serde(rename = "Marital_status")]
    pub marital_status: String,
    #[serde(rename = "Nacionality")]
    pub nacionality: String,
    #[serde(rename = "Mothers_qualification")]
    pub mothers_qualification: String,
    #[serde(rename = "Fathers_qualification")]
    pub fathers_qualification: String,
    #[serde(rename = "Mothers_occupation")]
    pub mothers_occupation: String,
    #[serde(rename = "Fathers_occupation")]
    pub fathers_occupation: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Displaced")]
    pub displaced: String,

    #[serde(rename = "Application_mode")]
    pub application_mode: String,
    #[serde(rename = "Course")]
    pub course: String,
    #[serde(rename = "Daytime_evening_attendance")]
    pub daytime_evening_attendance: String,
    #[serde(rename = "Previous_qualification")]
    pub previous_qualification: String,
    #[serde(rename = "Debtor")]
    pub debtor: String,
    #[serde(rename = "Tuition_fees_up_to_date")]
    pub tuition_fees_up_to_date: String,
    #[serde(rename = "Scholarship_holder")]
    pub scholarship_holder: String,
    #[serde(rename = "International")]
    pub international: String,
    #[serde(rename = "Educational_special_needs")]
    pub educational_special_needs: String,

    #[serde(rename = "Unemployment_rate")]
    pub unemployment_rate: f64,
    #[serde(rename = "Inflation_rate")]
    pub inflation_rate: f64,
    #[serde(rename = "GDP")]
    pub gdp: f64,
}

fn code_for(dict: &Dictionary, label: &str) -> Result<f64> {
    dict.code(label)
        .map(|c| c as f64)
        .ok_or_else(|| PredictorError::UnknownLabel {
            feature: dict.feature.to_string(),
            label: label.to_string(),
        })
}

/// Assemble a one-row raw table from the form, in raw-schema order.
pub fn manual_table(form: &StudentForm) -> Result<Table> {
    let cells: Vec<(&str, f64)> = vec![
        (schema::PREVIOUS_QUALIFICATION_GRADE, form.previous_qualification_grade),
        (schema::ADMISSION_GRADE, form.admission_grade),
        (schema::UNITS_1ST_SEM_CREDITED, f64::from(form.units_1st_sem_credited)),
        (schema::UNITS_1ST_SEM_ENROLLED, f64::from(form.units_1st_sem_enrolled)),
        (schema::UNITS_1ST_SEM_EVALUATIONS, f64::from(form.units_1st_sem_evaluations)),
        (schema::UNITS_1ST_SEM_APPROVED, f64::from(form.units_1st_sem_approved)),
        (schema::UNITS_1ST_SEM_GRADE, form.units_1st_sem_grade),
        (
            schema::UNITS_1ST_SEM_WITHOUT_EVALUATIONS,
            f64::from(form.units_1st_sem_without_evaluations),
        ),
        (schema::UNITS_2ND_SEM_CREDITED, f64::from(form.units_2nd_sem_credited)),
        (schema::UNITS_2ND_SEM_ENROLLED, f64::from(form.units_2nd_sem_enrolled)),
        (schema::UNITS_2ND_SEM_EVALUATIONS, f64::from(form.units_2nd_sem_evaluations)),
        (schema::UNITS_2ND_SEM_APPROVED, f64::from(form.units_2nd_sem_approved)),
        (schema::UNITS_2ND_SEM_GRADE, form.units_2nd_sem_grade),
        (
            schema::UNITS_2ND_SEM_WITHOUT_EVALUATIONS,
            f64::from(form.units_2nd_sem_without_evaluations),
        ),
        (schema::AGE_AT_ENROLLMENT, f64::from(form.age_at_enrollment)),
        (schema::MARITAL_STATUS, code_for(&dictionaries::MARITAL_STATUS, &form.marital_status)?),
        (schema::NACIONALITY, code_for(&dictionaries::NACIONALITY, &form.nacionality)?),
        (
            schema::MOTHERS_QUALIFICATION,
            code_for(&dictionaries::MOTHERS_QUALIFICATION, &form.mothers_qualification)?,
        ),
        (
            schema::FATHERS_QUALIFICATION,
            code_for(&dictionaries::FATHERS_QUALIFICATION, &form.fathers_qualification)?,
        ),
        (
            schema::MOTHERS_OCCUPATION,
            code_for(&dictionaries::MOTHERS_OCCUPATION, &form.mothers_occupation)?,
        ),
        (
            schema::FATHERS_OCCUPATION,
            code_for(&dictionaries::FATHERS_OCCUPATION, &form.fathers_occupation)?,
        ),
        (schema::GENDER, code_for(&dictionaries::GENDER, &form.gender)?),
        (schema::DISPLACED, code_for(&dictionaries::DISPLACED, &form.displaced)?),
        (
            schema::APPLICATION_MODE,
            code_for(&dictionaries::APPLICATION_MODE, &form.application_mode)?,
        ),
        (schema::COURSE, code_for(&dictionaries::COURSE, &form.course)?),
        (
            schema::DAYTIME_EVENING_ATTENDANCE,
            code_for(&dictionaries::DAYTIME_EVENING_ATTENDANCE, &form.daytime_evening_attendance)?,
        ),
        (
            schema::PREVIOUS_QUALIFICATION,
            code_for(&dictionaries::PREVIOUS_QUALIFICATION, &form.previous_qualification)?,
        ),
        (schema::DEBTOR, code_for(&dictionaries::DEBTOR, &form.debtor)?),
        (
            schema::TUITION_FEES_UP_TO_DATE,
            code_for(&dictionaries::TUITION_FEES_UP_TO_DATE, &form.tuition_fees_up_to_date)?,
        ),
        (
            schema::SCHOLARSHIP_HOLDER,
            code_for(&dictionaries::SCHOLARSHIP_HOLDER, &form.scholarship_holder)?,
        ),
        (schema::INTERNATIONAL, code_for(&dictionaries::INTERNATIONAL, &form.international)?),
        (
            schema::EDUCATIONAL_SPECIAL_NEEDS,
            code_for(&dictionaries::EDUCATIONAL_SPECIAL_NEEDS, &form.educational_special_needs)?,
        ),
        (schema::UNEMPLOYMENT_RATE, form.unemployment_rate),
        (schema::INFLATION_RATE, form.inflation_rate),
        (schema::GDP, form.gdp),
    ];

    let mut table = Table::new(1);
    for (name, value) in cells {
        table.set_column(name, vec![Some(value)]);
    }
    Ok(table)
}

/// Parse an uploaded CSV into a raw table.
///
/// Header check first: all raw schema columns must be present
/// (`MissingHeaders` otherwise, listing every absent one), extra columns
/// are carried through and ignored by the later projection. A file with
/// headers but zero data rows is the recoverable `EmptyInput` condition.
/// Empty cells are missing; non-numeric cells are rejected.
pub fn bulk_table(csv_bytes: &[u8]) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(csv_bytes);
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let missing: Vec<String> = schema::raw_features()
        .iter()
        .filter(|&&name| !headers.iter().any(|h| h == name))
        .map(|&name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(PredictorError::MissingHeaders { missing });
    }

    let mut rows: Vec<Vec<Option<f64>>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row_idx = rows.len();
        let mut row = Vec::with_capacity(headers.len());
        for (col_idx, cell) in record.iter().enumerate() {
            let cell = cell.trim();
            if cell.is_empty() {
                row.push(None);
            } else {
                let value: f64 = cell.parse().map_err(|_| PredictorError::InvalidValue {
                    column: headers
                        .get(col_idx)
                        .cloned()
                        .unwrap_or_else(|| format!("#{col_idx}")),
                    row: row_idx,
                    value: cell.to_string(),
                })?;
                row.push(Some(value));
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(PredictorError::EmptyInput);
    }

    let mut table = Table::new(rows.len());
    for (i, name) in headers.iter().enumerate() {
        let column = rows.iter().map(|row| row.get(i).copied().flatten()).collect();
        table.set_column(name, column);
    }
    Ok(table)
}

/// The downloadable template: the full schema as a header row, no data.
pub fn template_csv() -> String {
    let mut header = schema::all_features().join(",");
    header.push('\n');
    header
}

/// Result export: the input columns plus the prediction columns, one
/// data row per input row. Missing cells export as empty fields.
pub fn results_csv(table: &Table, predictions: &[Prediction]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<String> = table.column_names().map(str::to_string).collect();
    header.extend([
        "Predicted_Is_Dropout".to_string(),
        "Probability_Non_Dropout".to_string(),
        "Probability_Dropout".to_string(),
        "Predicted_Status".to_string(),
    ]);
    writer.write_record(&header)?;

    for (i, prediction) in predictions.iter().enumerate() {
        let mut record: Vec<String> = table
            .row(i)
            .into_iter()
            .map(|cell| cell.map(format_cell).unwrap_or_default())
            .collect();
        record.push(prediction.predicted_is_dropout.to_string());
        record.push(prediction.probability_non_dropout.to_string());
        record.push(prediction.probability_dropout.to_string());
        record.push(prediction.predicted_status.to_string());
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PredictorError::Prediction(format!("could not assemble export: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| PredictorError::Prediction(format!("export was not UTF-8: {e}")))
}

/// Integers (codes and counts) export without a trailing ".0".
fn format_cell(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}
