//! The ordered feature schema expected by the trained pipeline.
//!
//! The ordering is load-bearing: the pipeline artifact was trained against
//! exactly this column arrangement, and reordering it without retraining
//! silently swaps feature semantics. Nothing here may be shuffled.

// Academic performance, semesters 1 and 2.
pub const PREVIOUS_QUALIFICATION_GRADE: &str = "Previous_qualification_grade";
pub const ADMISSION_GRADE: &str = "Admission_grade";
pub const UNITS_1ST_SEM_CREDITED: &str = "Curricular_units_1st_sem_credited";
pub const UNITS_1ST_SEM_ENROLLED: &str = "Curricular_units_1st_sem_enrolled";
pub const UNITS_1ST_SEM_EVALUATIONS: &str = "Curricular_units_1st_sem_evaluations";
pub const UNITS_1ST_SEM_APPROVED: &str = "Curricular_units_1st_sem_approved";
pub const UNITS_1ST_SEM_GRADE: &str = "Curricular_units_1st_sem_grade";
pub const UNITS_1ST_SEM_WITHOUT_EVALUATIONS: &str = "Curricular_units_1st_sem_without_evaluations";
pub const UNITS_2ND_SEM_CREDITED: &str = "Curricular_units_2nd_sem_credited";
pub const UNITS_2ND_SEM_ENROLLED: &str = "Curricular_units_2nd_sem_enrolled";
pub const UNITS_2ND_SEM_EVALUATIONS: &str = "Curricular_units_2nd_sem_evaluations";
pub const UNITS_2ND_SEM_APPROVED: &str = "Curricular_units_2nd_sem_approved";
pub const UNITS_2ND_SEM_GRADE: &str = "Curricular_units_2nd_sem_grade";
pub const UNITS_2ND_SEM_WITHOUT_EVALUATIONS: &str = "Curricular_units_2nd_sem_without_evaluations";

// Personal and background. "Nacionality" is the wire name used when the
// pipeline was trained; the spelling must not be corrected.
pub const AGE_AT_ENROLLMENT: &str = "Age_at_enrollment";
pub const MARITAL_STATUS: &str = "Marital_status";
pub const NACIONALITY: &str = "Nacionality";
pub const MOTHERS_QUALIFICATION: &str = "Mothers_qualification";
pub const FATHERS_QUALIFICATION: &str = "Fathers_qualification";
pub const MOTHERS_OCCUPATION: &str = "Mothers_occupation";
pub const FATHERS_OCCUPATION: &str = "Fathers_occupation";
pub const GENDER: &str = "Gender";
pub const DISPLACED: &str = "Displaced";

// Enrollment and financial.
pub const APPLICATION_MODE: &str = "Application_mode";
pub const COURSE: &str = "Course";
pub const DAYTIME_EVENING_ATTENDANCE: &str = "Daytime_evening_attendance";
pub const PREVIOUS_QUALIFICATION: &str = "Previous_qualification";
pub const DEBTOR: &str = "Debtor";
pub const TUITION_FEES_UP_TO_DATE: &str = "Tuition_fees_up_to_date";
pub const SCHOLARSHIP_HOLDER: &str = "Scholarship_holder";
pub const INTERNATIONAL: &str = "International";
pub const EDUCATIONAL_SPECIAL_NEEDS: &str = "Educational_special_needs";

// External economic indicators.
pub const UNEMPLOYMENT_RATE: &str = "Unemployment_rate";
pub const INFLATION_RATE: &str = "Inflation_rate";
pub const GDP: &str = "GDP";

// Engineered features, computed by the transform and appended after the
// raw groups.
pub const AVG_GRADE_SEM1: &str = "Avg_Grade_Sem1";
pub const AVG_GRADE_SEM2: &str = "Avg_Grade_Sem2";
pub const APPROVED_RATIO_SEM1: &str = "Approved_Ratio_Sem1";
pub const APPROVED_RATIO_SEM2: &str = "Approved_Ratio_Sem2";
pub const GRADE_CHANGE_SEM1_TO_2: &str = "Grade_Change_Sem1_to_2";
pub const TOTAL_APPROVED_UNITS: &str = "Total_Approved_Units";
pub const TOTAL_ENROLLED_UNITS: &str = "Total_Enrolled_Units";

pub const ACADEMIC_FEATURES: &[&str] = &[
    PREVIOUS_QUALIFICATION_GRADE,
    ADMISSION_GRADE,
    UNITS_1ST_SEM_CREDITED,
    UNITS_1ST_SEM_ENROLLED,
    UNITS_1ST_SEM_EVALUATIONS,
    UNITS_1ST_SEM_APPROVED,
    UNITS_1ST_SEM_GRADE,
    UNITS_1ST_SEM_WITHOUT_EVALUATIONS,
    UNITS_2ND_SEM_CREDITED,
    UNITS_2ND_SEM_ENROLLED,
    UNITS_2ND_SEM_EVALUATIONS,
    UNITS_2ND_SEM_APPROVED,
    UNITS_2ND_SEM_GRADE,
    UNITS_2ND_SEM_WITHOUT_EVALUATIONS,
];

pub const PERSONAL_BACKGROUND_FEATURES: &[&str] = &[
    AGE_AT_ENROLLMENT,
    MARITAL_STATUS,
    NACIONALITY,
    MOTHERS_QUALIFICATION,
    FATHERS_QUALIFICATION,
    MOTHERS_OCCUPATION,
    FATHERS_OCCUPATION,
    GENDER,
    DISPLACED,
];

pub const ENROLLMENT_FINANCIAL_FEATURES: &[&str] = &[
    APPLICATION_MODE,
    COURSE,
    DAYTIME_EVENING_ATTENDANCE,
    PREVIOUS_QUALIFICATION,
    DEBTOR,
    TUITION_FEES_UP_TO_DATE,
    SCHOLARSHIP_HOLDER,
    INTERNATIONAL,
    EDUCATIONAL_SPECIAL_NEEDS,
];

pub const EXTERNAL_FEATURES: &[&str] = &[UNEMPLOYMENT_RATE, INFLATION_RATE, GDP];

pub const ENGINEERED_FEATURES: &[&str] = &[
    AVG_GRADE_SEM1,
    AVG_GRADE_SEM2,
    APPROVED_RATIO_SEM1,
    APPROVED_RATIO_SEM2,
    GRADE_CHANGE_SEM1_TO_2,
    TOTAL_APPROVED_UNITS,
    TOTAL_ENROLLED_UNITS,
];

/// Raw (user-supplied) features: the four groups in their fixed sequence.
pub fn raw_features() -> Vec<&'static str> {
    ACADEMIC_FEATURES
        .iter()
        .chain(PERSONAL_BACKGROUND_FEATURES)
        .chain(ENROLLMENT_FINANCIAL_FEATURES)
        .chain(EXTERNAL_FEATURES)
        .copied()
        .collect()
}

/// The full pipeline input: raw groups followed by the engineered features.
pub fn all_features() -> Vec<&'static str> {
    let mut features = raw_features();
    features.extend_from_slice(ENGINEERED_FEATURES);
    features
}
