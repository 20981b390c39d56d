//! Feature engineering: raw academic counts and grades in, the exact
//! 42-column pipeline input out.
//!
//! The transform is pure and all-or-nothing: every row of the input
//! shares the same column set, so a structural problem fails the whole
//! table with one `SchemaMismatch` listing every absent column.

use crate::error::{PredictorError, Result};
use crate::schema;
use crate::table::Table;

/// Columns whose missing values are finalized to 0 before scoring. The
/// averages and the two unit totals deliberately keep missing uncoerced;
/// the trained pipeline was built against that exact behavior, lopsided
/// as it is.
const ZERO_FILLED: &[&str] = &[
    schema::APPROVED_RATIO_SEM1,
    schema::APPROVED_RATIO_SEM2,
    schema::GRADE_CHANGE_SEM1_TO_2,
];

/// Compute the engineered columns and align the result to the schema.
///
/// Each engineered group is computed only when all of its raw
/// dependencies exist as columns; otherwise the whole engineered column
/// is missing (absent engineered *inputs* never fail the transform,
/// only absent *schema* columns in the final projection do). Within a
/// present group, missing cells propagate per row, and a zero enrolled
/// count makes the semester's ratio missing rather than infinite.
pub fn engineer(input: &Table) -> Result<Table> {
    let n = input.n_rows();
    let mut out = input.clone();

    // Semester grades feed both averages and the delta. "Average" here
    // is an identity copy of the per-semester grade; the name is a
    // historical artifact of the trained pipeline's schema.
    if input.has_column(schema::UNITS_1ST_SEM_GRADE) && input.has_column(schema::UNITS_2ND_SEM_GRADE)
    {
        let g1: Vec<Option<f64>> = (0..n).map(|r| input.get(schema::UNITS_1ST_SEM_GRADE, r)).collect();
        let g2: Vec<Option<f64>> = (0..n).map(|r| input.get(schema::UNITS_2ND_SEM_GRADE, r)).collect();
        let delta: Vec<Option<f64>> = g1
            .iter()
            .zip(&g2)
            .map(|(a, b)| match (a, b) {
                (Some(a), Some(b)) => Some(b - a),
                _ => None,
            })
            .collect();
        out.set_column(schema::AVG_GRADE_SEM1, g1);
        out.set_column(schema::AVG_GRADE_SEM2, g2);
        out.set_column(schema::GRADE_CHANGE_SEM1_TO_2, delta);
    } else {
        out.set_column(schema::AVG_GRADE_SEM1, vec![None; n]);
        out.set_column(schema::AVG_GRADE_SEM2, vec![None; n]);
        out.set_column(schema::GRADE_CHANGE_SEM1_TO_2, vec![None; n]);
    }

    let ratio = |approved: &str, enrolled: &str| -> Vec<Option<f64>> {
        if !input.has_column(approved) || !input.has_column(enrolled) {
            return vec![None; n];
        }
        (0..n)
            .map(|r| match (input.get(approved, r), input.get(enrolled, r)) {
                // Zero enrolled units: the denominator is treated as
                // missing, not a division by zero.
                (Some(_), Some(e)) if e == 0.0 => None,
                (Some(a), Some(e)) => Some(a / e),
                _ => None,
            })
            .collect()
    };
    let sum = |first: &str, second: &str| -> Vec<Option<f64>> {
        if !input.has_column(first) || !input.has_column(second) {
            return vec![None; n];
        }
        (0..n)
            .map(|r| match (input.get(first, r), input.get(second, r)) {
                (Some(a), Some(b)) => Some(a + b),
                _ => None,
            })
            .collect()
    };

    let ratio_sem1 = ratio(schema::UNITS_1ST_SEM_APPROVED, schema::UNITS_1ST_SEM_ENROLLED);
    out.set_column(schema::APPROVED_RATIO_SEM1, ratio_sem1);
    let ratio_sem2 = ratio(schema::UNITS_2ND_SEM_APPROVED, schema::UNITS_2ND_SEM_ENROLLED);
    out.set_column(schema::APPROVED_RATIO_SEM2, ratio_sem2);

    let total_approved = sum(schema::UNITS_1ST_SEM_APPROVED, schema::UNITS_2ND_SEM_APPROVED);
    out.set_column(schema::TOTAL_APPROVED_UNITS, total_approved);
    let total_enrolled = sum(schema::UNITS_1ST_SEM_ENROLLED, schema::UNITS_2ND_SEM_ENROLLED);
    out.set_column(schema::TOTAL_ENROLLED_UNITS, total_enrolled);

    for &name in ZERO_FILLED {
        let filled = out
            .column(name)
            .map(|col| col.iter().map(|v| v.or(Some(0.0))).collect::<Vec<_>>());
        if let Some(filled) = filled {
            out.set_column(name, filled);
        }
    }

    out.select(&schema::all_features())
        .map_err(|missing| PredictorError::SchemaMismatch { missing })
}

#[cfg(test)]
mod tests {
    use super::*;

    // A raw table with every schema column present, one row of benign
    // values, so individual tests only tweak what they care about.
    fn full_raw_row() -> Table {
        let mut t = Table::new(1);
        for name in schema::raw_features() {
            t.set_column(name, vec![Some(1.0)]);
        }
        t
    }

    #[test]
    fn ratio_uses_exact_division() {
        let mut t = full_raw_row();
        t.set_column(schema::UNITS_1ST_SEM_APPROVED, vec![Some(3.0)]);
        t.set_column(schema::UNITS_1ST_SEM_ENROLLED, vec![Some(6.0)]);
        let out = engineer(&t).unwrap();
        assert_eq!(out.get(schema::APPROVED_RATIO_SEM1, 0), Some(0.5));
    }

    #[test]
    fn zero_enrolled_yields_zero_ratio_not_error() {
        let mut t = full_raw_row();
        t.set_column(schema::UNITS_1ST_SEM_ENROLLED, vec![Some(0.0)]);
        let out = engineer(&t).unwrap();
        assert_eq!(out.get(schema::APPROVED_RATIO_SEM1, 0), Some(0.0));
    }

    #[test]
    fn missing_raw_column_is_schema_mismatch() {
        let mut t = Table::new(1);
        for name in schema::raw_features() {
            if name != schema::DEBTOR {
                t.set_column(name, vec![Some(0.0)]);
            }
        }
        match engineer(&t) {
            Err(PredictorError::SchemaMismatch { missing }) => {
                assert_eq!(missing, vec![schema::DEBTOR.to_string()]);
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn output_order_is_schema_order() {
        let out = engineer(&full_raw_row()).unwrap();
        let names: Vec<&str> = out.column_names().collect();
        assert_eq!(names, schema::all_features());
    }
}
