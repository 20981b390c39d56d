//! Student dropout predictor.
//!
//! Collects raw student-record fields (manual form or CSV upload),
//! derives the engineered features, aligns the result to the trained
//! pipeline's 42-column schema, and scores it for a dropout /
//! non-dropout prediction with class probabilities.

pub mod dictionaries;
pub mod error;
pub mod features;
pub mod input;
pub mod model;
pub mod schema;
pub mod table;
