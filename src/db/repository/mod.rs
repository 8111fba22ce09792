//! Row mapping between the store and the model types.
//!
//! All repository functions take a borrowed `Connection`; the engine
//! modules never see one. Rows that fail enum or timestamp parsing
//! surface as `DatabaseError`, not panics.

pub mod dose_history;
pub mod medication;
pub mod vital;

pub use dose_history::{fetch_dose_history, fetch_doses_for_date, upsert_dose};
pub use medication::{fetch_medications, insert_medication, replace_medications};
pub use vital::{fetch_vitals, insert_vital};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::DatabaseError;

pub(crate) const DATE_FMT: &str = "%Y-%m-%d";
pub(crate) const TIME_FMT: &str = "%H:%M";
pub(crate) const DATETIME_FMT: &str = "%Y-%m-%dT%H:%M:%S";

pub(crate) fn parse_date(field: &str, value: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(value, DATE_FMT).map_err(|_| DatabaseError::InvalidTimestamp {
        field: field.into(),
        value: value.into(),
    })
}

pub(crate) fn parse_time(field: &str, value: &str) -> Result<NaiveTime, DatabaseError> {
    NaiveTime::parse_from_str(value, TIME_FMT).map_err(|_| DatabaseError::InvalidTimestamp {
        field: field.into(),
        value: value.into(),
    })
}

pub(crate) fn parse_datetime(field: &str, value: &str) -> Result<NaiveDateTime, DatabaseError> {
    NaiveDateTime::parse_from_str(value, DATETIME_FMT).map_err(|_| {
        DatabaseError::InvalidTimestamp {
            field: field.into(),
            value: value.into(),
        }
    })
}
