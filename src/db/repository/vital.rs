//! Vital-record persistence. Records are immutable: insert and fetch
//! only, newest first.

use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{parse_datetime, DATETIME_FMT};
use crate::db::DatabaseError;
use crate::models::vital::VitalRecord;

pub fn insert_vital(conn: &Connection, vital: &VitalRecord) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO vitals (id, vital_type, value, unit, recorded_at, status, source)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            vital.id.to_string(),
            vital.vital_type.as_str(),
            vital.value,
            vital.unit,
            vital.recorded_at.format(DATETIME_FMT).to_string(),
            vital.status.as_str(),
            vital.source.as_str(),
        ],
    )?;
    Ok(())
}

/// Fetch all vital records, most recent first.
pub fn fetch_vitals(conn: &Connection) -> Result<Vec<VitalRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, vital_type, value, unit, recorded_at, status, source
         FROM vitals
         ORDER BY recorded_at DESC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id, vital_type, value, unit, recorded_at, status, source)| {
            Ok(VitalRecord {
                id: id.parse().unwrap_or_else(|_| Uuid::nil()),
                vital_type: vital_type.parse()?,
                value,
                unit,
                recorded_at: parse_datetime("recorded_at", &recorded_at)?,
                status: status.parse()?,
                source: source.parse()?,
            })
        })
        .collect()
}
