//! Medication list persistence. The app edits the list as a whole (scan
//! results append, edits replace one entry), so the write path mirrors
//! that: a full-list replace in list order.

use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::enums::TimeOfDay;
use crate::models::medication::Medication;

/// Insert a single medication at the end of the list.
pub fn insert_medication(conn: &Connection, med: &Medication) -> Result<(), DatabaseError> {
    let times = serde_json::to_string(&med.times)?;
    conn.execute(
        "INSERT INTO medications (
            id, name, dosage, frequency, instructions, duration,
            times, color, category, general_use
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            med.id.to_string(),
            med.name,
            med.dosage,
            med.frequency,
            med.instructions,
            med.duration,
            times,
            med.color,
            med.category,
            med.general_use,
        ],
    )?;
    Ok(())
}

/// Replace the stored medication list with `medications`, in order.
///
/// Runs inside a transaction: a failed insert (e.g. a duplicate id in
/// the input) rolls back to the previously stored list.
pub fn replace_medications(
    conn: &Connection,
    medications: &[Medication],
) -> Result<(), DatabaseError> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM medications", [])?;
    for med in medications {
        insert_medication(&tx, med)?;
    }
    tx.commit()?;
    Ok(())
}

/// Fetch the medication list in stored (insertion) order.
pub fn fetch_medications(conn: &Connection) -> Result<Vec<Medication>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, dosage, frequency, instructions, duration,
                times, color, category, general_use
         FROM medications
         ORDER BY rowid ASC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, Option<String>>(5)?,
                row.get::<_, String>(6)?,
                row.get::<_, Option<String>>(7)?,
                row.get::<_, Option<String>>(8)?,
                row.get::<_, Option<String>>(9)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(
            |(id, name, dosage, frequency, instructions, duration, times, color, category, general_use)| {
                let times: Vec<TimeOfDay> = serde_json::from_str(&times)?;
                Ok(Medication {
                    id: id.parse().unwrap_or_else(|_| Uuid::nil()),
                    name,
                    dosage,
                    frequency,
                    instructions,
                    duration,
                    times,
                    color,
                    category,
                    general_use,
                })
            },
        )
        .collect()
}
