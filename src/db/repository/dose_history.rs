//! Dose history — the append/update-only log of schedule slots the user
//! has acted on (or that were flushed from a working schedule).

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{parse_date, parse_datetime, parse_time, DATETIME_FMT, DATE_FMT, TIME_FMT};
use crate::db::DatabaseError;
use crate::models::dose::DoseInstance;

/// Insert a dose row, or update it in place when the row id already
/// exists (a status change on an existing slot).
pub fn upsert_dose(conn: &Connection, dose: &DoseInstance) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO dose_history (
            id, medication_id, medication_name, dosage, instructions,
            label, time, date, status, action_time
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
         ON CONFLICT(id) DO UPDATE SET
            medication_name = excluded.medication_name,
            dosage = excluded.dosage,
            instructions = excluded.instructions,
            label = excluded.label,
            time = excluded.time,
            date = excluded.date,
            status = excluded.status,
            action_time = excluded.action_time",
        params![
            dose.id.to_string(),
            dose.medication_id.to_string(),
            dose.medication_name,
            dose.dosage,
            dose.instructions,
            dose.label.as_str(),
            dose.time.format(TIME_FMT).to_string(),
            dose.date.format(DATE_FMT).to_string(),
            dose.status.as_str(),
            dose.action_time.map(|t| t.format(DATETIME_FMT).to_string()),
        ],
    )?;
    Ok(())
}

/// Fetch the full dose history, oldest date first, then by slot time.
pub fn fetch_dose_history(conn: &Connection) -> Result<Vec<DoseInstance>, DatabaseError> {
    fetch_where(conn, None)
}

/// Fetch the recorded doses for one date, ordered by slot time.
pub fn fetch_doses_for_date(
    conn: &Connection,
    date: NaiveDate,
) -> Result<Vec<DoseInstance>, DatabaseError> {
    fetch_where(conn, Some(date))
}

/// Raw row shape; parsed into the model outside the rusqlite closure so
/// enum and timestamp failures map to `DatabaseError` cleanly.
struct DoseRow {
    id: String,
    medication_id: String,
    medication_name: String,
    dosage: String,
    instructions: String,
    label: String,
    time: String,
    date: String,
    status: String,
    action_time: Option<String>,
}

fn fetch_where(
    conn: &Connection,
    date: Option<NaiveDate>,
) -> Result<Vec<DoseInstance>, DatabaseError> {
    let mut sql = String::from(
        "SELECT id, medication_id, medication_name, dosage, instructions,
                label, time, date, status, action_time
         FROM dose_history",
    );
    let mut bind: Vec<String> = Vec::new();
    if let Some(date) = date {
        sql.push_str(" WHERE date = ?1");
        bind.push(date.format(DATE_FMT).to_string());
    }
    sql.push_str(" ORDER BY date ASC, time ASC");

    let mut stmt = conn.prepare(&sql)?;
    let bind_refs: Vec<&dyn rusqlite::types::ToSql> =
        bind.iter().map(|s| s as &dyn rusqlite::types::ToSql).collect();

    let rows = stmt
        .query_map(bind_refs.as_slice(), |row| {
            Ok(DoseRow {
                id: row.get(0)?,
                medication_id: row.get(1)?,
                medication_name: row.get(2)?,
                dosage: row.get(3)?,
                instructions: row.get(4)?,
                label: row.get(5)?,
                time: row.get(6)?,
                date: row.get(7)?,
                status: row.get(8)?,
                action_time: row.get(9)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter().map(parse_dose_row).collect()
}

fn parse_dose_row(row: DoseRow) -> Result<DoseInstance, DatabaseError> {
    Ok(DoseInstance {
        id: row.id.parse().unwrap_or_else(|_| Uuid::nil()),
        medication_id: row
            .medication_id
            .parse()
            .unwrap_or_else(|_| Uuid::nil()),
        medication_name: row.medication_name,
        dosage: row.dosage,
        instructions: row.instructions,
        label: row.label.parse()?,
        time: parse_time("time", &row.time)?,
        date: parse_date("date", &row.date)?,
        status: row.status.parse()?,
        action_time: row
            .action_time
            .map(|t| parse_datetime("action_time", &t))
            .transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;
    use crate::models::enums::{DoseStatus, TimeOfDay};
    use crate::models::medication::Medication;
    use crate::schedule::generator::generate_doses;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn sample_doses(date: NaiveDate) -> Vec<DoseInstance> {
        let meds = vec![Medication::new(
            "Metformin",
            "500mg",
            "Twice daily",
            "With food",
            vec![TimeOfDay::Morning, TimeOfDay::Evening],
        )];
        generate_doses(&meds, date)
    }

    #[test]
    fn upsert_then_fetch_round_trips() {
        let conn = open_memory_database().unwrap();
        let mut doses = sample_doses(today());
        doses[0].status = DoseStatus::Taken;
        doses[0].action_time = today().and_hms_opt(8, 3, 0);

        for dose in &doses {
            upsert_dose(&conn, dose).unwrap();
        }

        let stored = fetch_doses_for_date(&conn, today()).unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].status, DoseStatus::Taken);
        assert_eq!(stored[0].action_time, today().and_hms_opt(8, 3, 0));
        assert_eq!(stored[0].label, TimeOfDay::Morning);
        assert_eq!(stored[0].slot_key(), doses[0].slot_key());
    }

    #[test]
    fn upsert_updates_in_place() {
        let conn = open_memory_database().unwrap();
        let mut dose = sample_doses(today()).remove(0);
        upsert_dose(&conn, &dose).unwrap();

        dose.status = DoseStatus::Taken;
        dose.action_time = today().and_hms_opt(8, 10, 0);
        upsert_dose(&conn, &dose).unwrap();

        let stored = fetch_dose_history(&conn).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].status, DoseStatus::Taken);
    }

    #[test]
    fn fetch_for_date_filters_other_days() {
        let conn = open_memory_database().unwrap();
        let yesterday = today().pred_opt().unwrap();

        for dose in sample_doses(today()).iter().chain(sample_doses(yesterday).iter()) {
            upsert_dose(&conn, dose).unwrap();
        }

        let stored = fetch_doses_for_date(&conn, today()).unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|d| d.date == today()));

        let all = fetch_dose_history(&conn).unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].date, yesterday);
    }

    #[test]
    fn malformed_status_surfaces_as_invalid_enum() {
        let conn = open_memory_database().unwrap();
        conn.execute(
            "INSERT INTO dose_history (id, medication_id, medication_name, dosage,
             instructions, label, time, date, status, action_time)
             VALUES ('d1', 'm1', 'Metformin', '500mg', '', 'Morning',
                     '08:00', '2025-06-01', 'not-a-status', NULL)",
            [],
        )
        .unwrap();

        let err = fetch_dose_history(&conn).unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidEnum { .. }));
    }

    #[test]
    fn malformed_time_surfaces_as_invalid_timestamp() {
        let conn = open_memory_database().unwrap();
        conn.execute(
            "INSERT INTO dose_history (id, medication_id, medication_name, dosage,
             instructions, label, time, date, status, action_time)
             VALUES ('d1', 'm1', 'Metformin', '500mg', '', 'Morning',
                     'eight', '2025-06-01', 'pending', NULL)",
            [],
        )
        .unwrap();

        let err = fetch_dose_history(&conn).unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidTimestamp { .. }));
    }

    #[test]
    fn empty_history_fetches_empty() {
        let conn = open_memory_database().unwrap();
        assert!(fetch_dose_history(&conn).unwrap().is_empty());
        assert!(fetch_doses_for_date(&conn, today()).unwrap().is_empty());
    }
}
