//! Application controller: owns the store connection and runs the
//! read-regenerate-reconcile cycle around the pure schedule engine.
//!
//! The engine functions only ever see caller-owned collections; this is
//! the one place that touches the database. The working dose list itself
//! stays with the caller (the UI layer), which hands it back on every
//! mutation — mirroring the single-threaded event loop the app runs in.

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use std::path::Path;
use uuid::Uuid;

use crate::adherence::{compute_adherence, AdherenceStats};
use crate::db::repository::{
    fetch_dose_history, fetch_doses_for_date, fetch_medications, fetch_vitals,
    insert_vital, replace_medications, upsert_dose,
};
use crate::db::{open_database, DatabaseError};
use crate::models::dose::DoseInstance;
use crate::models::extraction::ExtractionResult;
use crate::models::medication::Medication;
use crate::models::vital::VitalRecord;
use crate::schedule::{generate_doses, reconcile, toggle_dose_status};

pub struct MedicationTracker {
    conn: Connection,
}

impl MedicationTracker {
    /// Open (and migrate) the store at `path`.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        Ok(Self {
            conn: open_database(path)?,
        })
    }

    /// Wrap an already-open connection (tests use an in-memory one).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Build today's working schedule: regenerate from the stored
    /// medication list and reconcile against persisted history for the
    /// date, so doses already acted on come back with their status.
    pub fn load_schedule(&self, today: NaiveDate) -> Result<Vec<DoseInstance>, DatabaseError> {
        let medications = fetch_medications(&self.conn)?;
        let fresh = generate_doses(&medications, today);
        let history = fetch_doses_for_date(&self.conn, today)?;
        Ok(reconcile(fresh, &history))
    }

    /// Append newly scanned or manually entered medications, persist the
    /// list, and rebuild the schedule against the current working list.
    pub fn add_medications(
        &self,
        new_meds: Vec<Medication>,
        working: &[DoseInstance],
        today: NaiveDate,
    ) -> Result<(Vec<Medication>, Vec<DoseInstance>), DatabaseError> {
        let mut medications = fetch_medications(&self.conn)?;
        medications.extend(new_meds);
        replace_medications(&self.conn, &medications)?;
        tracing::info!("Medication list now has {} entries", medications.len());

        let merged = reconcile(generate_doses(&medications, today), working);
        Ok((medications, merged))
    }

    /// Apply an edit to one medication (matched by id), persist, and
    /// rebuild the schedule. Display fields on already-acted slots
    /// refresh; their status survives.
    pub fn update_medication(
        &self,
        updated: Medication,
        working: &[DoseInstance],
        today: NaiveDate,
    ) -> Result<(Vec<Medication>, Vec<DoseInstance>), DatabaseError> {
        let mut medications = fetch_medications(&self.conn)?;
        let Some(slot) = medications.iter_mut().find(|m| m.id == updated.id) else {
            return Err(DatabaseError::NotFound {
                entity_type: "medication".into(),
                id: updated.id.to_string(),
            });
        };
        *slot = updated;
        replace_medications(&self.conn, &medications)?;

        let merged = reconcile(generate_doses(&medications, today), working);
        Ok((medications, merged))
    }

    /// Toggle a dose in the working list and persist the change to the
    /// history log. Returns the updated instance, or `None` when the id
    /// is not in the list. The caller clears any reminder it surfaced
    /// for this dose.
    pub fn toggle_dose(
        &self,
        working: &mut [DoseInstance],
        id: Uuid,
        now: NaiveDateTime,
    ) -> Result<Option<DoseInstance>, DatabaseError> {
        let Some(updated) = toggle_dose_status(working, id, now) else {
            return Ok(None);
        };
        upsert_dose(&self.conn, &updated)?;
        tracing::debug!("Dose {} -> {}", updated.id, updated.status.as_str());
        Ok(Some(updated))
    }

    /// Ingest an AI extraction result: medications join the list, vitals
    /// are recorded as-is (already classified at construction).
    pub fn ingest_extraction(
        &self,
        result: ExtractionResult,
        working: &[DoseInstance],
        today: NaiveDate,
    ) -> Result<(Vec<Medication>, Vec<DoseInstance>), DatabaseError> {
        for vital in &result.vitals {
            insert_vital(&self.conn, vital)?;
        }
        self.add_medications(result.medications, working, today)
    }

    pub fn record_vital(&self, vital: &VitalRecord) -> Result<(), DatabaseError> {
        insert_vital(&self.conn, vital)
    }

    pub fn medications(&self) -> Result<Vec<Medication>, DatabaseError> {
        fetch_medications(&self.conn)
    }

    pub fn vitals(&self) -> Result<Vec<VitalRecord>, DatabaseError> {
        fetch_vitals(&self.conn)
    }

    /// Adherence over the trailing window, computed from the full
    /// persisted history.
    pub fn adherence(&self, today: NaiveDate, days: u64) -> Result<AdherenceStats, DatabaseError> {
        let history = fetch_dose_history(&self.conn)?;
        Ok(compute_adherence(&history, today, days))
    }

    /// Adherence over the standard one-week window.
    pub fn adherence_summary(&self, today: NaiveDate) -> Result<AdherenceStats, DatabaseError> {
        self.adherence(today, crate::config::DEFAULT_ADHERENCE_WINDOW_DAYS)
    }
}
