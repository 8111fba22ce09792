use serde::{Deserialize, Serialize};

use super::medication::Medication;
use super::vital::VitalRecord;

/// Typed result of the external AI prescription-image extraction.
///
/// The extraction service itself (vision model call, retries, prompt
/// handling) lives outside this crate; callers deserialize its response
/// into this shape and hand the collections to the tracker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub medications: Vec<Medication>,
    pub vitals: Vec<VitalRecord>,
}
