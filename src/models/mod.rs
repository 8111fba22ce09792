pub mod dose;
pub mod enums;
pub mod extraction;
pub mod medication;
pub mod vital;

pub use dose::DoseInstance;
pub use enums::{DoseStatus, TimeOfDay, VitalSource, VitalStatus, VitalType};
pub use extraction::ExtractionResult;
pub use medication::Medication;
pub use vital::VitalRecord;
