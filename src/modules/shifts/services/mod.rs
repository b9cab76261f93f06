pub mod shift_importer;

pub use shift_importer::{ShiftImportOutcome, ShiftImporter, ShiftRejectedRow};
