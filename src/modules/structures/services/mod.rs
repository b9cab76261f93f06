pub mod bulk_reconciler;
pub mod structure_calculator;

pub use bulk_reconciler::{
    BulkReconciler, GrossImportRow, ReconcileOutcome, RejectReason, RejectedRow,
};
pub use structure_calculator::StructureCalculator;
