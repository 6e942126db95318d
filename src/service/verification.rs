//! Recording member verifications in the prefilled spreadsheet.

use crate::{
    error::AppError,
    model::verification::{SheetLayout, VerificationOutcome, VerifyUserParam},
    service::sheets::SheetStore,
};

pub struct VerificationService<S> {
    store: S,
    layout: SheetLayout,
}

impl<S: SheetStore> VerificationService<S> {
    pub fn new(store: S, layout: SheetLayout) -> Self {
        Self { store, layout }
    }

    /// Writes a verification record into the first unused sheet row.
    ///
    /// Reads the username column from the start row down, picks the first blank cell, and
    /// writes the five record fields across that row. Nothing is written when the returned
    /// range has no blank cell.
    ///
    /// Not idempotent: if the write succeeds but the response is lost, running this again
    /// appends a second record.
    ///
    /// # Arguments
    /// - `param` - Member, method, and optional social handle to record
    ///
    /// # Returns
    /// - `Ok(VerificationOutcome::Recorded { row })` - Record written to `row`
    /// - `Ok(VerificationOutcome::NoEmptyRow)` - No blank row in the scanned range
    /// - `Err(AppError::SheetsErr)` - Authentication, read, or write failed
    pub async fn record(&self, param: VerifyUserParam) -> Result<VerificationOutcome, AppError> {
        let rows = self.store.read_range(&self.layout.scan_range()).await?;

        let Some(row) = self.layout.first_blank_row(&rows) else {
            tracing::warn!(
                "No empty row in {} ({} rows scanned)",
                self.layout.scan_range(),
                rows.len()
            );
            return Ok(VerificationOutcome::NoEmptyRow);
        };

        let discord_id = param.discord_id;
        self.store
            .write_row(&self.layout.write_range(row), param.into_row())
            .await?;

        tracing::info!("Recorded verification for {} in row {}", discord_id, row);

        Ok(VerificationOutcome::Recorded { row })
    }
}
