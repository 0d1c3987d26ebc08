//! Regeneration sweep
//!
//! Batch re-render of every show whose regeneration flag is set. Failures
//! are isolated per record: a failing show is reported in its outcome and
//! keeps its flag, and the sweep moves on to the remaining shows.

use crate::error::RenderResult;
use crate::render::ShowDocumentRenderer;
use std::path::PathBuf;

/// Result of one record in a sweep
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub id: String,
    /// Output path on success, failure description otherwise
    pub outcome: Result<PathBuf, String>,
}

impl SweepOutcome {
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl ShowDocumentRenderer {
    /// Render every record whose regeneration flag is set
    ///
    /// Records are processed in catalog order. A successful render clears
    /// that record's flag; a failed one retains it and is re-attempted on
    /// the next sweep.
    ///
    /// # Errors
    /// Fails only if the record catalog itself cannot be listed; per-record
    /// failures are reported in the outcomes.
    pub async fn sweep_pending_renders(&self) -> RenderResult<Vec<SweepOutcome>> {
        let records = self.records().get_all().await?;
        let pending: Vec<_> = records
            .into_iter()
            .filter(|r| r.needs_regeneration)
            .collect();
        tracing::info!(pending = pending.len(), "sweeping pending renders");

        let mut outcomes = Vec::with_capacity(pending.len());
        for record in pending {
            let outcome = match self.render_show_document(&record.id).await {
                Ok(path) => Ok(path),
                Err(e) => {
                    tracing::error!(show_id = %record.id, error = %e, "sweep render failed");
                    Err(e.to_string())
                }
            };
            outcomes.push(SweepOutcome {
                id: record.id,
                outcome,
            });
        }

        Ok(outcomes)
    }
}
