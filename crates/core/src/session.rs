//! Stale-load guarding for patient selection.
//!
//! Selecting a different patient triggers a fresh, independent load, and
//! nothing cancels a load already in flight. Without a guard, a slow load
//! for patient A can resolve after a later load for patient B and clobber
//! the display with stale data. [`LoadSession`] closes that race: every
//! load is stamped with a monotonically increasing generation, and a result
//! whose generation is no longer current is discarded on arrival. The
//! in-flight fetches themselves are not cancelled - only their result is
//! dropped.

use std::sync::atomic::{AtomicU64, Ordering};

use cra_types::{PatientDataComplete, PatientMetadata};

use crate::loader::PatientDataService;

/// Generation counter owned by whatever drives a patient selection.
#[derive(Debug, Default)]
pub struct LoadSession {
    generation: AtomicU64,
}

/// Stamp for one load request. Stale once a newer ticket has been issued.
#[derive(Debug)]
pub struct LoadTicket<'a> {
    session: &'a LoadSession,
    generation: u64,
}

impl LoadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a new load, invalidating all earlier tickets.
    pub fn begin(&self) -> LoadTicket<'_> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket {
            session: self,
            generation,
        }
    }

    fn current(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Loads a patient's record, discarding the result if a newer load began
    /// while this one was in flight.
    pub async fn load_latest(
        &self,
        service: &PatientDataService,
        patient: &PatientMetadata,
    ) -> Option<PatientDataComplete> {
        let ticket = self.begin();
        let data = service
            .load_patient_data(&patient.patient_id, &patient.folder_path)
            .await;

        if ticket.is_stale() {
            tracing::debug!(
                "discarding stale load for {} (generation {})",
                patient.patient_id,
                ticket.generation()
            );
            return None;
        }

        data
    }
}

impl LoadTicket<'_> {
    /// Whether a newer ticket has been issued since this one.
    pub fn is_stale(&self) -> bool {
        self.session.current() != self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
