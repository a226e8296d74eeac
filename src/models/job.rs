//! Job models: raw input records and normalized jobs.
//!
//! A [`JobRecord`] carries the duration fields exactly as the upstream
//! collaborator supplied them — unvalidated text. Normalization (see
//! `crate::normalize`) converts them to slot counts or rejects the
//! record with a categorized exclusion; a normalized [`Job`] is
//! immutable for the rest of the run.
//!
//! # Unit contract
//! Soak and rinse durations are **minutes**; the plating duration is
//! **hours**. This matches the upstream CSV schema and is fixed here
//! once — nothing else in the crate interprets raw units.

use serde::{Deserialize, Serialize};

/// A raw job record as supplied by the input collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    /// Unique job identifier.
    pub id: String,
    /// Process type the job requires (e.g. "Ni").
    pub process_type: String,
    /// Optional required tank subtype; empty/absent matches any tank.
    pub required_subtype: Option<String>,
    /// Raw soak duration, in minutes.
    pub soak_minutes: String,
    /// Raw plating duration, in hours.
    pub plating_hours: String,
    /// Raw rinse duration, in minutes.
    pub rinse_minutes: String,
}

impl JobRecord {
    /// Creates a record with empty duration fields.
    pub fn new(id: impl Into<String>, process_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            process_type: process_type.into(),
            required_subtype: None,
            soak_minutes: String::new(),
            plating_hours: String::new(),
            rinse_minutes: String::new(),
        }
    }

    /// Sets the three raw duration fields (soak min, plating h, rinse min).
    pub fn with_durations(
        mut self,
        soak_minutes: impl Into<String>,
        plating_hours: impl Into<String>,
        rinse_minutes: impl Into<String>,
    ) -> Self {
        self.soak_minutes = soak_minutes.into();
        self.plating_hours = plating_hours.into();
        self.rinse_minutes = rinse_minutes.into();
        self
    }

    /// Sets the required tank subtype.
    pub fn with_required_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.required_subtype = Some(subtype.into());
        self
    }
}

/// A job whose durations normalized cleanly into slot counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Process type the job requires.
    pub process_type: String,
    /// Optional required tank subtype.
    pub required_subtype: Option<String>,
    /// Soak phase length in slots. Requires worker presence.
    pub soak_slots: usize,
    /// Plating phase length in slots. Runs unattended.
    pub plating_slots: usize,
    /// Rinse phase length in slots. Requires worker presence.
    pub rinse_slots: usize,
}

impl Job {
    /// Total length of all three phases, in slots.
    #[inline]
    pub fn total_slots(&self) -> usize {
        self.soak_slots + self.plating_slots + self.rinse_slots
    }
}
