//! Job normalizer: raw records → slot-count jobs.
//!
//! Duration fields arrive as text and may be missing, empty, or
//! non-numeric. Every failure disqualifies exactly that job with a
//! `time_conversion_error` exclusion — never an error — so a batch
//! always normalizes to completion.
//!
//! Unit contract (fixed here, documented in `models::job`): soak and
//! rinse fields are minutes, the plating field is hours. Conversion is
//! float parse → minutes → integer floor division by the slot length.

use tracing::debug;

use crate::models::{ExclusionCategory, ExclusionRecord, Job, JobRecord, SlotGrid};

/// Normalizes a batch of raw records.
///
/// Returns the cleanly parsed jobs and one exclusion per rejected
/// record; the two partition the input (`jobs.len() + exclusions.len()
/// == records.len()`).
pub fn normalize_jobs(records: &[JobRecord], grid: &SlotGrid) -> (Vec<Job>, Vec<ExclusionRecord>) {
    let mut jobs = Vec::with_capacity(records.len());
    let mut exclusions = Vec::new();

    for record in records {
        match normalize_one(record, grid) {
            Ok(job) => jobs.push(job),
            Err(reason) => {
                debug!(job_id = %record.id, %reason, "job rejected during normalization");
                exclusions.push(ExclusionRecord::new(
                    &record.id,
                    ExclusionCategory::TimeConversionError,
                    reason,
                ));
            }
        }
    }

    (jobs, exclusions)
}

fn normalize_one(record: &JobRecord, grid: &SlotGrid) -> Result<Job, String> {
    let soak_minutes = parse_field(&record.id, "soak_minutes", &record.soak_minutes)?;
    let plating_hours = parse_field(&record.id, "plating_hours", &record.plating_hours)?;
    let rinse_minutes = parse_field(&record.id, "rinse_minutes", &record.rinse_minutes)?;

    let to_slots = |minutes: f64, field: &str| {
        grid.slots_from_minutes(minutes).ok_or_else(|| {
            format!("{}: field '{}' is not a valid duration", record.id, field)
        })
    };

    Ok(Job {
        id: record.id.clone(),
        process_type: record.process_type.clone(),
        required_subtype: record.required_subtype.clone(),
        soak_slots: to_slots(soak_minutes, "soak_minutes")?,
        plating_slots: to_slots(plating_hours * 60.0, "plating_hours")?,
        rinse_slots: to_slots(rinse_minutes, "rinse_minutes")?,
    })
}

fn parse_field(job_id: &str, field: &str, raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{job_id}: field '{field}' is empty"));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| format!("{job_id}: field '{field}' value '{trimmed}' is not numeric"))
}
