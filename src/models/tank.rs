//! Tank model.
//!
//! Tanks are the shared exclusive-use processing resources. Each tank
//! carries a compatibility key (process type plus optional subtype),
//! an active/inactive status, and the number of workers its attended
//! phases demand. Tanks are loaded once per run and never mutate.

use serde::{Deserialize, Serialize};

/// Operational status of a tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TankStatus {
    /// In service; eligible for assignment.
    Active,
    /// Out of service; excluded from the registry entirely.
    Inactive,
}

impl TankStatus {
    /// Resolves a free-text status label.
    ///
    /// "active" (case-insensitive) and the upstream files' 稼働中 mark
    /// a tank in service; anything else is inactive.
    pub fn parse_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("active") || trimmed == "稼働中" {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

/// A processing tank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    /// Unique tank identifier.
    pub id: String,
    /// Process type this tank supports (e.g. "Ni", "Cr").
    pub process_type: String,
    /// Optional subtype refining the compatibility key.
    pub subtype: Option<String>,
    /// Operational status.
    pub status: TankStatus,
    /// Workers required while a soak phase runs in this tank.
    pub soak_workers: u32,
    /// Workers required while a rinse phase runs in this tank.
    pub rinse_workers: u32,
}

impl Tank {
    /// Creates an active tank with the default single-worker demand
    /// for both attended phases.
    pub fn new(id: impl Into<String>, process_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            process_type: process_type.into(),
            subtype: None,
            status: TankStatus::Active,
            soak_workers: 1,
            rinse_workers: 1,
        }
    }

    /// Sets the subtype.
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: TankStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the soak-phase worker demand.
    pub fn with_soak_workers(mut self, count: u32) -> Self {
        self.soak_workers = count;
        self
    }

    /// Sets the rinse-phase worker demand.
    pub fn with_rinse_workers(mut self, count: u32) -> Self {
        self.rinse_workers = count;
        self
    }

    /// Whether the tank is in service.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == TankStatus::Active
    }

    /// Whether this tank satisfies a job's compatibility requirement.
    ///
    /// The process type must match exactly. An absent or empty required
    /// subtype matches any tank; a concrete one must equal the tank's
    /// subtype.
    pub fn matches(&self, process_type: &str, required_subtype: Option<&str>) -> bool {
        if self.process_type != process_type {
            return false;
        }
        match required_subtype {
            None => true,
            Some(req) if req.is_empty() => true,
            Some(req) => self.subtype.as_deref() == Some(req),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tank_defaults() {
        let t = Tank::new("T1", "Ni");
        assert!(t.is_active());
        assert_eq!(t.soak_workers, 1);
        assert_eq!(t.rinse_workers, 1);
        assert_eq!(t.subtype, None);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(TankStatus::parse_label("active"), TankStatus::Active);
        assert_eq!(TankStatus::parse_label(" Active "), TankStatus::Active);
        assert_eq!(TankStatus::parse_label("稼働中"), TankStatus::Active);
        assert_eq!(TankStatus::parse_label("maintenance"), TankStatus::Inactive);
        assert_eq!(TankStatus::parse_label(""), TankStatus::Inactive);
    }

    #[test]
    fn test_matches_process_type() {
        let t = Tank::new("T1", "Ni");
        assert!(t.matches("Ni", None));
        assert!(!t.matches("Cr", None));
    }

    #[test]
    fn test_matches_subtype() {
        let t = Tank::new("T1", "Ni").with_subtype("bright");
        assert!(t.matches("Ni", None));
        assert!(t.matches("Ni", Some(""))); // empty requirement matches any
        assert!(t.matches("Ni", Some("bright")));
        assert!(!t.matches("Ni", Some("matte")));

        // Tank without a subtype cannot satisfy a concrete requirement
        let plain = Tank::new("T2", "Ni");
        assert!(!plain.matches("Ni", Some("bright")));
        assert!(plain.matches("Ni", Some("")));
    }
}
