//! Resource registry: active tanks indexed by compatibility key.
//!
//! Inactive tanks are dropped at construction. Lookup never fails:
//! a job whose key matches nothing gets an empty candidate list, and
//! the absence is reported upward as an exclusion category rather
//! than an error.

use std::collections::HashMap;

use crate::models::{Tank, TankStatus};

/// Index of active tanks by process type.
///
/// Input order is preserved everywhere so candidate generation stays
/// deterministic.
#[derive(Debug, Clone)]
pub struct TankRegistry {
    tanks: Vec<Tank>,
    by_type: HashMap<String, Vec<usize>>,
}

impl TankRegistry {
    /// Builds the registry, keeping only active tanks.
    pub fn new(tanks: &[Tank]) -> Self {
        let tanks: Vec<Tank> = tanks
            .iter()
            .filter(|t| t.status == TankStatus::Active)
            .cloned()
            .collect();

        let mut by_type: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, tank) in tanks.iter().enumerate() {
            by_type.entry(tank.process_type.clone()).or_default().push(idx);
        }

        Self { tanks, by_type }
    }

    /// Number of active tanks.
    pub fn len(&self) -> usize {
        self.tanks.len()
    }

    /// Whether no tank is active.
    pub fn is_empty(&self) -> bool {
        self.tanks.is_empty()
    }

    /// The active tank at a registry index.
    pub fn tank(&self, idx: usize) -> &Tank {
        &self.tanks[idx]
    }

    /// All active tanks, in input order.
    pub fn tanks(&self) -> &[Tank] {
        &self.tanks
    }

    /// Registry indices of active tanks compatible with a job's
    /// requirement, in input order. Empty when nothing matches.
    pub fn compatible(&self, process_type: &str, required_subtype: Option<&str>) -> Vec<usize> {
        self.by_type
            .get(process_type)
            .map(|indices| {
                indices
                    .iter()
                    .copied()
                    .filter(|&i| self.tanks[i].matches(process_type, required_subtype))
                    .collect()
            })
            .unwrap_or_default()
    }
}
