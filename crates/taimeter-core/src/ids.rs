use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub Uuid);

impl IndicatorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for IndicatorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IND_{}", self.0.simple())
    }
}

/// Source of record identifiers. Injected into the assembler so callers
/// (and tests) control whether ids are random or deterministic.
pub trait IdSource {
    fn next_id(&mut self) -> IndicatorId;
}

/// Production source: random v4 UUIDs.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> IndicatorId {
        IndicatorId::new()
    }
}

/// Deterministic source yielding ids 1, 2, 3, ... for reproducible tests.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u128,
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> IndicatorId {
        self.next += 1;
        IndicatorId(Uuid::from_u128(self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_are_deterministic() {
        let mut a = SequentialIds::default();
        let mut b = SequentialIds::default();
        assert_eq!(a.next_id(), b.next_id());
        assert_eq!(a.next_id(), b.next_id());
    }

    #[test]
    fn sequential_ids_never_repeat() {
        let mut ids = SequentialIds::default();
        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, second);
    }

    #[test]
    fn display_uses_indicator_prefix() {
        let mut ids = SequentialIds::default();
        let id = ids.next_id();
        assert!(id.to_string().starts_with("IND_"));
    }
}
