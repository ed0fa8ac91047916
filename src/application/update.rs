//! Update strategy selection.
//!
//! The demo service fabricates ids above a fixed boundary and silently
//! drops writes to them, so updates split into two variants. The boundary
//! is configuration, not a hard-coded branch, so other backends can move
//! or effectively disable it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStrategy {
    /// `PUT /posts/{id}` with the full record.
    Direct,
    /// `DELETE /posts/{id}` then `POST /posts` carrying the original id.
    DeleteThenRecreate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdatePolicy {
    pub synthetic_id_threshold: u64,
}

impl UpdatePolicy {
    pub const DEFAULT_THRESHOLD: u64 = 100;

    pub fn new(synthetic_id_threshold: u64) -> Self {
        Self {
            synthetic_id_threshold,
        }
    }

    pub fn strategy_for(&self, id: u64) -> UpdateStrategy {
        if id <= self.synthetic_id_threshold {
            UpdateStrategy::Direct
        } else {
            UpdateStrategy::DeleteThenRecreate
        }
    }
}

impl Default for UpdatePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive_on_the_direct_side() {
        let policy = UpdatePolicy::default();
        assert_eq!(policy.strategy_for(100), UpdateStrategy::Direct);
        assert_eq!(policy.strategy_for(101), UpdateStrategy::DeleteThenRecreate);
    }

    #[test]
    fn threshold_is_adjustable_per_backend() {
        let policy = UpdatePolicy::new(10);
        assert_eq!(policy.strategy_for(11), UpdateStrategy::DeleteThenRecreate);
        assert_eq!(
            UpdatePolicy::new(u64::MAX).strategy_for(5_000),
            UpdateStrategy::Direct
        );
    }
}
