use serde::{Deserialize, Serialize};

/// Singleton row (id = 1) gating how often a submission becomes a Measurement.
/// `current` counts submissions since the last commit; a submission arriving
/// with `current == threshold` is the one that gets persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionCounter {
    pub id: i64,
    pub threshold: i64,
    pub current: i64,
}
