// crates/atlas-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate counts over the loaded datasets.
///
/// Returned by [`StatisticsService::totals`](crate::StatisticsService::totals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub capitals: usize,
}
