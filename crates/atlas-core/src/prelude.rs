//! atlas-core prelude: bring common types and traits into scope for examples.

pub use crate::common::DbStats;
pub use crate::error::{AtlasError, ErrorKind, Result};
pub use crate::loader::{DataPaths, DatasetCache};
pub use crate::model::{Capital, Country};
pub use crate::pagination::{Page, PageMeta, PageRequest};
pub use crate::query::{SearchCriteria, SortOrder};
pub use crate::service::{Atlas, CapitalService, CountryService, StatisticsService};
pub use crate::traits::Record;
