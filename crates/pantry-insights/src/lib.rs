mod dietary;
mod filter;
mod snapshot;

pub use dietary::Dietary;
pub use filter::{SearchFilters, SortOrder};
pub use snapshot::{
    compute_snapshot, snapshot, DerivedAnalyticsSnapshot, FrequencyEntry, TOP_N, UNKNOWN_CUISINE,
};
