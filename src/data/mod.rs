/// Data layer: core types, loading, and the two derived views.
///
/// Architecture:
/// ```text
///       .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, sites, payload bounds
///   └──────────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌──────────┐         ┌───────────┐
///   │  filter   │         │ aggregate │
///   │ site+range│         │ pie counts│
///   │ → indices │         │ per group │
///   └──────────┘         └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
