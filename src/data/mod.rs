/// Data layer: datasets and the statistics computed over them.
///
/// Architecture:
/// ```text
///   seed data / user edits
///        │
///        ▼
///   ┌───────────────────┐
///   │ DatasetCollection  │  name → Dataset, insertion ordered
///   └───────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  mean, SEM, five-number summary
///   └──────────┘
/// ```

pub mod model;
pub mod stats;
