//! `munimatch-recon` — municipality matching and name normalization engine.
//!
//! Pure engine crate: receives pre-loaded records, returns per-row results.
//! No CLI or IO dependencies.

pub mod engine;
pub mod matcher;
pub mod model;
pub mod naming;
pub mod registry;
pub mod romanize;

pub use engine::{parse_reference, reconcile};
pub use model::{
    MunicipalityRecord, RawMunicipality, RegionType, RowOutcome, RowResult, TemplateRow,
    UpdateReport,
};
pub use registry::build_index;
pub use romanize::{Kakasi, Romanizer};
