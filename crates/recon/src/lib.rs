//! `tipo3-recon` — Tipo 03 price list reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded tables, returns classified results.
//! No CLI or file IO dependencies.

pub mod base;
pub mod engine;
pub mod error;
pub mod model;
pub mod money;
pub mod normalize;
pub mod schema;
pub mod store;

pub use engine::{reconcile, run};
pub use error::ReconError;
pub use model::{CodeMapping, RunReport, StoreLabel, StoreTable, TranslatedBaseTable};
