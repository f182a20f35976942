//! `tipo3-io` — file and byte-stream IO: xlsx inputs, store CSV ingestion,
//! artifact export.

pub mod decode;
pub mod export;
pub mod ingest;
pub mod xlsx;
