// Screening: one ranking round-trip per request, normalized into a sortable table.
// The ranking service is reached only through `crate::ranking`.

pub mod export;
pub mod handlers;
pub mod normalize;
pub mod orchestrator;
pub mod table;
pub mod views;
