// --- File: crates/agendly_availability/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod handlers;
pub mod routes;
pub mod store;
#[cfg(test)]
mod store_test;
