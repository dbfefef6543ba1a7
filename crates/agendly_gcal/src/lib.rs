// --- File: crates/agendly_gcal/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod handlers;
#[cfg(test)]
mod handlers_test;
pub mod models;
pub mod routes;
#[cfg(test)]
mod routes_test;
pub mod service;
