//! Shared domain model and decision logic for the TalentSync demo.
//!
//! Everything here is plain Rust so it can be unit-tested natively; the
//! `frontend` crate only wires it to signals and browser timers.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod usecases;
