//! somnia-core
//!
//! Pure domain types for the Somnia sleep-apnea intake survey.
//! No I/O and no scoring logic — this is the shared vocabulary of the
//! Somnia system, consumed by the screening engine, the session layer,
//! and (via generated TypeScript bindings) the web form.

pub mod models;
