//! somnia-screening
//!
//! The STOP-BANG screening instrument: questionnaire item definitions,
//! the scoring engine, the unit-converting measurement calculators, and
//! the contact-field validators. Everything here is a pure function over
//! `somnia-core` types — no I/O, no state.

pub mod calculators;
pub mod error;
pub mod questionnaire;
pub mod scoring;
pub mod validators;
