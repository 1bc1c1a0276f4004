//! somnia-session
//!
//! The in-memory survey session: one per open intake form. Owns the
//! answers, measurements, and contact details, enforces the completion
//! gate, and drives the `InProgress → Complete → Submitted` lifecycle.
//! All methods are synchronous; the embedding view serializes access.

pub mod error;
pub mod events;
pub mod survey;

pub use error::SessionError;
pub use survey::{SessionStatus, SurveySession};
