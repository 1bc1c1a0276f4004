//! somnia-render
//!
//! Result-view rendering: turns a `ScreeningResult` into the text the
//! respondent sees, so every front end shows the same wording.

pub mod error;
pub mod render;
pub mod view;
