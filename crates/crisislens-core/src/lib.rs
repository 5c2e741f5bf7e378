//! CrisisLens Core Library
//!
//! Domain logic for the crisis assessment service: upload validation,
//! prompt construction, the Gemini vision call, and recovery of a JSON
//! assessment from the model's raw text.

pub mod analysis;
pub mod error;
pub mod vision;

pub use error::{LensError, LensResult};
