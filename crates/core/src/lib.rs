//! Domain types for the token-gated thank-you survey.
//!
//! This crate has no I/O: it defines the [`entry::SupportEntry`] entity,
//! token generation, and the boundary validator that turns a raw
//! submission body into typed [`survey::SurveyAnswers`].

pub mod entry;
pub mod error;
pub mod survey;
pub mod token;

pub use entry::SupportEntry;
pub use error::CoreError;
