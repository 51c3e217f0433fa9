//! Request handlers for the survey workflow.
//!
//! `thanks` serves the public token-gated survey; `admin_tokens` serves
//! the operator endpoints behind the Basic-auth gate. Handlers delegate
//! to the [`thanks_store::EntryStore`] in [`crate::state::AppState`] and
//! map errors via [`crate::error::AppError`].

pub mod admin_tokens;
pub mod thanks;
