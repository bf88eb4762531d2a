//! Shared types and the domain error taxonomy for the frases service.

pub mod error;
pub mod types;
