//! Row models and DTOs.

pub mod frase;
