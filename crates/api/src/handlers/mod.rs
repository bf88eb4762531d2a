//! Request handlers. Validation happens here, before any store access.

pub mod frase;
