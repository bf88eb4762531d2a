//! Route definitions: declarative method+path → handler bindings.

pub mod frase;
pub mod health;
pub mod root;
