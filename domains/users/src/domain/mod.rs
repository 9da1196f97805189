//! Users domain layer: entities and input validation

pub mod entities;
pub mod validation;
