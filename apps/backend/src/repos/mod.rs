//! Repository functions for the domain layer.

pub mod players;
pub mod rules;
pub mod tasks;
