//! Domain model for the draft context.

pub mod aggregates;
pub mod commands;
pub mod picks;
