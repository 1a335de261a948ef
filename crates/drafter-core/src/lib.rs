//! Drafter Core — shared domain abstractions.
//!
//! This crate defines the identifier, error and command types that the
//! draft context and the HTTP adapter share. It contains no infrastructure
//! code.

pub mod command;
pub mod error;
pub mod id;
