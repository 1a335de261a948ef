//! Drafter — draft lifecycle bounded context.
//!
//! Responsible for draft creation, turn advancement, pick validation and
//! completion detection, plus the in-memory store that owns every draft.

pub mod application;
pub mod domain;
pub mod store;
