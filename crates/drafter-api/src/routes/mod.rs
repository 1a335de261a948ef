//! Route modules.

pub mod drafts;
pub mod health;
