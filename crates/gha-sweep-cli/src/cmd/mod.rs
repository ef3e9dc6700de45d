//! Command implementations

pub mod sweep;
