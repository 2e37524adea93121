//! CLI command implementations.

pub mod capture;
pub mod resolve;
