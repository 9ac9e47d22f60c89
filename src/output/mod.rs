//! Report output
//!
//! Text tables for people, JSON for tooling.

pub mod json;
pub mod text;
