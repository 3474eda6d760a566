//! Shared types and forecast engine for Reelcast
//!
//! This crate contains the domain models and the pure scoring pipeline shared
//! between the updater binary and other consumers of the forecast document.

pub mod assembler;
pub mod error;
pub mod models;
pub mod scoring;
pub mod types;
pub mod validation;

pub use assembler::*;
pub use error::*;
pub use models::*;
pub use scoring::*;
pub use types::*;
pub use validation::*;
