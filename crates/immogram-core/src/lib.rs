//! # immogram-core
//!
//! Core types, traits, configuration, and error handling for Immogram.

pub mod config;
pub mod error;
pub mod task;
pub mod traits;
