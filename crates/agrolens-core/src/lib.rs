//! # agrolens-core
//!
//! Core types, traits, configuration, localization, and error handling for AgroLens.

pub mod analysis;
pub mod config;
pub mod devices;
pub mod error;
pub mod i18n;
pub mod language;
pub mod message;
pub mod traits;
