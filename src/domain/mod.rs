//! Domain models for ugen.
//!
//! This module contains the resolved generation configuration and the
//! strategy it maps to.

pub mod config;
pub mod strategy;

pub use config::{CaseMode, DEFAULT_SEPARATOR, GenerationConfig, GenerationConfigBuilder, Interval};
pub use strategy::Strategy;
