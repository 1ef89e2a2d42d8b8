//! Service layer module.
//!
//! Contains the sampling, identifier and formatting logic behind value
//! generation.

pub mod format;
pub mod generator;
pub mod identifier;
pub mod sampler;

pub use format::{Decoration, Encoding};
pub use generator::Generator;
pub use identifier::{Identifier, MillisClock};
pub use sampler::{Sampler, alphabet};
