//! # Embosser Configurations
//!
//! Hardware profiles for supported braille embossers.

pub mod config;

pub use config::EmbosserConfig;
