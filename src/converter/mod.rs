// ============================================================================
// Converter Module
// Configurable front end over the exact decimal-to-rational conversion
// ============================================================================

pub mod config;
mod rational_converter;

pub use config::ConverterConfig;
pub use rational_converter::RationalConverter;
