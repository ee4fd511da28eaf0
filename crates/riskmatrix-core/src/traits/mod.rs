//! Capability traits injected into the engine.

pub mod configuration_provider;

pub use configuration_provider::ConfigurationProvider;
