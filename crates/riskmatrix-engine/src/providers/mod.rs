//! Bundled [`ConfigurationProvider`] implementations.
//!
//! [`ConfigurationProvider`]: riskmatrix_core::traits::ConfigurationProvider

mod directory;
mod in_memory;
mod none;

pub use directory::DirectorySettings;
pub use in_memory::InMemorySettings;
pub use none::NoTenantSettings;
