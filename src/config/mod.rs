/// Seed data loading from config.toml
pub mod seed;

/// Runtime settings from environment variables
pub mod settings;
