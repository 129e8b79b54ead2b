// Adapters layer: concrete implementations for external systems.
// Local storage still lives under src/config/cli.rs next to the CLI config.

pub mod ftp;
