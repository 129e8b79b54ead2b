pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::ftp::{FtpSettings, FtpUploader};
pub use config::{cli::LocalStorage, ExportConfig};

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{etl::ExportEngine, pipeline::ExportPipeline};
pub use utils::error::{ExportError, Result};
