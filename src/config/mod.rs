pub mod cli;
pub mod toml_config;

use crate::adapters::ftp::FtpSettings;
use crate::core::{ConfigProvider, ReleaseMetadata};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_ENDPOINT: &str = "https://dev.cancermodels.org/api/search_index";
pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const DEFAULT_OUTPUT_FILENAME: &str = "cancerModels_EBISearch.json";
pub const DEFAULT_FTP_PORT: u16 = 21;

/// Search index columns exported for every model, in output order.
pub const DEFAULT_COLUMNS: &[&str] = &[
    "external_model_id",
    "project_name",
    "provider_name",
    "model_type",
    "histology",
    "search_terms",
    "cancer_system",
    "primary_site",
    "tumour_type",
    "patient_age",
    "patient_sex",
    "markers_with_cna_data",
    "markers_with_mutation_data",
    "markers_with_expression_data",
    "markers_with_biomarker_data",
    "breast_cancer_biomarkers",
    "treatment_list",
];

/// Fully resolved settings for one export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub endpoint: String,
    pub columns: Vec<String>,
    pub page_size: usize,
    pub timeout_seconds: Option<u64>,
    pub output_path: String,
    pub output_filename: String,
    pub release: ReleaseMetadata,
    pub ftp: FtpSettings,
}

impl ExportConfig {
    pub fn new(ftp: FtpSettings) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_seconds: None,
            output_path: ".".to_string(),
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            release: ReleaseMetadata::default(),
            ftp,
        }
    }

    pub fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = self.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(seconds));
        }
        Ok(builder.build()?)
    }
}

impl ConfigProvider for ExportConfig {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_filename(&self) -> &str {
        &self.output_filename
    }

    fn release(&self) -> &ReleaseMetadata {
        &self.release
    }
}

impl Validate for ExportConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.endpoint)?;
        validation::validate_columns("source.columns", &self.columns)?;
        validation::validate_positive_number("source.page_size", self.page_size, 1)?;
        validation::validate_non_empty_string("output.path", &self.output_path)?;
        validation::validate_json_filename("output.filename", &self.output_filename)?;
        validation::validate_non_empty_string("release.name", &self.release.name)?;
        validation::validate_non_empty_string("release.release", &self.release.release)?;
        validation::validate_release_date("release.release_date", &self.release.release_date)?;
        self.ftp.validate()
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "ebisearch-export")]
#[command(about = "Fetch, process, and upload cancer model data to an FTP server.")]
pub struct CliConfig {
    #[arg(long = "ftp_host", alias = "ftp-host", help = "FTP host")]
    pub ftp_host: String,

    #[arg(long = "ftp_user", alias = "ftp-user", help = "FTP user")]
    pub ftp_user: String,

    #[arg(long = "ftp_pass", alias = "ftp-pass", help = "FTP password")]
    pub ftp_pass: String,

    #[arg(long = "ftp_folder", alias = "ftp-folder", help = "FTP folder to upload files")]
    pub ftp_folder: String,

    #[arg(long = "ftp_port", alias = "ftp-port", help = "FTP port [default: 21]")]
    pub ftp_port: Option<u16>,

    #[arg(long, help = "Search index endpoint")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Records requested per page")]
    pub page_size: Option<usize>,

    #[arg(long, help = "Directory the JSON and gzip files are written to")]
    pub output_path: Option<String>,

    #[arg(short, long, help = "TOML file with source, release and output settings")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Defaults, then the TOML file if one was given, then explicit flags.
    pub fn resolve(&self) -> Result<ExportConfig> {
        let ftp = FtpSettings {
            host: self.ftp_host.clone(),
            port: DEFAULT_FTP_PORT,
            user: self.ftp_user.clone(),
            password: self.ftp_pass.clone(),
            folder: self.ftp_folder.clone(),
        };
        let mut config = ExportConfig::new(ftp);

        if let Some(path) = &self.config {
            tracing::info!("Loading configuration from: {}", path);
            toml_config::TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(port) = self.ftp_port {
            config.ftp.port = port;
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(output_path) = &self.output_path {
            config.output_path = output_path.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
