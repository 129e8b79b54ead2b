use crate::config::ExportConfig;
use crate::utils::error::{ExportError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional overrides read from a TOML file. Every table and key may be left
/// out; missing values keep the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: Option<SourceConfig>,
    pub release: Option<ReleaseConfig>,
    pub output: Option<OutputConfig>,
    pub ftp: Option<FtpConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub columns: Option<Vec<String>>,
    pub page_size: Option<usize>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseConfig {
    pub name: Option<String>,
    pub release: Option<String>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FtpConfig {
    pub port: Option<u16>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ExportError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ExportError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RELEASE_DATE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| ExportError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply_to(self, config: &mut ExportConfig) {
        if let Some(source) = self.source {
            if let Some(endpoint) = source.endpoint {
                config.endpoint = endpoint;
            }
            if let Some(columns) = source.columns {
                config.columns = columns;
            }
            if let Some(page_size) = source.page_size {
                config.page_size = page_size;
            }
            if source.timeout_seconds.is_some() {
                config.timeout_seconds = source.timeout_seconds;
            }
        }

        if let Some(release) = self.release {
            if let Some(name) = release.name {
                config.release.name = name;
            }
            if let Some(version) = release.release {
                config.release.release = version;
            }
            if let Some(date) = release.release_date {
                config.release.release_date = date;
            }
        }

        if let Some(output) = self.output {
            if let Some(path) = output.path {
                config.output_path = path;
            }
            if let Some(filename) = output.filename {
                config.output_filename = filename;
            }
        }

        if let Some(port) = self.ftp.and_then(|ftp| ftp.port) {
            config.ftp.port = port;
        }
    }
}
