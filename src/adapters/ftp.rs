use crate::core::Uploader;
use crate::utils::error::{ExportError, Result};
use crate::utils::validation::{self, Validate};
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use suppaftp::types::FileType;
use suppaftp::{FtpError, FtpStream};

#[derive(Clone)]
pub struct FtpSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub folder: String,
}

impl fmt::Debug for FtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("folder", &self.folder)
            .finish()
    }
}

impl Validate for FtpSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("ftp_host", &self.host)?;
        validation::validate_positive_number("ftp_port", usize::from(self.port), 1)?;
        validation::validate_non_empty_string("ftp_user", &self.user)?;
        validation::validate_non_empty_string("ftp_folder", &self.folder)
    }
}

/// Stores files in one remote directory, one FTP session per upload.
#[derive(Debug, Clone)]
pub struct FtpUploader {
    settings: FtpSettings,
}

impl FtpUploader {
    pub fn new(settings: FtpSettings) -> Self {
        Self { settings }
    }
}

impl Uploader for FtpUploader {
    async fn upload(&self, local_path: &Path) -> Result<String> {
        let settings = self.settings.clone();
        let local_path: PathBuf = local_path.to_path_buf();

        tokio::task::spawn_blocking(move || store_file(&settings, &local_path))
            .await
            .map_err(|e| ExportError::UploadTaskFailed {
                message: e.to_string(),
            })?
    }
}

fn step(step: &'static str) -> impl FnOnce(FtpError) -> ExportError {
    move |source| ExportError::FtpError { step, source }
}

fn store_file(settings: &FtpSettings, local_path: &Path) -> Result<String> {
    let file_name = local_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ExportError::ConfigError {
            message: format!("cannot upload {}: no file name", local_path.display()),
        })?;

    tracing::debug!(
        "Connecting to ftp://{}:{} as {}",
        settings.host,
        settings.port,
        settings.user
    );
    let mut ftp = FtpStream::connect((settings.host.as_str(), settings.port))
        .map_err(step("connect"))?;
    ftp.login(settings.user.as_str(), settings.password.as_str())
        .map_err(step("login"))?;
    ftp.cwd(&settings.folder).map_err(step("cwd"))?;
    ftp.transfer_type(FileType::Binary)
        .map_err(step("binary mode"))?;

    let mut file = File::open(local_path)?;
    let bytes = ftp.put_file(file_name, &mut file).map_err(step("store"))?;
    tracing::debug!("Stored {} bytes as {}", bytes, file_name);

    // Stored by now; QUIT failures are only logged.
    if let Err(e) = ftp.quit() {
        tracing::warn!("FTP QUIT failed after upload: {}", e);
    }

    Ok(format!(
        "{}/{}",
        settings.folder.trim_end_matches('/'),
        file_name
    ))
}
