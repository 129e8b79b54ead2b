use crate::domain::model::{
    ExportArtifacts, ExportDocument, ExtractResult, ReleaseMetadata,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Where `path` ends up on the local filesystem.
    fn locate(&self, path: &str) -> PathBuf;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn columns(&self) -> &[String];
    fn page_size(&self) -> usize;
    fn output_path(&self) -> &str;
    fn output_filename(&self) -> &str;
    fn release(&self) -> &ReleaseMetadata;
}

/// Sends a local file to a remote destination and returns the remote path.
pub trait Uploader: Send + Sync {
    fn upload(&self, local_path: &Path)
        -> impl std::future::Future<Output = Result<String>> + Send;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ExtractResult>;
    fn aggregate(&self, extracted: ExtractResult) -> Result<ExportDocument>;
    async fn load(&self, document: ExportDocument) -> Result<ExportArtifacts>;
    async fn publish(&self, artifacts: &ExportArtifacts) -> Result<String>;
}
