use crate::core::fetcher::Fetcher;
use crate::core::{
    aggregator, serializer, transformer, ConfigProvider, ExportArtifacts, ExportDocument,
    ExtractResult, Pipeline, Storage, Uploader,
};
use crate::utils::error::Result;
use reqwest::Client;

/// Search index → EBI Search dump → FTP.
pub struct ExportPipeline<S: Storage, C: ConfigProvider, U: Uploader> {
    storage: S,
    config: C,
    uploader: U,
    fetcher: Fetcher,
}

impl<S: Storage, C: ConfigProvider, U: Uploader> ExportPipeline<S, C, U> {
    pub fn new(storage: S, config: C, uploader: U) -> Self {
        Self::with_client(storage, config, uploader, Client::new())
    }

    pub fn with_client(storage: S, config: C, uploader: U, client: Client) -> Self {
        let fetcher = Fetcher::new(
            client,
            config.api_endpoint(),
            config.columns().to_vec(),
            config.page_size(),
        );
        Self {
            storage,
            config,
            uploader,
            fetcher,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, U: Uploader> Pipeline for ExportPipeline<S, C, U> {
    async fn extract(&self) -> Result<ExtractResult> {
        let mut entries = Vec::new();
        let mut total_count = 0;
        let mut pages_fetched = 0;

        let mut pages = self.fetcher.pages();
        while let Some(page) = pages.next_page().await? {
            total_count += page.len();
            pages_fetched += 1;
            entries.extend(transformer::format_page(&page, self.fetcher.columns())?);
        }

        Ok(ExtractResult {
            entries,
            total_count,
            pages_fetched,
        })
    }

    fn aggregate(&self, extracted: ExtractResult) -> Result<ExportDocument> {
        aggregator::assemble(
            extracted.entries,
            extracted.total_count,
            self.config.release(),
        )
    }

    async fn load(&self, document: ExportDocument) -> Result<ExportArtifacts> {
        let json_filename = self.config.output_filename();
        let gzip_filename = serializer::gzip_filename(json_filename);

        let json = serializer::to_json_bytes(&document)?;
        tracing::debug!("Writing {} ({} bytes)", json_filename, json.len());
        self.storage.write_file(json_filename, &json).await?;

        let compressed = serializer::gzip(&json)?;
        tracing::debug!("Writing {} ({} bytes)", gzip_filename, compressed.len());
        self.storage.write_file(&gzip_filename, &compressed).await?;

        Ok(ExportArtifacts {
            json_path: self.storage.locate(json_filename),
            gzip_path: self.storage.locate(&gzip_filename),
            entry_count: document.entry_count,
        })
    }

    async fn publish(&self, artifacts: &ExportArtifacts) -> Result<String> {
        self.uploader.upload(&artifacts.gzip_path).await
    }
}
