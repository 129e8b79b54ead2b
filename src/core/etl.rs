use crate::core::{ExportSummary, Pipeline};
use crate::utils::error::Result;

pub struct ExportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs every stage once, in order. The first error ends the run.
    pub async fn run(&self) -> Result<ExportSummary> {
        tracing::info!("Starting export...");

        let extracted = self.pipeline.extract().await?;
        tracing::info!(
            "Fetched {} records in {} pages",
            extracted.total_count,
            extracted.pages_fetched
        );

        let document = self.pipeline.aggregate(extracted)?;

        let artifacts = self.pipeline.load(document).await?;
        tracing::info!(
            "Processed {} models and saved to {}",
            artifacts.entry_count,
            artifacts.gzip_path.display()
        );

        let remote_path = self.pipeline.publish(&artifacts).await?;
        tracing::info!(
            "Uploaded {} to {}",
            artifacts.gzip_path.display(),
            remote_path
        );

        Ok(ExportSummary {
            entry_count: artifacts.entry_count,
            json_path: artifacts.json_path,
            gzip_path: artifacts.gzip_path,
            remote_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ExportArtifacts, ExportDocument, ExtractResult, ReleaseMetadata};
    use crate::utils::error::ExportError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct StubPipeline {
        fail_extract: bool,
        fail_publish: bool,
        loads: AtomicUsize,
        publishes: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Pipeline for StubPipeline {
        async fn extract(&self) -> Result<ExtractResult> {
            if self.fail_extract {
                return Err(ExportError::HttpStatus {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    url: "http://localhost/search_index".to_string(),
                });
            }
            Ok(ExtractResult {
                entries: Vec::new(),
                total_count: 0,
                pages_fetched: 1,
            })
        }

        fn aggregate(&self, extracted: ExtractResult) -> Result<ExportDocument> {
            crate::core::aggregator::assemble(
                extracted.entries,
                extracted.total_count,
                &ReleaseMetadata::default(),
            )
        }

        async fn load(&self, document: ExportDocument) -> Result<ExportArtifacts> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(ExportArtifacts {
                json_path: "out.json".into(),
                gzip_path: "out.json.gz".into(),
                entry_count: document.entry_count,
            })
        }

        async fn publish(&self, _artifacts: &ExportArtifacts) -> Result<String> {
            self.publishes.fetch_add(1, Ordering::SeqCst);
            if self.fail_publish {
                return Err(ExportError::UploadTaskFailed {
                    message: "refused".to_string(),
                });
            }
            Ok("incoming/out.json.gz".to_string())
        }
    }

    #[tokio::test]
    async fn test_run_reports_summary() {
        let engine = ExportEngine::new(StubPipeline::default());

        let summary = engine.run().await.unwrap();

        assert_eq!(summary.entry_count, 0);
        assert_eq!(summary.remote_path, "incoming/out.json.gz");
    }

    #[tokio::test]
    async fn test_extract_failure_skips_load_and_publish() {
        let engine = ExportEngine::new(StubPipeline {
            fail_extract: true,
            ..Default::default()
        });

        assert!(engine.run().await.is_err());
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 0);
        assert_eq!(engine.pipeline.publishes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_publish_failure_comes_after_load() {
        let engine = ExportEngine::new(StubPipeline {
            fail_publish: true,
            ..Default::default()
        });

        assert!(engine.run().await.is_err());
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 1);
    }
}
