pub mod aggregator;
pub mod etl;
pub mod fetcher;
pub mod pipeline;
pub mod serializer;
pub mod transformer;

pub use crate::domain::model::{
    Entry, ExportArtifacts, ExportDocument, ExportSummary, ExtractResult, Field, RawRecord,
    ReleaseMetadata,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage, Uploader};
pub use crate::utils::error::Result;
