//! Text extraction from downloaded files.
//!
//! Both extractors are synchronous; callers run them on the blocking pool.

pub mod image;
pub mod pdf;

pub use self::image::ImageExtractor;
pub use self::pdf::PdfExtractor;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Bytes are not a recognizable image or PDF.
    #[error("{0}")]
    Decode(String),

    /// The OCR binary could not be launched.
    #[error("{0} not found")]
    EngineUnavailable(String),

    #[error("{0}")]
    Processing(String),
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Processing(err.to_string())
    }
}

/// Run a blocking extraction on tokio's blocking pool.
pub async fn run_blocking<F>(job: F) -> Result<String, ExtractError>
where
    F: FnOnce() -> Result<String, ExtractError> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| ExtractError::Processing(format!("extraction task failed: {e}")))?
}
