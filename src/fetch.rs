use bytes::Bytes;
use reqwest::Client;
use tracing::debug;
use url::Url;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct FetchError(#[from] reqwest::Error);

/// Download the whole body at `url`.
///
/// A fresh client is built per call and left with its defaults: no timeout,
/// no retries, standard redirect handling. 4xx/5xx statuses are errors.
pub async fn fetch_bytes(url: &Url) -> Result<Bytes, FetchError> {
    let client = Client::new();
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let body = response.bytes().await?;
    debug!(%url, size = body.len(), "downloaded");
    Ok(body)
}
