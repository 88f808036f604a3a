use axum::extract::FromRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::error::AppError;

/// `Json` extractor whose rejections go through `AppError`, so malformed
/// bodies get the same `{"detail": ...}` shape as every other failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// An absolute `http` or `https` URL with a host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct HttpUrl(Url);

impl HttpUrl {
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl TryFrom<String> for HttpUrl {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let url = Url::parse(&raw).map_err(|e| format!("invalid URL: {}", e))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(format!("URL scheme should be 'http' or 'https', got '{}'", other)),
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err("URL host is missing".to_string());
        }
        Ok(HttpUrl(url))
    }
}

impl fmt::Display for HttpUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Body of both `POST /ocr` and `POST /pdf`.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub url: HttpUrl,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: String,
}
