use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_OCR_LANGUAGE: &str = "ces";
pub const DEFAULT_TESSERACT_CMD: &str = "tesseract";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Tesseract language pack passed as `-l`.
    pub ocr_language: String,
    /// Name or path of the tesseract binary.
    pub tesseract_cmd: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            ocr_language: DEFAULT_OCR_LANGUAGE.to_string(),
            tesseract_cmd: DEFAULT_TESSERACT_CMD.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        let server_addr = parse_addr(&host, &port)?;

        let ocr_language =
            env::var("OCR_LANGUAGE").unwrap_or_else(|_| DEFAULT_OCR_LANGUAGE.to_string());
        let tesseract_cmd =
            env::var("TESSERACT_CMD").unwrap_or_else(|_| DEFAULT_TESSERACT_CMD.to_string());

        Ok(Config {
            server_addr,
            ocr_language,
            tesseract_cmd,
        })
    }
}

fn parse_addr(host: &str, port: &str) -> Result<SocketAddr> {
    let port = port
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
    let ip = IpAddr::from_str(host)
        .map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

    Ok(SocketAddr::new(ip, port))
}
