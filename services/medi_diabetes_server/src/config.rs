use std::net::SocketAddr;
use std::path::PathBuf;

/// Fixed deployment layout. Paths are relative to the working directory.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub classifier_path: PathBuf,
    pub scaler_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8501)),
            classifier_path: PathBuf::from("models/classifier.json"),
            scaler_path: PathBuf::from("models/scaler.json"),
        }
    }
}
