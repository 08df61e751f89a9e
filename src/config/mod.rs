use std::env;
use std::path::PathBuf;

/// Server configuration, loaded from the environment at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on (default: 3000)
    pub port: u16,

    /// Root directory for static assets; uploads live in an `uploads`
    /// subdirectory beneath it (default: "public")
    pub public_dir: PathBuf,

    /// Maximum request body size in bytes (default: 50 MB)
    pub max_file_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            public_dir: PathBuf::from("public"),
            max_file_size: 50 * 1024 * 1024, // 50 MB
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.port),

            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.public_dir),

            max_file_size: env::var("MAX_FILE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_file_size),
        }
    }

    /// Directory uploaded files are written to
    pub fn upload_dir(&self) -> PathBuf {
        self.public_dir.join("uploads")
    }
}
