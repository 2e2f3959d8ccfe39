//! HTTP server configuration.

use serde::{Deserialize, Serialize};

fn default_bind() -> String {
    String::from("127.0.0.1:3000")
}

const fn default_max_body_bytes() -> usize {
    64 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Largest accepted request body.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}
