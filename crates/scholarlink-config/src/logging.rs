use crate::env_lookup;

#[derive(Clone, Debug)]
pub struct LogConfig {
    /// Directory for the rolling log files.
    pub dir: String,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self {
            dir: env_lookup("LOG_DIR").unwrap_or_else(|| "storage/logs".to_string()),
        }
    }
}
