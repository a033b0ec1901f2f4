/// Errors that can occur in Gauge operations.
#[derive(Debug, thiserror::Error)]
pub enum GaugeError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("template error: {0}")]
    Template(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for GaugeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GaugeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            line: err.line(),
            reason: err.to_string(),
        }
    }
}
