use thiserror::Error;

/// Errors raised while talking to the bar over stdin and stdout
#[derive(Error, Debug)]
pub enum BarError {
    /// Writing status lines or reading click events failed
    #[error("bar I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A status line could not be encoded
    #[error("failed to encode status line: {0}")]
    Encode(#[from] serde_json::Error),
}
