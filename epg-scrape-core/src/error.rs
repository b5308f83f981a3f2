/// Errors that can occur while decoding an EPG event.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Invalid event JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
