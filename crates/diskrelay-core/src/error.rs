use thiserror::Error;

/// Errors produced while constructing a share reference from request input.
#[derive(Debug, Clone, Error)]
pub enum ShareError {
    #[error("invalid share token: {0}")]
    InvalidToken(String),
}
