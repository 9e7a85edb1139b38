use jest_core::GameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotsError {
    #[error("game error: {0}")]
    Game(#[from] GameError),
    #[error("io error: {0}")]
    Io(String),
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for BotsError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for BotsError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}
