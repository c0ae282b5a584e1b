use thiserror::Error;

/// Errors surfaced by a client adapter.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("operation error: {0}")]
    Operation(String),
}

/// Errors surfaced by a benchmark run.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    #[error("worker task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, BenchError>;
pub type ClientResult<T> = std::result::Result<T, ClientError>;
