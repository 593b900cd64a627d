use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoringError>;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Matrix error: {0}")]
    Matrix(#[from] agora_matrix::MatrixError),

    #[error("Store error: {0}")]
    Store(#[from] agora_store::StoreError),
}
