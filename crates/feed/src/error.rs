use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeedError>;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Scoring error: {0}")]
    Scoring(#[from] agora_scoring::ScoringError),

    #[error("Store error: {0}")]
    Store(#[from] agora_store::StoreError),
}
