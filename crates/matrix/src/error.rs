use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatrixError>;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Invalid reaction kind {kind:?} from user {user_id} on statement {statement_id}")]
    InvalidReactionKind {
        kind: String,
        user_id: String,
        statement_id: String,
    },
}
