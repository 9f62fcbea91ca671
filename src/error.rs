use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FabError {
    #[error("item index {index} out of bounds for speed dial with {len} items")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, FabError>;
