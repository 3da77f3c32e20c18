use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Recipe storage is unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
    #[error("You can only have {0} recipes")]
    CapacityExceeded(usize),
    #[error("No recipe at position {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Deleted {deleted} recipes but {failed} could not be removed")]
    PartialDelete { deleted: usize, failed: usize },
}
