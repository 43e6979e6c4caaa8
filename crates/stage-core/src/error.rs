use crate::scheduler::ItemId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StageError {
    #[error("no tracked item {0}")]
    UnknownItem(ItemId),
    #[error("invalid tracking config: {0}")]
    InvalidConfig(&'static str),
}
