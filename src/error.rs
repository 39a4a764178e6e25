use thiserror::Error;

use crate::model::Status;

/// Board commands that were rejected. These never reach the user; the key
/// handler logs them and leaves the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has not been sized yet")]
    NotLoaded,

    #[error("no task selected in the {} column", .0.title())]
    EmptyColumn(Status),
}
