use crate::{GroupId, PlayerId};

/// Validation failures for roster operations.
///
/// Every variant is a caller-input problem surfaced synchronously; nothing
/// here is transient or retried. The HTTP adapter owns the status-code
/// mapping (not-found kinds to 404, duplicates and membership collisions to
/// 409, the rest to 400).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Player name and class are required")]
    MissingPlayerField,
    #[error("Group name is required")]
    MissingGroupName,
    #[error("Invalid class '{0}'")]
    InvalidClass(String),
    #[error("Player '{0}' already exists")]
    DuplicatePlayerName(String),
    #[error("Group '{0}' already exists")]
    DuplicateGroupName(String),
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),
    #[error("Group {0} not found")]
    GroupNotFound(GroupId),
    #[error("Leader {0} is not a known player")]
    LeaderNotFound(PlayerId),
    #[error("Leader {0} is not a member of the group")]
    LeaderNotMember(PlayerId),
    #[error("Player {0} is already a member")]
    AlreadyMember(PlayerId),
    #[error("Player {0} is not a member of the group")]
    NotMember(PlayerId),
    #[error("No update fields provided")]
    EmptyUpdate,
}
