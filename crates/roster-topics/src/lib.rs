//! Canonical event topic constants for the roster service.
//!
//! Publishing sites and the SSE surface both import these constants so the
//! wire vocabulary stays in one place. Keep the list grouped by entity and
//! favor dot.case names.

// Players
pub const TOPIC_PLAYERS_CREATED: &str = "players.created";
pub const TOPIC_PLAYERS_UPDATED: &str = "players.updated";
pub const TOPIC_PLAYERS_DELETED: &str = "players.deleted";
pub const TOPIC_PLAYERS_IMPORTED: &str = "players.imported";

// Groups
pub const TOPIC_GROUPS_CREATED: &str = "groups.created";
pub const TOPIC_GROUPS_UPDATED: &str = "groups.updated";
pub const TOPIC_GROUPS_DELETED: &str = "groups.deleted";
pub const TOPIC_GROUPS_MEMBER_ADDED: &str = "groups.member.added";
pub const TOPIC_GROUPS_MEMBER_REMOVED: &str = "groups.member.removed";

// Service
pub const TOPIC_SERVICE_START: &str = "service.start";
