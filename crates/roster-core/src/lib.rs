//! In-memory roster state: players, groups, and the rules tying them
//! together.
//!
//! The crate is deliberately synchronous and I/O-free. `Roster` owns both
//! registries and is the only type the server shares behind a lock, so every
//! cross-registry rule (leader must be a member, deleted players vanish from
//! all groups) is enforced inside a single mutual-exclusion scope.
//!
//! Wire-facing types (`Player`, `Group`, `GroupView`, `ImportReport`) carry
//! their serde names; HTTP concerns stay in the server crate.

pub mod catalog;
pub mod error;
pub mod group;
pub mod import;
pub mod player;
pub mod roster;

pub use catalog::{ClassCount, PlayerClass};
pub use error::RosterError;
pub use group::{Group, GroupId, GroupRegistry, MemberSet};
pub use import::{import_rows, ImportReport, RawRow};
pub use player::{Player, PlayerId, PlayerRegistry};
pub use roster::{GroupView, Roster};
