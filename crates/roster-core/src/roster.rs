use serde::Serialize;

use crate::catalog::{distribution, ClassCount};
use crate::error::RosterError;
use crate::group::{Group, GroupId, GroupRegistry};
use crate::import::{import_rows, ImportReport, RawRow};
use crate::player::{Player, PlayerId, PlayerRegistry};

/// Group record with player ids resolved to full player values.
///
/// Built on demand from live registry state, never stored. Member ids that
/// no longer resolve are dropped from the listing; a leader that no longer
/// resolves nulls both `leaderId` and `leader` together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    pub id: GroupId,
    pub name: String,
    pub leader_id: Option<PlayerId>,
    pub leader: Option<Player>,
    pub members: Vec<Player>,
}

/// The two registries plus every operation that has to see both.
///
/// Cross-registry rules live here: group writes that must resolve player
/// ids, the deletion sweep, and the resolved group views. Callers mutate
/// through these methods; the accessors hand out read-only registry views.
#[derive(Debug, Default)]
pub struct Roster {
    players: PlayerRegistry,
    groups: GroupRegistry,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    pub fn create_player(&mut self, name: &str, class: &str) -> Result<Player, RosterError> {
        self.players.create(name, class)
    }

    pub fn update_player(
        &mut self,
        id: PlayerId,
        name: Option<&str>,
        class: Option<&str>,
    ) -> Result<Player, RosterError> {
        self.players.update(id, name, class)
    }

    /// Deletes the player and sweeps every group reference to it, so no
    /// group ever holds a dangling id. Returns the removed player and how
    /// many groups the sweep touched.
    pub fn delete_player(&mut self, id: PlayerId) -> Result<(Player, usize), RosterError> {
        let player = self.players.remove(id)?;
        let touched = self.groups.purge_player(id);
        if touched > 0 {
            tracing::debug!(player = id, groups = touched, "swept deleted player from groups");
        }
        Ok((player, touched))
    }

    pub fn create_group(
        &mut self,
        name: &str,
        leader: Option<PlayerId>,
    ) -> Result<Group, RosterError> {
        self.groups.create(name, leader, &self.players)
    }

    pub fn update_group(
        &mut self,
        id: GroupId,
        name: Option<&str>,
        leader: Option<Option<PlayerId>>,
    ) -> Result<Group, RosterError> {
        self.groups.update(id, name, leader, &self.players)
    }

    pub fn delete_group(&mut self, id: GroupId) -> Result<Group, RosterError> {
        self.groups.delete(id)
    }

    pub fn add_member(
        &mut self,
        group_id: GroupId,
        player_id: PlayerId,
    ) -> Result<Group, RosterError> {
        self.groups.add_member(group_id, player_id, &self.players)
    }

    pub fn remove_member(
        &mut self,
        group_id: GroupId,
        player_id: PlayerId,
    ) -> Result<Group, RosterError> {
        self.groups.remove_member(group_id, player_id)
    }

    pub fn group_view(&self, id: GroupId) -> Option<GroupView> {
        self.groups.get(id).map(|g| self.view_of(g))
    }

    /// Resolved views for every group, in insertion order.
    pub fn group_views(&self) -> Vec<GroupView> {
        self.groups.iter().map(|g| self.view_of(g)).collect()
    }

    /// Player count per catalog class, zero-filled in catalog order.
    pub fn class_distribution(&self) -> Vec<ClassCount> {
        distribution(self.players.iter().map(|p| p.class))
    }

    pub fn import_players(&mut self, rows: &[RawRow]) -> ImportReport {
        import_rows(&mut self.players, rows)
    }

    fn view_of(&self, group: &Group) -> GroupView {
        let members: Vec<Player> = group
            .members
            .iter()
            .filter_map(|id| self.players.get(id).cloned())
            .collect();
        let leader = group.leader.and_then(|id| self.players.get(id).cloned());
        GroupView {
            id: group.id,
            name: group.name.clone(),
            leader_id: leader.as_ref().map(|p| p.id),
            leader,
            members,
        }
    }
}
