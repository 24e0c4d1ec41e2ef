use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RosterError;
use crate::player::{PlayerId, PlayerRegistry};

pub type GroupId = u64;

/// Membership set with stable display order.
///
/// A sequence plus a membership index: duplicate checks and leader lookups
/// stay O(1) while listings keep insertion order. Serialized as a plain id
/// array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberSet {
    order: Vec<PlayerId>,
    index: HashSet<PlayerId>,
}

impl MemberSet {
    /// Returns false (and leaves the set unchanged) if the id was already
    /// present.
    pub fn insert(&mut self, id: PlayerId) -> bool {
        if !self.index.insert(id) {
            return false;
        }
        self.order.push(id);
        true
    }

    /// Returns false if the id was not a member.
    pub fn remove(&mut self, id: PlayerId) -> bool {
        if !self.index.remove(&id) {
            return false;
        }
        self.order.retain(|m| *m != id);
        true
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.index.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.order.iter().copied()
    }

    pub fn as_slice(&self) -> &[PlayerId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<PlayerId> for MemberSet {
    fn from_iter<I: IntoIterator<Item = PlayerId>>(iter: I) -> Self {
        let mut set = MemberSet::default();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl Serialize for MemberSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.order.iter())
    }
}

impl<'de> Deserialize<'de> for MemberSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Vec::<PlayerId>::deserialize(deserializer)?;
        Ok(ids.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(rename = "leaderId")]
    pub leader: Option<PlayerId>,
    pub members: MemberSet,
}

/// Sole owner of group records and their player-id back-references.
///
/// Groups hold player ids, never player values; operations that must resolve
/// a player take the player registry as a read-only view so ownership stays
/// one-directional.
#[derive(Debug, Default)]
pub struct GroupRegistry {
    groups: BTreeMap<GroupId, Group>,
    by_name: HashMap<String, GroupId>,
    next_id: GroupId,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A leader given at creation must resolve to a player but is not
    /// required to be a member yet; the group starts empty, so only the
    /// update path enforces membership.
    pub fn create(
        &mut self,
        name: &str,
        leader: Option<PlayerId>,
        players: &PlayerRegistry,
    ) -> Result<Group, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::MissingGroupName);
        }
        if self.by_name.contains_key(name) {
            return Err(RosterError::DuplicateGroupName(name.to_string()));
        }
        if let Some(id) = leader {
            if !players.contains(id) {
                return Err(RosterError::LeaderNotFound(id));
            }
        }
        self.next_id += 1;
        let group = Group {
            id: self.next_id,
            name: name.to_string(),
            leader,
            members: MemberSet::default(),
        };
        self.by_name.insert(group.name.clone(), group.id);
        self.groups.insert(group.id, group.clone());
        Ok(group)
    }

    /// Partial update. `leader` is tri-state: `None` leaves the slot
    /// unchanged, `Some(None)` clears it, `Some(Some(id))` assigns a leader
    /// that must resolve to a player and already be a member.
    pub fn update(
        &mut self,
        id: GroupId,
        name: Option<&str>,
        leader: Option<Option<PlayerId>>,
        players: &PlayerRegistry,
    ) -> Result<Group, RosterError> {
        let Some(current) = self.groups.get(&id) else {
            return Err(RosterError::GroupNotFound(id));
        };
        if name.is_none() && leader.is_none() {
            return Err(RosterError::EmptyUpdate);
        }
        let renamed = match name {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(RosterError::MissingGroupName);
                }
                match self.by_name.get(trimmed) {
                    Some(&owner) if owner != id => {
                        return Err(RosterError::DuplicateGroupName(trimmed.to_string()));
                    }
                    _ => Some(trimmed.to_string()),
                }
            }
            None => None,
        };
        if let Some(Some(pid)) = leader {
            if !players.contains(pid) {
                return Err(RosterError::LeaderNotFound(pid));
            }
            if !current.members.contains(pid) {
                return Err(RosterError::LeaderNotMember(pid));
            }
        }

        let Some(group) = self.groups.get_mut(&id) else {
            return Err(RosterError::GroupNotFound(id));
        };
        if let Some(new_name) = renamed {
            self.by_name.remove(&group.name);
            self.by_name.insert(new_name.clone(), id);
            group.name = new_name;
        }
        if let Some(new_leader) = leader {
            group.leader = new_leader;
        }
        Ok(group.clone())
    }

    pub fn delete(&mut self, id: GroupId) -> Result<Group, RosterError> {
        let group = self
            .groups
            .remove(&id)
            .ok_or(RosterError::GroupNotFound(id))?;
        self.by_name.remove(&group.name);
        Ok(group)
    }

    pub fn add_member(
        &mut self,
        group_id: GroupId,
        player_id: PlayerId,
        players: &PlayerRegistry,
    ) -> Result<Group, RosterError> {
        let Some(group) = self.groups.get_mut(&group_id) else {
            return Err(RosterError::GroupNotFound(group_id));
        };
        if !players.contains(player_id) {
            return Err(RosterError::PlayerNotFound(player_id));
        }
        if !group.members.insert(player_id) {
            return Err(RosterError::AlreadyMember(player_id));
        }
        Ok(group.clone())
    }

    /// Removing the current leader clears the leader slot, keeping the
    /// leader-is-a-member rule intact.
    pub fn remove_member(
        &mut self,
        group_id: GroupId,
        player_id: PlayerId,
    ) -> Result<Group, RosterError> {
        let Some(group) = self.groups.get_mut(&group_id) else {
            return Err(RosterError::GroupNotFound(group_id));
        };
        if !group.members.remove(player_id) {
            return Err(RosterError::NotMember(player_id));
        }
        if group.leader == Some(player_id) {
            group.leader = None;
        }
        Ok(group.clone())
    }

    /// Drop every reference to a player: membership entries and leader
    /// slots. Returns how many groups were touched.
    pub(crate) fn purge_player(&mut self, player_id: PlayerId) -> usize {
        let mut touched = 0;
        for group in self.groups.values_mut() {
            let mut hit = group.members.remove(player_id);
            if group.leader == Some(player_id) {
                group.leader = None;
                hit = true;
            }
            if hit {
                touched += 1;
            }
        }
        touched
    }

    pub fn get(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    /// Groups in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players_with(names: &[&str]) -> PlayerRegistry {
        let mut reg = PlayerRegistry::new();
        for name in names {
            reg.create(name, "Ranger").unwrap();
        }
        reg
    }

    #[test]
    fn member_set_keeps_order_and_rejects_duplicates() {
        let mut set = MemberSet::default();
        assert!(set.insert(3));
        assert!(set.insert(1));
        assert!(set.insert(2));
        assert!(!set.insert(1));
        assert_eq!(set.as_slice(), [3, 1, 2]);
        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert_eq!(set.as_slice(), [3, 2]);
    }

    #[test]
    fn member_set_serializes_as_id_array() {
        let set: MemberSet = [5, 9, 5, 2].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[5,9,2]");
        let back: MemberSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn create_checks_name_and_leader_resolution() {
        let players = players_with(&["Alice"]);
        let mut reg = GroupRegistry::new();
        assert_eq!(
            reg.create("  ", None, &players),
            Err(RosterError::MissingGroupName)
        );
        assert_eq!(
            reg.create("Raid", Some(42), &players),
            Err(RosterError::LeaderNotFound(42))
        );
        let g = reg.create("Raid", Some(1), &players).unwrap();
        // Creation does not require the leader to be a member.
        assert_eq!(g.leader, Some(1));
        assert!(g.members.is_empty());
        assert_eq!(
            reg.create("Raid", None, &players),
            Err(RosterError::DuplicateGroupName("Raid".into()))
        );
    }

    #[test]
    fn update_requires_leader_membership() {
        let players = players_with(&["Alice", "Bob"]);
        let mut reg = GroupRegistry::new();
        let g = reg.create("Raid", None, &players).unwrap();
        reg.add_member(g.id, 1, &players).unwrap();

        assert_eq!(
            reg.update(g.id, None, Some(Some(7)), &players),
            Err(RosterError::LeaderNotFound(7))
        );
        assert_eq!(
            reg.update(g.id, None, Some(Some(2)), &players),
            Err(RosterError::LeaderNotMember(2))
        );
        let g = reg.update(g.id, None, Some(Some(1)), &players).unwrap();
        assert_eq!(g.leader, Some(1));
        // Explicit null clears the slot; absent leaves it alone.
        let g = reg.update(g.id, Some("Raid Two"), None, &players).unwrap();
        assert_eq!(g.leader, Some(1));
        let g = reg.update(g.id, None, Some(None), &players).unwrap();
        assert_eq!(g.leader, None);
    }

    #[test]
    fn update_rejects_vacuous_and_colliding_requests() {
        let players = players_with(&["Alice"]);
        let mut reg = GroupRegistry::new();
        let a = reg.create("Alpha", None, &players).unwrap();
        reg.create("Beta", None, &players).unwrap();
        assert_eq!(
            reg.update(a.id, None, None, &players),
            Err(RosterError::EmptyUpdate)
        );
        assert_eq!(
            reg.update(a.id, Some("Beta"), None, &players),
            Err(RosterError::DuplicateGroupName("Beta".into()))
        );
        assert!(reg.update(a.id, Some("Alpha"), None, &players).is_ok());
        assert_eq!(
            reg.update(99, Some("Gamma"), None, &players),
            Err(RosterError::GroupNotFound(99))
        );
    }

    #[test]
    fn membership_round_trip_with_leader_clearing() {
        let players = players_with(&["Alice", "Bob"]);
        let mut reg = GroupRegistry::new();
        let g = reg.create("Raid", None, &players).unwrap();
        reg.add_member(g.id, 1, &players).unwrap();
        let g = reg.add_member(g.id, 2, &players).unwrap();
        assert_eq!(g.members.as_slice(), [1, 2]);
        assert_eq!(
            reg.add_member(g.id, 2, &players),
            Err(RosterError::AlreadyMember(2))
        );
        assert_eq!(
            reg.add_member(g.id, 77, &players),
            Err(RosterError::PlayerNotFound(77))
        );

        let g = reg.update(g.id, None, Some(Some(2)), &players).unwrap();
        assert_eq!(g.leader, Some(2));
        let g = reg.remove_member(g.id, 2).unwrap();
        assert_eq!(g.leader, None);
        assert_eq!(g.members.as_slice(), [1]);
        assert_eq!(reg.remove_member(g.id, 2), Err(RosterError::NotMember(2)));
    }

    #[test]
    fn purge_player_sweeps_membership_and_leader_slots() {
        let players = players_with(&["Alice", "Bob"]);
        let mut reg = GroupRegistry::new();
        let a = reg.create("Alpha", None, &players).unwrap();
        let b = reg.create("Beta", None, &players).unwrap();
        reg.add_member(a.id, 1, &players).unwrap();
        reg.add_member(a.id, 2, &players).unwrap();
        reg.update(a.id, None, Some(Some(2)), &players).unwrap();
        reg.add_member(b.id, 1, &players).unwrap();

        assert_eq!(reg.purge_player(2), 1);
        let a = reg.get(a.id).unwrap();
        assert_eq!(a.leader, None);
        assert_eq!(a.members.as_slice(), [1]);
        let b = reg.get(b.id).unwrap();
        assert_eq!(b.members.as_slice(), [1]);
        assert_eq!(reg.purge_player(42), 0);
    }

    #[test]
    fn group_names_are_a_namespace_of_their_own() {
        let players = players_with(&["Alice"]);
        let mut reg = GroupRegistry::new();
        // A group may share its name with a player.
        assert!(reg.create("Alice", None, &players).is_ok());
    }
}
