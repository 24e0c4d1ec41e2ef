use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::catalog::PlayerClass;
use crate::error::RosterError;

pub type PlayerId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub class: PlayerClass,
}

/// Sole owner of player records.
///
/// Ids are assigned monotonically and never reused within a process
/// lifetime, so iterating the id-keyed map yields insertion order for free.
/// Name uniqueness (exact, case-sensitive) is backed by a side index kept in
/// sync on every create/rename/remove.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: BTreeMap<PlayerId, Player>,
    by_name: HashMap<String, PlayerId>,
    next_id: PlayerId,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: &str, class_name: &str) -> Result<Player, RosterError> {
        let name = name.trim();
        let class_name = class_name.trim();
        if name.is_empty() || class_name.is_empty() {
            return Err(RosterError::MissingPlayerField);
        }
        let class = PlayerClass::parse(class_name)
            .ok_or_else(|| RosterError::InvalidClass(class_name.to_string()))?;
        if self.by_name.contains_key(name) {
            return Err(RosterError::DuplicatePlayerName(name.to_string()));
        }
        self.next_id += 1;
        let player = Player {
            id: self.next_id,
            name: name.to_string(),
            class,
        };
        self.by_name.insert(player.name.clone(), player.id);
        self.players.insert(player.id, player.clone());
        Ok(player)
    }

    /// Partial update; the duplicate-name check excludes the record itself.
    pub fn update(
        &mut self,
        id: PlayerId,
        name: Option<&str>,
        class_name: Option<&str>,
    ) -> Result<Player, RosterError> {
        if !self.players.contains_key(&id) {
            return Err(RosterError::PlayerNotFound(id));
        }
        if name.is_none() && class_name.is_none() {
            return Err(RosterError::EmptyUpdate);
        }
        let class = class_name
            .map(|raw| {
                let trimmed = raw.trim();
                PlayerClass::parse(trimmed)
                    .ok_or_else(|| RosterError::InvalidClass(trimmed.to_string()))
            })
            .transpose()?;
        let renamed = name
            .map(|raw| {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(RosterError::MissingPlayerField);
                }
                match self.by_name.get(trimmed) {
                    Some(&owner) if owner != id => {
                        Err(RosterError::DuplicatePlayerName(trimmed.to_string()))
                    }
                    _ => Ok(trimmed.to_string()),
                }
            })
            .transpose()?;

        let Some(player) = self.players.get_mut(&id) else {
            return Err(RosterError::PlayerNotFound(id));
        };
        if let Some(new_name) = renamed {
            self.by_name.remove(&player.name);
            self.by_name.insert(new_name.clone(), id);
            player.name = new_name;
        }
        if let Some(new_class) = class {
            player.class = new_class;
        }
        Ok(player.clone())
    }

    /// Raw removal. Kept crate-private so the only public deletion path is
    /// [`crate::Roster::delete_player`], which also sweeps group references.
    pub(crate) fn remove(&mut self, id: PlayerId) -> Result<Player, RosterError> {
        let player = self
            .players
            .remove(&id)
            .ok_or(RosterError::PlayerNotFound(id))?;
        self.by_name.remove(&player.name);
        Ok(player)
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    pub fn name_taken(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Players in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
