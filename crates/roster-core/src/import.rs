use serde::Deserialize;

use crate::error::RosterError;
use crate::player::{Player, PlayerRegistry};

/// One spreadsheet row as parsed, before any validation. Both columns are
/// optional so a ragged row still lands here instead of failing the whole
/// batch. Wire names follow the sheet's column headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Player Name")]
    pub name: Option<String>,
    #[serde(rename = "Class")]
    pub class: Option<String>,
}

impl RawRow {
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            class: Some(class.into()),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub added: Vec<Player>,
    pub errors: Vec<String>,
}

/// Imports rows in order, collecting per-row failures instead of aborting.
///
/// Error strings carry spreadsheet row numbers: row index 0 is line 2 of
/// the sheet, the header being line 1. A failed row adds nothing, so a
/// name can only be claimed once per batch no matter how often it repeats.
pub fn import_rows(players: &mut PlayerRegistry, rows: &[RawRow]) -> ImportReport {
    let mut report = ImportReport::default();
    for (idx, row) in rows.iter().enumerate() {
        let line = idx + 2;
        let name = row.name.as_deref().unwrap_or("").trim();
        let class = row.class.as_deref().unwrap_or("").trim();
        match players.create(name, class) {
            Ok(player) => report.added.push(player),
            Err(RosterError::MissingPlayerField) => report
                .errors
                .push(format!("Row {line}: Missing player name or class")),
            Err(RosterError::InvalidClass(class)) => report.errors.push(format!(
                "Row {line}: Invalid class '{class}' for player '{name}'"
            )),
            Err(RosterError::DuplicatePlayerName(name)) => report
                .errors
                .push(format!("Row {line}: Player '{name}' already exists")),
            Err(err) => report.errors.push(format!("Row {line}: {err}")),
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_batch_reports_row_numbers() {
        let mut players = PlayerRegistry::new();
        players.create("Alice", "Rune Knight").unwrap();

        let rows = vec![
            RawRow::new("Dave", "Warlock"),
            RawRow::new("Eve", "Ninja"),
            RawRow::new("Alice", "Ranger"),
        ];
        let report = import_rows(&mut players, &rows);
        assert_eq!(report.added.len(), 1);
        assert_eq!(report.added[0].name, "Dave");
        assert_eq!(
            report.errors,
            vec![
                "Row 3: Invalid class 'Ninja' for player 'Eve'",
                "Row 4: Player 'Alice' already exists",
            ]
        );
        assert_eq!(players.len(), 2);
    }

    #[test]
    fn ragged_rows_count_as_missing_fields() {
        let mut players = PlayerRegistry::new();
        let rows = vec![
            RawRow {
                name: None,
                class: Some("Warlock".into()),
            },
            RawRow {
                name: Some("Mia".into()),
                class: None,
            },
            RawRow::new("  ", "Warlock"),
        ];
        let report = import_rows(&mut players, &rows);
        assert!(report.added.is_empty());
        assert_eq!(
            report.errors,
            vec![
                "Row 2: Missing player name or class",
                "Row 3: Missing player name or class",
                "Row 4: Missing player name or class",
            ]
        );
    }

    #[test]
    fn duplicates_within_one_batch_collide() {
        let mut players = PlayerRegistry::new();
        let rows = vec![
            RawRow::new("", "Ranger"),
            RawRow::new("Carl", "Mechanic"),
            RawRow::new("Carl", "Ranger"),
        ];
        let report = import_rows(&mut players, &rows);
        assert_eq!(report.added.len(), 1);
        assert_eq!(report.added[0].name, "Carl");
        assert_eq!(report.added[0].class.as_str(), "Mechanic");
        assert_eq!(
            report.errors,
            vec![
                "Row 2: Missing player name or class",
                "Row 4: Player 'Carl' already exists",
            ]
        );
    }

    #[test]
    fn values_are_trimmed_before_any_check() {
        let mut players = PlayerRegistry::new();
        let rows = vec![RawRow::new("  Pax  ", " Wanderer ")];
        let report = import_rows(&mut players, &rows);
        assert!(report.errors.is_empty());
        assert_eq!(report.added[0].name, "Pax");
        assert_eq!(report.added[0].class.as_str(), "Wanderer");
    }

    #[test]
    fn ids_continue_from_existing_registry() {
        let mut players = PlayerRegistry::new();
        players.create("Alice", "Ranger").unwrap();
        let report = import_rows(&mut players, &[RawRow::new("Bob", "Sorcerer")]);
        assert_eq!(report.added[0].id, 2);
    }
}
