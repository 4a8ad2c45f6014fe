//! Flattened validation report for one game definition

use std::fmt;

use serde::Serialize;

use crate::result::FieldError;

/// Every offending field of a game, by path from the game root
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Game id, or `unknown` when the id itself is invalid
    pub game:   String,
    /// Offending fields in declaration order
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Report for `game` with the given errors
    #[must_use]
    pub fn new(game: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            game: game.into(),
            errors,
        }
    }

    /// `true` when nothing was reported
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "{}: valid", self.game);
        }
        writeln!(f, "{}: {} error(s)", self.game, self.errors.len())?;
        for error in &self.errors {
            writeln!(f, "  {error}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::game::bind_game;

    #[test]
    fn test_report_paths_reach_cue_pointers() {
        let game = bind_game(&json!({
            "id": "game1",
            "name": "Game One",
            "series": "other",
            "objects": [
                {"type": "cue", "id": "game1/a", "name": "A", "duration": 1},
                {"type": "pattern", "id": "game1/p", "name": "P", "cues": [
                    {"id": "game1/a", "beat": 0, "volume": 101}
                ]},
                {"type": "nope", "id": "game1/n"}
            ]
        }));
        let report = game.report();
        assert!(!report.is_valid());
        let paths: Vec<&str> = report.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["objects[1].cues[0].volume", "objects[2]"]);
        assert_eq!(
            report.errors[1].message,
            "Type `nope` is not valid or not implemented"
        );
    }

    #[test]
    fn test_display_lists_every_error() {
        let report = bind_game(&json!({"id": "game1", "objects": []})).report();
        let text = report.to_string();
        assert!(text.starts_with("game1: 2 error(s)"));
        assert!(text.contains("  name: missing required field"));
        assert!(text.contains("  series: missing required field"));
    }

    #[test]
    fn test_valid_report() {
        let report = ValidationReport::new("game1", Vec::new());
        assert!(report.is_valid());
        assert_eq!(report.to_string(), "game1: valid");
    }
}
