//! Game definition root

use serde_json::Value;
use tracing::debug;

use crate::constants::UNKNOWN_ID;
use crate::datamodel::{DatamodelObject, transform_datamodel};
use crate::property::Property;
use crate::records::Game;
use crate::report::ValidationReport;
use crate::result::{Failure, FieldResult};
use crate::schema::{AnyProperty, Reconstruct, Reconstruction, Struct, aggregate, bind_object};
use crate::transformers::{
    boolean, game_id, int, language, non_empty_string, nullable, series, string, string_array,
    to_list, type_mismatch,
};
use crate::types::{Language, Series};

/// Schema for a whole game definition
#[derive(Debug, Clone)]
pub struct GameObject {
    /// `id`, required game id
    pub id:            Property<String>,
    /// `name`, required
    pub name:          Property<String>,
    /// `series`, required
    pub series:        Property<Series>,
    /// `objects`, one result per datamodel
    pub objects:       Property<Vec<FieldResult<DatamodelObject>>>,
    /// `group`
    pub group:         Property<Option<String>>,
    /// `groupDefault`
    pub group_default: Property<bool>,
    /// `priority`
    pub priority:      Property<i64>,
    /// `searchHints`
    pub search_hints:  Property<Vec<String>>,
    /// `noDisplay`
    pub no_display:    Property<bool>,
    /// `language`
    pub language:      Property<Language>,
}

impl GameObject {
    /// Empty schema ready for binding
    #[must_use]
    pub fn new() -> Self {
        Self {
            id:            Property::required("id", game_id, String::new()),
            name:          Property::required("name", non_empty_string, String::new()),
            series:        Property::required("series", series, Series::Other),
            objects:       Property::required("objects", to_list(transform_datamodel), Vec::new()),
            group:         Property::optional("group", nullable(string), None),
            group_default: Property::optional("groupDefault", boolean, false),
            priority:      Property::optional("priority", int, 0),
            search_hints:  Property::optional("searchHints", string_array, Vec::new()),
            no_display:    Property::optional("noDisplay", boolean, false),
            language:      Property::optional("language", language, Language::None),
        }
    }

    /// Validated id, or `unknown` for messages
    #[must_use]
    pub fn id_or_unknown(&self) -> &str {
        self.id.value().map_or(UNKNOWN_ID, String::as_str)
    }

    /// Bound datamodels that validated, in input order
    pub fn valid_objects(&self) -> impl Iterator<Item = &DatamodelObject> {
        self.objects
            .value()
            .into_iter()
            .flatten()
            .filter_map(FieldResult::success)
    }

    /// Every offending field, with paths from the game root
    #[must_use]
    pub fn report(&self) -> ValidationReport {
        ValidationReport::new(self.id_or_unknown(), self.unsuccessful_fields())
    }
}

impl Default for GameObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Struct for GameObject {
    fn properties(&self) -> Vec<&dyn AnyProperty> {
        vec![
            &self.id as &dyn AnyProperty,
            &self.name,
            &self.series,
            &self.objects,
            &self.group,
            &self.group_default,
            &self.priority,
            &self.search_hints,
            &self.no_display,
            &self.language,
        ]
    }

    fn properties_mut(&mut self) -> Vec<&mut dyn AnyProperty> {
        vec![
            &mut self.id as &mut dyn AnyProperty,
            &mut self.name,
            &mut self.series,
            &mut self.objects,
            &mut self.group,
            &mut self.group_default,
            &mut self.priority,
            &mut self.search_hints,
            &mut self.no_display,
            &mut self.language,
        ]
    }
}

impl Reconstruct for GameObject {
    type Record = Game;

    fn reconstruct(&self, r: &mut Reconstruction) -> Game {
        Game {
            id:            r.take(&self.id),
            name:          r.take(&self.name),
            series:        r.take(&self.series),
            group:         r.take(&self.group),
            group_default: r.take(&self.group_default),
            priority:      r.take(&self.priority),
            search_hints:  r.take(&self.search_hints),
            no_display:    r.take(&self.no_display),
            language:      r.take(&self.language),
            objects:       r.take_list(&self.objects, |datamodel, r| datamodel.reconstruct(r)),
        }
    }
}

/// Bind a game from its JSON tree without aggregating; the returned struct
/// always exists, however broken the input
#[must_use]
pub fn bind_game(value: &Value) -> GameObject {
    let mut game = GameObject::new();
    if let Value::Object(object) = value {
        bind_object(&mut game, object);
    }
    debug!(id = game.id_or_unknown(), "bound game");
    game
}

/// Validate a game the way the dispatcher validates datamodels: `Success`
/// only if every field and every datamodel is
pub fn parse_game(value: &Value) -> FieldResult<GameObject> {
    if !value.is_object() {
        return type_mismatch("object", value);
    }
    aggregate(bind_game(value), value, |game| {
        format!("Error in game {}", game.id_or_unknown())
    })
}

/// Report for a whole definition. A root that is not an object yields a
/// single type-mismatch entry instead of one entry per missing field.
#[must_use]
pub fn validate_game(value: &Value) -> ValidationReport {
    match parse_game(value) {
        FieldResult::Success(game) => game.report(),
        FieldResult::Failure(Failure {
            partial: Some(game),
            ..
        }) => game.report(),
        other => ValidationReport::new(UNKNOWN_ID, other.errors_at("")),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
    use serde_json::json;

    use super::*;

    #[test]
    fn test_root_defaults() {
        let game = bind_game(&json!({
            "id": "game1", "name": "Game One", "series": "fever", "objects": []
        }));
        let record = game.produce_perfect_adt().unwrap();
        assert_eq!(record.series, Series::Fever);
        assert_eq!(record.group, None);
        assert!(!record.group_default);
        assert_eq!(record.priority, 0);
        assert!(record.search_hints.is_empty());
        assert_eq!(record.language, Language::None);
    }

    #[test]
    fn test_game_id_rejects_slash() {
        let FieldResult::Failure(failure) = parse_game(&json!({
            "id": "game/1", "name": "G", "series": "other", "objects": []
        })) else {
            panic!("slash is not allowed in game ids");
        };
        assert_eq!(failure.message, "Error in game unknown");
        assert_eq!(failure.causes[0].path, "id");
    }

    #[test]
    fn test_missing_required_fields_are_reported() {
        let game = bind_game(&json!({}));
        let paths: Vec<String> = game
            .unsuccessful_fields()
            .into_iter()
            .map(|error| error.path)
            .collect();
        assert_eq!(paths, vec!["id", "name", "series", "objects"]);
    }

    #[test]
    fn test_non_object_game_is_type_mismatch() {
        assert!(!parse_game(&json!("game1")).is_success());
        assert_eq!(bind_game(&json!(null)).unsuccessful_fields().len(), 4);
    }

    #[test]
    fn test_validate_game_reports_non_object_root_once() {
        let report = validate_game(&json!([]));
        assert_eq!(report.game, "unknown");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, "");
        assert_eq!(report.errors[0].message, "Expected object, got array");

        let report = validate_game(&json!({"id": "game1", "series": "other", "objects": []}));
        assert_eq!(report.game, "game1");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, "name");

        let valid = json!({"id": "game1", "name": "G", "series": "other", "objects": []});
        assert!(validate_game(&valid).is_valid());
    }

    #[test]
    fn test_optional_root_fields() {
        let game = bind_game(&json!({
            "id": "game1",
            "name": "Game One",
            "series": "megamix",
            "objects": [],
            "group": "Game",
            "groupDefault": true,
            "priority": 3,
            "searchHints": ["one"],
            "noDisplay": true,
            "language": "null"
        }));
        let record = game.produce_perfect_adt().unwrap();
        assert_eq!(record.group.as_deref(), Some("Game"));
        assert!(record.group_default);
        assert_eq!(record.priority, 3);
        assert!(record.no_display);
        assert_eq!(record.language, Language::None);
    }

    #[test]
    fn test_valid_objects_skips_failures() {
        let game = bind_game(&json!({
            "id": "game1", "name": "Game One", "series": "other",
            "objects": [
                {"type": "cue", "id": "game1/a", "name": "A", "duration": 1},
                {"type": "cue", "id": "game1/b", "name": "B"}
            ]
        }));
        let ids: Vec<&str> = game.valid_objects().map(|o| o.base().id_or_unknown()).collect();
        assert_eq!(ids, vec!["game1/a"]);
    }
}
