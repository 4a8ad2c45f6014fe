//! Id transformers

use serde_json::Value;

use super::primitive::{string, string_array};
use crate::constants::{GAME_ID_REGEX, ID_REGEX};
use crate::result::FieldResult;

/// Game id: `[A-Za-z0-9_-]+`
pub fn game_id(value: &Value) -> FieldResult<String> {
    string(value).and_then(|s| {
        if GAME_ID_REGEX.is_match(&s) {
            FieldResult::Success(s)
        } else {
            FieldResult::failure(
                value,
                format!("Game id `{s}` must only contain letters, digits, `_` and `-`"),
            )
        }
    })
}

/// Object id: `[A-Za-z0-9_/*-]+`
pub fn id(value: &Value) -> FieldResult<String> {
    string(value).and_then(|s| check_id(value, s))
}

/// Array of object ids, each checked like [`id`]
pub fn response_ids(value: &Value) -> FieldResult<Vec<String>> {
    string_array(value).and_then(|ids| {
        match ids.iter().find(|candidate| !ID_REGEX.is_match(candidate)) {
            Some(bad) => FieldResult::failure(value, format!("Response id `{bad}` is not a valid id")),
            None => FieldResult::Success(ids),
        }
    })
}

fn check_id(raw: &Value, s: String) -> FieldResult<String> {
    if ID_REGEX.is_match(&s) {
        FieldResult::Success(s)
    } else {
        FieldResult::failure(
            raw,
            format!("Id `{s}` must only contain letters, digits, `_`, `-`, `/` and `*`"),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_id_accepts_wildcard_and_slash() {
        for valid in ["karateman/hit", "*_common/applause", "a-b_c", "X9"] {
            assert_eq!(id(&json!(valid)), FieldResult::Success(valid.to_string()));
        }
    }

    #[test]
    fn test_id_rejects_other_characters() {
        for invalid in ["a b", "", "bad.id", "é", "a:b"] {
            assert!(!id(&json!(invalid)).is_success(), "{invalid} should fail");
        }
        assert!(!id(&json!(3)).is_success());
    }

    #[test]
    fn test_game_id_is_stricter_than_id() {
        assert!(game_id(&json!("karateManFever")).is_success());
        assert!(game_id(&json!("game-1_b")).is_success());
        for invalid in ["game/one", "game*", "*"] {
            assert!(id(&json!(invalid)).is_success());
            assert!(!game_id(&json!(invalid)).is_success(), "{invalid} should fail");
        }
    }

    #[test]
    fn test_response_ids_checks_every_element() {
        assert!(response_ids(&json!(["game/a", "*/b"])).is_success());
        assert!(response_ids(&json!([])).is_success());
        let FieldResult::Failure(failure) = response_ids(&json!(["ok", "not ok"])) else {
            unreachable!("space is not allowed in ids");
        };
        assert!(failure.message.contains("not ok"));
        assert!(!response_ids(&json!(["ok", 1])).is_success());
    }
}
