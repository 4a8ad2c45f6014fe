//! Transformers that look a string up in a fixed enumeration

use serde_json::Value;

use super::common::one_of;
use super::primitive::string;
use crate::constants::LANGUAGE_NONE_TOKEN;
use crate::result::FieldResult;
use crate::types::{
    Language, PlayalongInput, PlayalongMethod, Series, SoundFileExtension, SubtitleType,
};

/// Run `lookup` on a string value, failing with the accepted ids listed
fn lookup<T>(
    value: &Value,
    what: &str,
    accepted: impl FnOnce() -> String,
    find: impl FnOnce(&str) -> Option<T>,
) -> FieldResult<T> {
    string(value).and_then(|s| match find(&s) {
        Some(found) => FieldResult::Success(found),
        None => FieldResult::failure(
            value,
            format!("{what} `{s}` is not one of: {}", accepted()),
        ),
    })
}

/// `ogg`, `wav` or `mp3`, any case
pub fn sound_file_extension(value: &Value) -> FieldResult<SoundFileExtension> {
    lookup(
        value,
        "File extension",
        || one_of(SoundFileExtension::VALUES.map(SoundFileExtension::extension)),
        SoundFileExtension::from_extension,
    )
}

/// Game series, any case
pub fn series(value: &Value) -> FieldResult<Series> {
    lookup(
        value,
        "Series",
        || one_of(Series::VALUES.map(Series::id)),
        Series::from_id,
    )
}

/// Subtitle entity kind
pub fn subtitle_type(value: &Value) -> FieldResult<SubtitleType> {
    lookup(
        value,
        "Subtitle type",
        || one_of(SubtitleType::VALUES.map(SubtitleType::id)),
        SubtitleType::from_id,
    )
}

/// Playalong input by current id or deprecated alias
pub fn playalong_input(value: &Value) -> FieldResult<PlayalongInput> {
    lookup(
        value,
        "Playalong input",
        || one_of(PlayalongInput::VALUES.map(PlayalongInput::id)),
        PlayalongInput::from_id,
    )
}

/// Playalong method
pub fn playalong_method(value: &Value) -> FieldResult<PlayalongMethod> {
    lookup(
        value,
        "Playalong method",
        || one_of(PlayalongMethod::VALUES.map(PlayalongMethod::id)),
        PlayalongMethod::from_id,
    )
}

/// Language code; the string `"null"` means no language
pub fn language(value: &Value) -> FieldResult<Language> {
    lookup(
        value,
        "Language",
        || {
            let mut codes: Vec<&str> = Language::VALUES.iter().filter_map(|l| l.code()).collect();
            codes.push(LANGUAGE_NONE_TOKEN);
            one_of(codes)
        },
        |code| {
            if code == LANGUAGE_NONE_TOKEN {
                Some(Language::None)
            } else {
                Language::from_code(code)
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_sound_file_extension_ignores_case() {
        assert_eq!(
            sound_file_extension(&json!("WAV")),
            FieldResult::Success(SoundFileExtension::Wav)
        );
        let FieldResult::Failure(failure) = sound_file_extension(&json!("flac")) else {
            unreachable!("flac is not supported");
        };
        assert_eq!(failure.message, "File extension `flac` is not one of: ogg, wav, mp3");
    }

    #[test]
    fn test_series_lookup() {
        assert_eq!(series(&json!("MegaMix")), FieldResult::Success(Series::Megamix));
        assert!(!series(&json!("gba")).is_success());
        assert!(!series(&json!(1)).is_success());
    }

    #[test]
    fn test_subtitle_type_is_exact() {
        assert_eq!(
            subtitle_type(&json!("songArtist")),
            FieldResult::Success(SubtitleType::SongArtist)
        );
        assert!(!subtitle_type(&json!("songartist")).is_success());
    }

    #[test]
    fn test_playalong_lookups() {
        assert_eq!(
            playalong_input(&json!("touch_lift")),
            FieldResult::Success(PlayalongInput::TouchRelease)
        );
        assert_eq!(
            playalong_method(&json!("LONG_PRESS")),
            FieldResult::Success(PlayalongMethod::LongPress)
        );
        assert!(!playalong_method(&json!("press")).is_success());
    }

    #[test]
    fn test_language_null_token() {
        assert_eq!(language(&json!("null")), FieldResult::Success(Language::None));
        assert_eq!(language(&json!("JA")), FieldResult::Success(Language::Japanese));
        assert!(!language(&json!(null)).is_success());
        assert!(!language(&json!("xx")).is_success());
    }
}
