//! Constants and static regex patterns shared by the transformers and schemas

use std::sync::LazyLock;

use regex::Regex;

/// General object ids: letters, digits, `_`, `-`, `/` and the `*` game wildcard
#[allow(clippy::expect_used)]
pub static ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_/\-*]+$").expect("id pattern compiles"));

/// Game ids are stricter than object ids: no `/` and no `*`
#[allow(clippy::expect_used)]
pub static GAME_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\-]+$").expect("game id pattern compiles"));

/// Inclusive volume range for cue pointers, in percent
pub const VOLUME_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

/// Volume used when a cue pointer does not specify one
pub const DEFAULT_VOLUME: i64 = 100;

/// Value written into cue-pointer `beat`/`duration` when the parent kind ignores them
pub const CUE_POINTER_NOT_USED: f64 = 0.0;

/// Discriminator key read by the datamodel dispatcher
pub const TYPE_KEY: &str = "type";

/// Placeholder used in messages when an object's id could not be validated
pub const UNKNOWN_ID: &str = "unknown";

/// String token that the language transformer maps to `Language::None`
pub const LANGUAGE_NONE_TOKEN: &str = "null";

// Datamodel discriminators
/// `type` of single-sound cues
pub const TYPE_CUE: &str = "cue";
/// `type` of patterns
pub const TYPE_PATTERN: &str = "pattern";
/// `type` of equidistant patterns
pub const TYPE_EQUIDISTANT: &str = "equidistant";
/// `type` of keep-the-beat patterns
pub const TYPE_KEEP_THE_BEAT: &str = "keepTheBeat";
/// `type` of random cues
pub const TYPE_RANDOM_CUE: &str = "randomCue";
/// `type` of the end-of-remix marker
pub const TYPE_END_ENTITY: &str = "endEntity";
/// `type` of the screen shake entity
pub const TYPE_SHAKE_ENTITY: &str = "shakeEntity";
/// `type` of the texture entity
pub const TYPE_TEXTURE_ENTITY: &str = "textureEntity";
/// `type` of subtitle entities
pub const TYPE_SUBTITLE_ENTITY: &str = "subtitleEntity";
/// `type` of the tape measure
pub const TYPE_TAPE_MEASURE: &str = "tapeMeasure";
/// `type` of playalong entities
pub const TYPE_PLAYALONG_ENTITY: &str = "playalongEntity";
/// `type` of the music distort entity
pub const TYPE_MUSIC_DISTORT_ENTITY: &str = "musicDistortEntity";
/// `type` of the pitch bender entity
pub const TYPE_PITCH_BENDER_ENTITY: &str = "pitchBenderEntity";
