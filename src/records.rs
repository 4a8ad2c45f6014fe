//! Plain immutable records produced by reconstruction
//!
//! Serialization uses the same key names the definition files use, so a
//! serialized strict record parses back into an equal record.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::{
    Language, PlayalongInput, PlayalongMethod, Series, SoundFileExtension, SubtitleType,
};

/// A game definition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Game id
    pub id:            String,
    /// Display name
    pub name:          String,
    /// Game series
    pub series:        Series,
    /// Group this game is listed under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group:         Option<String>,
    /// Whether this game is its group's default
    pub group_default: bool,
    /// Sort priority
    pub priority:      i64,
    /// Extra search terms
    pub search_hints:  Vec<String>,
    /// Hidden from the game list
    pub no_display:    bool,
    /// Voice line language
    #[serde(skip_serializing_if = "Language::is_none")]
    pub language:      Language,
    /// Datamodels in input order
    pub objects:       Vec<Datamodel>,
}

/// Fields every datamodel carries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatamodelInfo {
    /// Object id
    pub id:             String,
    /// Display name
    pub name:           String,
    /// Older ids this object replaces
    #[serde(rename = "deprecatedIDs")]
    pub deprecated_ids: Vec<String>,
}

/// One playable or placeable entry of a game
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Datamodel {
    /// A single sound
    #[serde(rename = "cue")]
    Cue(Cue),
    /// Cues at explicit beats
    #[serde(rename = "pattern")]
    Pattern(Pattern),
    /// Cues evenly spaced
    #[serde(rename = "equidistant")]
    Equidistant(Equidistant),
    /// A repeating sequence of cues
    #[serde(rename = "keepTheBeat")]
    KeepTheBeat(KeepTheBeat),
    /// One cue picked at random
    #[serde(rename = "randomCue")]
    RandomCue(RandomCue),
    /// End-of-remix marker
    #[serde(rename = "endEntity")]
    EndRemixEntity(EndRemixEntity),
    /// Screen shake
    #[serde(rename = "shakeEntity")]
    ShakeEntity(ShakeEntity),
    /// Texture overlay
    #[serde(rename = "textureEntity")]
    TextureEntity(TextureEntity),
    /// Subtitle or title card
    #[serde(rename = "subtitleEntity")]
    SubtitleEntity(SubtitleEntity),
    /// Editor measuring tool
    #[serde(rename = "tapeMeasure")]
    TapeMeasure(TapeMeasure),
    /// Playalong input prompt
    #[serde(rename = "playalongEntity")]
    PlayalongEntity(PlayalongEntity),
    /// Music distortion effect
    #[serde(rename = "musicDistortEntity")]
    MusicDistortEntity(MusicDistortEntity),
    /// Music pitch bend effect
    #[serde(rename = "pitchBenderEntity")]
    PitchBenderEntity(PitchBenderEntity),
}

impl Datamodel {
    /// Common fields, whatever the kind
    #[must_use]
    pub const fn info(&self) -> &DatamodelInfo {
        match self {
            Self::Cue(cue) => &cue.info,
            Self::Pattern(pattern) => &pattern.info,
            Self::Equidistant(equidistant) => &equidistant.info,
            Self::KeepTheBeat(keep_the_beat) => &keep_the_beat.info,
            Self::RandomCue(random_cue) => &random_cue.info,
            Self::EndRemixEntity(entity) => &entity.info,
            Self::ShakeEntity(entity) => &entity.info,
            Self::TextureEntity(entity) => &entity.info,
            Self::SubtitleEntity(entity) => &entity.info,
            Self::TapeMeasure(entity) => &entity.info,
            Self::PlayalongEntity(entity) => &entity.info,
            Self::MusicDistortEntity(entity) => &entity.info,
            Self::PitchBenderEntity(entity) => &entity.info,
        }
    }
}

/// A single sound
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cue {
    /// Shared datamodel fields
    #[serde(flatten)]
    pub info:                DatamodelInfo,
    /// Length in beats
    pub duration:            f64,
    /// Whether the length can be changed in the editor
    pub stretchable:         bool,
    /// Whether the pitch can be changed
    pub repitchable:         bool,
    /// Sound file format
    pub file_extension:      SoundFileExtension,
    /// Whether the sound loops
    pub loops:               bool,
    /// Cue played before this one
    pub intro_sound:         Option<String>,
    /// Cue played after this one
    pub ending_sound:        Option<String>,
    /// Cues that count as a response to this one
    #[serde(rename = "responseIDs")]
    pub response_ids:        Vec<String>,
    /// Tempo the sound was recorded at, `0` when not tempo-bound
    pub base_bpm:            f64,
    /// Stretch instead of resample when the tempo changes
    pub use_time_stretching: bool,
    /// Seconds the sound starts before its beat
    pub earliness:           f64,
    /// Loop start in seconds
    pub loop_start:          f64,
    /// Loop end in seconds, `-1` for the end of the file
    pub loop_end:            f64,
}

/// Cues placed at explicit beats
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    /// Shared datamodel fields
    #[serde(flatten)]
    pub info:        DatamodelInfo,
    /// Referenced cues
    pub cues:        Vec<CuePointer>,
    /// Whether the length can be changed in the editor
    pub stretchable: bool,
}

/// Cues spaced `distance` beats apart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equidistant {
    /// Shared datamodel fields
    #[serde(flatten)]
    pub info:        DatamodelInfo,
    /// Beats between consecutive cues
    pub distance:    f64,
    /// Whether the length can be changed in the editor
    pub stretchable: bool,
    /// Referenced cues
    pub cues:        Vec<CuePointer>,
}

/// Cues repeated to fill a stretchable duration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeepTheBeat {
    /// Shared datamodel fields
    #[serde(flatten)]
    pub info:             DatamodelInfo,
    /// Length of one repetition
    pub default_duration: f64,
    /// Referenced cues
    pub cues:             Vec<CuePointer>,
}

/// One cue picked at random from a list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RandomCue {
    /// Shared datamodel fields
    #[serde(flatten)]
    pub info:         DatamodelInfo,
    /// Referenced cues
    pub cues:         Vec<CuePointer>,
    /// Cues that count as a response to this one
    #[serde(rename = "responseIDs")]
    pub response_ids: Vec<String>,
}

/// Marks the end of a remix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndRemixEntity {
    /// Shared datamodel fields
    #[serde(flatten)]
    pub info: DatamodelInfo,
}

/// Screen shake
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShakeEntity {
    /// Shared datamodel fields
    #[serde(flatten)]
    pub info: DatamodelInfo,
}

/// Shows a texture
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureEntity {
    /// Shared datamodel fields
    #[serde(flatten)]
    pub info: DatamodelInfo,
}

/// Shows subtitle, title or artist text
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleEntity {
    /// Shared datamodel fields
    #[serde(flatten)]
    pub info:          DatamodelInfo,
    /// What the subtitle shows
    pub subtitle_type: SubtitleType,
}

/// Measuring helper in the editor timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TapeMeasure {
    /// Shared datamodel fields
    #[serde(flatten)]
    pub info: DatamodelInfo,
}

/// An input the player performs along with the remix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayalongEntity {
    /// Shared datamodel fields
    #[serde(flatten)]
    pub info:        DatamodelInfo,
    /// Whether the length can be changed in the editor
    pub stretchable: bool,
    /// Expected player input
    pub input:       PlayalongInput,
    /// How the input is performed
    pub method:      PlayalongMethod,
}

/// Distorts the music track
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MusicDistortEntity {
    /// Shared datamodel fields
    #[serde(flatten)]
    pub info: DatamodelInfo,
}

/// Bends the music track's pitch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitchBenderEntity {
    /// Shared datamodel fields
    #[serde(flatten)]
    pub info: DatamodelInfo,
}

/// Reference to a cue with its placement inside a pattern-like datamodel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuePointer {
    /// Object id
    pub id:       String,
    /// Offset from the parent start, in beats
    pub beat:     f64,
    /// Length in beats
    pub duration: f64,
    /// Track offset
    pub track:    i64,
    /// Pitch offset in semitones
    pub semitone: i64,
    /// Volume in percent
    pub volume:   i64,
    /// Free-form data carried through unchanged
    pub metadata: Map<String, Value>,
}
