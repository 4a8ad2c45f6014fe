//! Domain enumerations referenced by game and datamodel schemas

use serde::{Serialize, Serializer};

/// Which game series a definition belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Series {
    /// Series not known
    Unknown,
    /// Rhythm Tengoku
    Tengoku,
    /// Rhythm Heaven (DS)
    Ds,
    /// Rhythm Heaven Fever
    Fever,
    /// Rhythm Heaven Megamix
    Megamix,
    /// Side games and extras
    Side,
    /// Anything else
    Other,
}

impl Series {
    /// All series, in lookup order
    pub const VALUES: [Self; 7] = [
        Self::Unknown,
        Self::Tengoku,
        Self::Ds,
        Self::Fever,
        Self::Megamix,
        Self::Side,
        Self::Other,
    ];

    /// Lowercase id used in definition files
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Tengoku => "tengoku",
            Self::Ds => "ds",
            Self::Fever => "fever",
            Self::Megamix => "megamix",
            Self::Side => "side",
            Self::Other => "other",
        }
    }

    /// Case-insensitive lookup
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::VALUES
            .into_iter()
            .find(|series| series.id().eq_ignore_ascii_case(id))
    }
}

/// Audio container a cue's sound file uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundFileExtension {
    /// Ogg Vorbis, the database default
    #[default]
    Ogg,
    /// Wave
    Wav,
    /// MPEG layer 3
    Mp3,
}

impl SoundFileExtension {
    /// Every accepted extension
    pub const VALUES: [Self; 3] = [Self::Ogg, Self::Wav, Self::Mp3];

    /// Extension without the dot
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Ogg => "ogg",
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
        }
    }

    /// Case-insensitive lookup
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::VALUES
            .into_iter()
            .find(|ext| ext.extension().eq_ignore_ascii_case(extension))
    }
}

/// What a subtitle entity shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubtitleType {
    /// Free-form subtitle text
    #[default]
    Subtitle,
    /// The song title card
    SongTitle,
    /// The song artist card
    SongArtist,
}

impl SubtitleType {
    /// Every subtitle type
    pub const VALUES: [Self; 3] = [Self::Subtitle, Self::SongTitle, Self::SongArtist];

    /// Id used in definition files
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Subtitle => "subtitle",
            Self::SongTitle => "songTitle",
            Self::SongArtist => "songArtist",
        }
    }

    /// Exact lookup
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::VALUES.into_iter().find(|kind| kind.id() == id)
    }
}

/// Input a playalong entity expects from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayalongInput {
    /// A button
    ButtonA,
    /// B button
    ButtonB,
    /// Any direction on the D-pad
    Dpad,
    /// D-pad up
    DpadUp,
    /// D-pad down
    DpadDown,
    /// D-pad left
    DpadLeft,
    /// D-pad right
    DpadRight,
    /// A or any D-pad direction
    ButtonAOrDpad,
    /// Touch screen tap
    TouchTap,
    /// Touch screen flick
    TouchFlick,
    /// Lifting off the touch screen
    TouchRelease,
    /// Short touch screen tap
    TouchQuickTap,
    /// Touch screen slide
    TouchSlide,
}

impl PlayalongInput {
    /// Every input, in lookup order
    pub const VALUES: [Self; 13] = [
        Self::ButtonA,
        Self::ButtonB,
        Self::Dpad,
        Self::DpadUp,
        Self::DpadDown,
        Self::DpadLeft,
        Self::DpadRight,
        Self::ButtonAOrDpad,
        Self::TouchTap,
        Self::TouchFlick,
        Self::TouchRelease,
        Self::TouchQuickTap,
        Self::TouchSlide,
    ];

    /// Current id written to definition files
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::ButtonA => "A",
            Self::ButtonB => "B",
            Self::Dpad => "+",
            Self::DpadUp => "+_up",
            Self::DpadDown => "+_down",
            Self::DpadLeft => "+_left",
            Self::DpadRight => "+_right",
            Self::ButtonAOrDpad => "A_+",
            Self::TouchTap => "touch_tap",
            Self::TouchFlick => "touch_flick",
            Self::TouchRelease => "touch_release",
            Self::TouchQuickTap => "touch_quick_tap",
            Self::TouchSlide => "touch_slide",
        }
    }

    /// Older ids still accepted on input
    #[must_use]
    pub const fn deprecated_ids(self) -> &'static [&'static str] {
        match self {
            Self::ButtonAOrDpad => &["A/+"],
            Self::TouchRelease => &["touch_lift"],
            _ => &[],
        }
    }

    /// Match the current id or any deprecated alias
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::VALUES
            .into_iter()
            .find(|input| input.id() == id || input.deprecated_ids().contains(&id))
    }
}

impl Serialize for PlayalongInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// How a playalong input has to be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayalongMethod {
    /// Press once
    #[default]
    Press,
    /// Press and keep holding
    PressAndHold,
    /// Hold until the cue ends
    LongPress,
    /// Release, then hold again
    ReleaseAndHold,
    /// Release a held input
    Release,
}

impl PlayalongMethod {
    /// Every method
    pub const VALUES: [Self; 5] = [
        Self::Press,
        Self::PressAndHold,
        Self::LongPress,
        Self::ReleaseAndHold,
        Self::Release,
    ];

    /// Id used in definition files
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Press => "PRESS",
            Self::PressAndHold => "PRESS_AND_HOLD",
            Self::LongPress => "LONG_PRESS",
            Self::ReleaseAndHold => "RELEASE_AND_HOLD",
            Self::Release => "RELEASE",
        }
    }

    /// Exact lookup
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::VALUES.into_iter().find(|method| method.id() == id)
    }
}

/// Language of a game's voice lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// No language, written as the string `"null"`
    #[default]
    None,
    /// `en`
    English,
    /// `ja`
    Japanese,
    /// `ko`
    Korean,
    /// `fr`
    French,
    /// `es`
    Spanish,
    /// `de`
    German,
}

impl Language {
    /// Every real language (excludes `None`)
    pub const VALUES: [Self; 6] = [
        Self::English,
        Self::Japanese,
        Self::Korean,
        Self::French,
        Self::Spanish,
        Self::German,
    ];

    /// ISO 639-1 code, or `None` for the sentinel
    #[must_use]
    pub const fn code(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::English => Some("en"),
            Self::Japanese => Some("ja"),
            Self::Korean => Some("ko"),
            Self::French => Some("fr"),
            Self::Spanish => Some("es"),
            Self::German => Some("de"),
        }
    }

    /// Case-insensitive lookup by code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::VALUES.into_iter().find(|language| {
            language
                .code()
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(code))
        })
    }

    /// `true` for the `None` sentinel
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code().unwrap_or(crate::constants::LANGUAGE_NONE_TOKEN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_lookup_ignores_case() {
        assert_eq!(Series::from_id("FEVER"), Some(Series::Fever));
        assert_eq!(Series::from_id("Other"), Some(Series::Other));
        assert_eq!(Series::from_id("switch"), None);
    }

    #[test]
    fn test_playalong_input_accepts_deprecated_alias() {
        assert_eq!(
            PlayalongInput::from_id("A/+"),
            Some(PlayalongInput::ButtonAOrDpad)
        );
        assert_eq!(
            PlayalongInput::from_id("touch_lift"),
            Some(PlayalongInput::TouchRelease)
        );
        assert_eq!(PlayalongInput::from_id("a"), None);
    }

    #[test]
    fn test_language_serializes_none_token() {
        assert_eq!(
            serde_json::to_value(Language::None).ok(),
            Some(serde_json::json!("null"))
        );
        assert_eq!(
            serde_json::to_value(Language::Japanese).ok(),
            Some(serde_json::json!("ja"))
        );
    }
}
