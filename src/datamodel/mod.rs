//! Polymorphic datamodels and the `type` dispatcher
//!
//! A datamodel is one entry of a game's `objects` array. The `type` string
//! selects one of the schemas below through [`KINDS`]; adding a kind means
//! adding a table entry and a variant.

use serde_json::Value;
use tracing::debug;

use crate::constants::{
    TYPE_CUE, TYPE_END_ENTITY, TYPE_EQUIDISTANT, TYPE_KEEP_THE_BEAT, TYPE_KEY,
    TYPE_MUSIC_DISTORT_ENTITY, TYPE_PATTERN, TYPE_PITCH_BENDER_ENTITY, TYPE_PLAYALONG_ENTITY,
    TYPE_RANDOM_CUE, TYPE_SHAKE_ENTITY, TYPE_SUBTITLE_ENTITY, TYPE_TAPE_MEASURE,
    TYPE_TEXTURE_ENTITY,
};
use crate::records::Datamodel;
use crate::result::FieldResult;
use crate::schema::{AnyProperty, Reconstruct, Reconstruction, Struct, aggregate, bind_object};
use crate::transformers::type_mismatch;

mod base;
mod cue;
mod cue_pointer;
mod entities;
mod equidistant;
mod keep_the_beat;
mod pattern;
mod random_cue;


pub use self::base::DatamodelBase;
pub use self::cue::CueObject;
pub use self::cue_pointer::{
    CuePointerObject, CuePointerUsage, cue_pointer_list, transform_cue_pointer,
};
pub use self::entities::{
    EndRemixEntityObject, MusicDistortEntityObject, PitchBenderEntityObject,
    PlayalongEntityObject, ShakeEntityObject, SubtitleEntityObject, TapeMeasureObject,
    TextureEntityObject,
};
pub use self::equidistant::EquidistantObject;
pub use self::keep_the_beat::KeepTheBeatObject;
pub use self::pattern::PatternObject;
pub use self::random_cue::RandomCueObject;

/// One datamodel schema, tagged by kind
#[derive(Debug, Clone)]
pub enum DatamodelObject {
    /// A single sound
    Cue(CueObject),
    /// Cues at explicit beats
    Pattern(PatternObject),
    /// Cues evenly spaced
    Equidistant(EquidistantObject),
    /// A repeating sequence of cues
    KeepTheBeat(KeepTheBeatObject),
    /// One cue picked at random
    RandomCue(RandomCueObject),
    /// End-of-remix marker
    EndRemixEntity(EndRemixEntityObject),
    /// Screen shake
    ShakeEntity(ShakeEntityObject),
    /// Texture overlay
    TextureEntity(TextureEntityObject),
    /// Subtitle or title card
    SubtitleEntity(SubtitleEntityObject),
    /// Editor measuring tool
    TapeMeasure(TapeMeasureObject),
    /// Playalong input prompt
    PlayalongEntity(PlayalongEntityObject),
    /// Music distortion effect
    MusicDistortEntity(MusicDistortEntityObject),
    /// Music pitch bend effect
    PitchBenderEntity(PitchBenderEntityObject),
}

/// Builds an empty schema for one kind
type Builder = fn() -> DatamodelObject;

/// Discriminator string to schema builder
pub static KINDS: [(&str, Builder); 13] = [
    (TYPE_CUE, || DatamodelObject::Cue(CueObject::new())),
    (TYPE_PATTERN, || DatamodelObject::Pattern(PatternObject::new())),
    (TYPE_EQUIDISTANT, || {
        DatamodelObject::Equidistant(EquidistantObject::new())
    }),
    (TYPE_KEEP_THE_BEAT, || {
        DatamodelObject::KeepTheBeat(KeepTheBeatObject::new())
    }),
    (TYPE_RANDOM_CUE, || DatamodelObject::RandomCue(RandomCueObject::new())),
    (TYPE_END_ENTITY, || {
        DatamodelObject::EndRemixEntity(EndRemixEntityObject::new())
    }),
    (TYPE_SHAKE_ENTITY, || {
        DatamodelObject::ShakeEntity(ShakeEntityObject::new())
    }),
    (TYPE_TEXTURE_ENTITY, || {
        DatamodelObject::TextureEntity(TextureEntityObject::new())
    }),
    (TYPE_SUBTITLE_ENTITY, || {
        DatamodelObject::SubtitleEntity(SubtitleEntityObject::new())
    }),
    (TYPE_TAPE_MEASURE, || {
        DatamodelObject::TapeMeasure(TapeMeasureObject::new())
    }),
    (TYPE_PLAYALONG_ENTITY, || {
        DatamodelObject::PlayalongEntity(PlayalongEntityObject::new())
    }),
    (TYPE_MUSIC_DISTORT_ENTITY, || {
        DatamodelObject::MusicDistortEntity(MusicDistortEntityObject::new())
    }),
    (TYPE_PITCH_BENDER_ENTITY, || {
        DatamodelObject::PitchBenderEntity(PitchBenderEntityObject::new())
    }),
];

impl DatamodelObject {
    /// Empty schema for a discriminator, if the kind is known
    #[must_use]
    pub fn for_kind(kind: &str) -> Option<Self> {
        KINDS
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(_, build)| build())
    }

    /// Discriminator this schema is selected by
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Cue(_) => TYPE_CUE,
            Self::Pattern(_) => TYPE_PATTERN,
            Self::Equidistant(_) => TYPE_EQUIDISTANT,
            Self::KeepTheBeat(_) => TYPE_KEEP_THE_BEAT,
            Self::RandomCue(_) => TYPE_RANDOM_CUE,
            Self::EndRemixEntity(_) => TYPE_END_ENTITY,
            Self::ShakeEntity(_) => TYPE_SHAKE_ENTITY,
            Self::TextureEntity(_) => TYPE_TEXTURE_ENTITY,
            Self::SubtitleEntity(_) => TYPE_SUBTITLE_ENTITY,
            Self::TapeMeasure(_) => TYPE_TAPE_MEASURE,
            Self::PlayalongEntity(_) => TYPE_PLAYALONG_ENTITY,
            Self::MusicDistortEntity(_) => TYPE_MUSIC_DISTORT_ENTITY,
            Self::PitchBenderEntity(_) => TYPE_PITCH_BENDER_ENTITY,
        }
    }

    /// Base fields shared by every kind
    #[must_use]
    pub const fn base(&self) -> &DatamodelBase {
        match self {
            Self::Cue(object) => &object.base,
            Self::Pattern(object) => &object.base,
            Self::Equidistant(object) => &object.base,
            Self::KeepTheBeat(object) => &object.base,
            Self::RandomCue(object) => &object.base,
            Self::EndRemixEntity(object) => &object.base,
            Self::ShakeEntity(object) => &object.base,
            Self::TextureEntity(object) => &object.base,
            Self::SubtitleEntity(object) => &object.base,
            Self::TapeMeasure(object) => &object.base,
            Self::PlayalongEntity(object) => &object.base,
            Self::MusicDistortEntity(object) => &object.base,
            Self::PitchBenderEntity(object) => &object.base,
        }
    }

    fn as_struct(&self) -> &dyn Struct {
        match self {
            Self::Cue(object) => object,
            Self::Pattern(object) => object,
            Self::Equidistant(object) => object,
            Self::KeepTheBeat(object) => object,
            Self::RandomCue(object) => object,
            Self::EndRemixEntity(object) => object,
            Self::ShakeEntity(object) => object,
            Self::TextureEntity(object) => object,
            Self::SubtitleEntity(object) => object,
            Self::TapeMeasure(object) => object,
            Self::PlayalongEntity(object) => object,
            Self::MusicDistortEntity(object) => object,
            Self::PitchBenderEntity(object) => object,
        }
    }

    fn as_struct_mut(&mut self) -> &mut dyn Struct {
        match self {
            Self::Cue(object) => object,
            Self::Pattern(object) => object,
            Self::Equidistant(object) => object,
            Self::KeepTheBeat(object) => object,
            Self::RandomCue(object) => object,
            Self::EndRemixEntity(object) => object,
            Self::ShakeEntity(object) => object,
            Self::TextureEntity(object) => object,
            Self::SubtitleEntity(object) => object,
            Self::TapeMeasure(object) => object,
            Self::PlayalongEntity(object) => object,
            Self::MusicDistortEntity(object) => object,
            Self::PitchBenderEntity(object) => object,
        }
    }
}

impl Struct for DatamodelObject {
    fn properties(&self) -> Vec<&dyn AnyProperty> {
        self.as_struct().properties()
    }

    fn properties_mut(&mut self) -> Vec<&mut dyn AnyProperty> {
        self.as_struct_mut().properties_mut()
    }
}

impl Reconstruct for DatamodelObject {
    type Record = Datamodel;

    fn reconstruct(&self, r: &mut Reconstruction) -> Datamodel {
        match self {
            Self::Cue(object) => Datamodel::Cue(object.reconstruct(r)),
            Self::Pattern(object) => Datamodel::Pattern(object.reconstruct(r)),
            Self::Equidistant(object) => Datamodel::Equidistant(object.reconstruct(r)),
            Self::KeepTheBeat(object) => Datamodel::KeepTheBeat(object.reconstruct(r)),
            Self::RandomCue(object) => Datamodel::RandomCue(object.reconstruct(r)),
            Self::EndRemixEntity(object) => Datamodel::EndRemixEntity(object.reconstruct(r)),
            Self::ShakeEntity(object) => Datamodel::ShakeEntity(object.reconstruct(r)),
            Self::TextureEntity(object) => Datamodel::TextureEntity(object.reconstruct(r)),
            Self::SubtitleEntity(object) => Datamodel::SubtitleEntity(object.reconstruct(r)),
            Self::TapeMeasure(object) => Datamodel::TapeMeasure(object.reconstruct(r)),
            Self::PlayalongEntity(object) => Datamodel::PlayalongEntity(object.reconstruct(r)),
            Self::MusicDistortEntity(object) => {
                Datamodel::MusicDistortEntity(object.reconstruct(r))
            }
            Self::PitchBenderEntity(object) => {
                Datamodel::PitchBenderEntity(object.reconstruct(r))
            }
        }
    }
}

/// Dispatch on `type`, bind the selected schema and aggregate its failures.
///
/// - missing or non-string `type`: `Failure("Missing type string field")`
/// - unknown `type`: `Failure` naming the kind
/// - any field, or any element of a list field, not `Success`: `Failure`
///   holding the partial datamodel and every offending field
pub fn transform_datamodel(value: &Value) -> FieldResult<DatamodelObject> {
    let Value::Object(object) = value else {
        return type_mismatch("object", value);
    };
    let Some(kind) = object.get(TYPE_KEY).and_then(Value::as_str) else {
        debug!("datamodel has no type string");
        return FieldResult::failure(value, "Missing type string field");
    };
    let Some(mut datamodel) = DatamodelObject::for_kind(kind) else {
        debug!(kind, "unknown datamodel type");
        return FieldResult::failure(
            value,
            format!("Type `{kind}` is not valid or not implemented"),
        );
    };

    bind_object(&mut datamodel, object);
    debug!(kind, id = datamodel.base().id_or_unknown(), "bound datamodel");

    aggregate(datamodel, value, |datamodel| {
        format!("Error in datamodel {}", datamodel.base().id_or_unknown())
    })
}
