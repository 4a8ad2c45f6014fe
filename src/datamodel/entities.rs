//! Entity datamodels: markers and effects that carry little or no data

use paste::paste;

use crate::property::Property;
use crate::records::{self, PlayalongEntity, SubtitleEntity};
use crate::schema::{AnyProperty, Reconstruct, Reconstruction, Struct};
use crate::transformers::{boolean, playalong_input, playalong_method, subtitle_type};
use crate::types::{PlayalongInput, PlayalongMethod, SubtitleType};

use super::base::DatamodelBase;

/// Entities whose schema is exactly the datamodel base
macro_rules! simple_entities {
    ($($record:ident => $kind:literal),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!("Schema for `", $kind, "` datamodels: base fields only")]
                #[derive(Debug, Clone, Default)]
                pub struct [<$record Object>] {
                    /// Shared datamodel fields
                    pub base: DatamodelBase,
                }

                impl [<$record Object>] {
                    /// Empty schema ready for binding
                    #[must_use]
                    pub fn new() -> Self {
                        Self {
                            base: DatamodelBase::new(),
                        }
                    }
                }

                impl Struct for [<$record Object>] {
                    fn properties(&self) -> Vec<&dyn AnyProperty> {
                        self.base.properties()
                    }

                    fn properties_mut(&mut self) -> Vec<&mut dyn AnyProperty> {
                        self.base.properties_mut()
                    }
                }

                impl Reconstruct for [<$record Object>] {
                    type Record = records::$record;

                    fn reconstruct(&self, r: &mut Reconstruction) -> records::$record {
                        records::$record {
                            info: self.base.reconstruct(r),
                        }
                    }
                }
            )*
        }
    };
}

simple_entities!(
    EndRemixEntity => "endEntity",
    ShakeEntity => "shakeEntity",
    TextureEntity => "textureEntity",
    TapeMeasure => "tapeMeasure",
    MusicDistortEntity => "musicDistortEntity",
    PitchBenderEntity => "pitchBenderEntity",
);

/// Schema for `subtitleEntity` datamodels
#[derive(Debug, Clone)]
pub struct SubtitleEntityObject {
    /// Shared datamodel fields
    pub base:          DatamodelBase,
    /// `subtitleType`
    pub subtitle_type: Property<SubtitleType>,
}

impl SubtitleEntityObject {
    /// Empty schema ready for binding
    #[must_use]
    pub fn new() -> Self {
        Self {
            base:          DatamodelBase::new(),
            subtitle_type: Property::optional(
                "subtitleType",
                subtitle_type,
                SubtitleType::Subtitle,
            ),
        }
    }
}

impl Default for SubtitleEntityObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Struct for SubtitleEntityObject {
    fn properties(&self) -> Vec<&dyn AnyProperty> {
        let mut properties = self.base.properties();
        properties.push(&self.subtitle_type);
        properties
    }

    fn properties_mut(&mut self) -> Vec<&mut dyn AnyProperty> {
        let mut properties = self.base.properties_mut();
        properties.push(&mut self.subtitle_type);
        properties
    }
}

impl Reconstruct for SubtitleEntityObject {
    type Record = SubtitleEntity;

    fn reconstruct(&self, r: &mut Reconstruction) -> SubtitleEntity {
        SubtitleEntity {
            info:          self.base.reconstruct(r),
            subtitle_type: r.take(&self.subtitle_type),
        }
    }
}

/// Schema for `playalongEntity` datamodels
#[derive(Debug, Clone)]
pub struct PlayalongEntityObject {
    /// Shared datamodel fields
    pub base:        DatamodelBase,
    /// `stretchable`
    pub stretchable: Property<bool>,
    /// `input`, required
    pub input:       Property<PlayalongInput>,
    /// `method`
    pub method:      Property<PlayalongMethod>,
}

impl PlayalongEntityObject {
    /// Empty schema ready for binding
    #[must_use]
    pub fn new() -> Self {
        Self {
            base:        DatamodelBase::new(),
            stretchable: Property::optional("stretchable", boolean, false),
            input:       Property::required("input", playalong_input, PlayalongInput::ButtonA),
            method:      Property::optional("method", playalong_method, PlayalongMethod::Press),
        }
    }
}

impl Default for PlayalongEntityObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Struct for PlayalongEntityObject {
    fn properties(&self) -> Vec<&dyn AnyProperty> {
        let mut properties = self.base.properties();
        properties.extend([
            &self.stretchable as &dyn AnyProperty,
            &self.input,
            &self.method,
        ]);
        properties
    }

    fn properties_mut(&mut self) -> Vec<&mut dyn AnyProperty> {
        let mut properties = self.base.properties_mut();
        properties.extend([
            &mut self.stretchable as &mut dyn AnyProperty,
            &mut self.input,
            &mut self.method,
        ]);
        properties
    }
}

impl Reconstruct for PlayalongEntityObject {
    type Record = PlayalongEntity;

    fn reconstruct(&self, r: &mut Reconstruction) -> PlayalongEntity {
        PlayalongEntity {
            info:        self.base.reconstruct(r),
            stretchable: r.take(&self.stretchable),
            input:       r.take(&self.input),
            method:      r.take(&self.method),
        }
    }
}
