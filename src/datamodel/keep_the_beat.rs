use crate::property::Property;
use crate::records::KeepTheBeat;
use crate::result::FieldResult;
use crate::schema::{AnyProperty, Reconstruct, Reconstruction, Struct};
use crate::transformers::positive_float;

use super::base::DatamodelBase;
use super::cue_pointer::{CuePointerObject, CuePointerUsage, cue_pointer_list};

/// Schema for `keepTheBeat` datamodels
#[derive(Debug, Clone)]
pub struct KeepTheBeatObject {
    /// Shared datamodel fields
    pub base:             DatamodelBase,
    /// `defaultDuration` of one repetition
    pub default_duration: Property<f64>,
    /// `cues`
    pub cues:             Property<Vec<FieldResult<CuePointerObject>>>,
}

impl KeepTheBeatObject {
    /// Empty schema ready for binding
    #[must_use]
    pub fn new() -> Self {
        Self {
            base:             DatamodelBase::new(),
            default_duration: Property::required(
                "defaultDuration",
                positive_float("Default duration must be greater than zero", false),
                0.0,
            ),
            cues:             Property::required(
                "cues",
                cue_pointer_list(CuePointerUsage::PLACED),
                Vec::new(),
            ),
        }
    }
}

impl Default for KeepTheBeatObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Struct for KeepTheBeatObject {
    fn properties(&self) -> Vec<&dyn AnyProperty> {
        let mut properties = self.base.properties();
        properties.extend([&self.default_duration as &dyn AnyProperty, &self.cues]);
        properties
    }

    fn properties_mut(&mut self) -> Vec<&mut dyn AnyProperty> {
        let mut properties = self.base.properties_mut();
        properties.extend([
            &mut self.default_duration as &mut dyn AnyProperty,
            &mut self.cues,
        ]);
        properties
    }
}

impl Reconstruct for KeepTheBeatObject {
    type Record = KeepTheBeat;

    fn reconstruct(&self, r: &mut Reconstruction) -> KeepTheBeat {
        KeepTheBeat {
            info:             self.base.reconstruct(r),
            default_duration: r.take(&self.default_duration),
            cues:             r.take_list(&self.cues, |pointer, r| pointer.reconstruct(r)),
        }
    }
}
