use crate::property::Property;
use crate::records::Pattern;
use crate::result::FieldResult;
use crate::schema::{AnyProperty, Reconstruct, Reconstruction, Struct};
use crate::transformers::boolean;

use super::base::DatamodelBase;
use super::cue_pointer::{CuePointerObject, CuePointerUsage, cue_pointer_list};

/// Schema for `pattern` datamodels: cues at explicit beats
#[derive(Debug, Clone)]
pub struct PatternObject {
    /// Shared datamodel fields
    pub base:        DatamodelBase,
    /// `cues`
    pub cues:        Property<Vec<FieldResult<CuePointerObject>>>,
    /// `stretchable`
    pub stretchable: Property<bool>,
}

impl PatternObject {
    /// Empty schema ready for binding
    #[must_use]
    pub fn new() -> Self {
        Self {
            base:        DatamodelBase::new(),
            cues:        Property::required(
                "cues",
                cue_pointer_list(CuePointerUsage::PLACED),
                Vec::new(),
            ),
            stretchable: Property::optional("stretchable", boolean, false),
        }
    }
}

impl Default for PatternObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Struct for PatternObject {
    fn properties(&self) -> Vec<&dyn AnyProperty> {
        let mut properties = self.base.properties();
        properties.extend([&self.cues as &dyn AnyProperty, &self.stretchable]);
        properties
    }

    fn properties_mut(&mut self) -> Vec<&mut dyn AnyProperty> {
        let mut properties = self.base.properties_mut();
        properties.extend([&mut self.cues as &mut dyn AnyProperty, &mut self.stretchable]);
        properties
    }
}

impl Reconstruct for PatternObject {
    type Record = Pattern;

    fn reconstruct(&self, r: &mut Reconstruction) -> Pattern {
        Pattern {
            info:        self.base.reconstruct(r),
            cues:        r.take_list(&self.cues, |pointer, r| pointer.reconstruct(r)),
            stretchable: r.take(&self.stretchable),
        }
    }
}
